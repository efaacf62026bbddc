// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runs with the default configuration from inside a project layout.
//!
//! Kept in its own test binary: it changes the process working directory.

use std::{env, fs, path::Path};

use hbm_modelgen::{GeneratorConfig, run_conversion};
use tempfile::TempDir;

const CONFIG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE hibernate-configuration PUBLIC
    "-//Hibernate/Hibernate Configuration DTD 3.0//EN"
    "http://www.hibernate.org/dtd/hibernate-configuration-3.0.dtd">
<hibernate-configuration>
    <session-factory>
        <property name="connection.driver_class">org.h2.Driver</property>
        <mapping resource="org/x/Room.hbm.xml"/>
    </session-factory>
</hibernate-configuration>
"#;

const ROOM: &str = r#"<?xml version="1.0"?>
<!DOCTYPE hibernate-mapping PUBLIC
    "-//Hibernate/Hibernate Mapping DTD 3.0//EN"
    "http://www.hibernate.org/dtd/hibernate-mapping-3.0.dtd">
<hibernate-mapping package="org.x">
    <class name="Room" table="room">
        <id name="uniqueId" column="uniqueid" type="java.lang.Long"/>
        <property name="name" column="name" type="java.lang.String"/>
    </class>
</hibernate-mapping>
"#;

fn write(path: &Path, text: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

#[test]
fn default_config_inside_web_content_writes_sibling_java_source() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().canonicalize().unwrap();
    let classes = project.join("WebContent/WEB-INF/classes");
    write(&classes.join("hibernate.cfg.xml"), CONFIG);
    write(&classes.join("org/x/Room.hbm.xml"), ROOM);

    let previous = env::current_dir().unwrap();
    env::set_current_dir(&classes).unwrap();
    let result = run_conversion(&GeneratorConfig::new());
    env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert_eq!(report.entities, 1);
    assert_eq!(report.written, 4);

    let base = project.join("JavaSource/org/x/base/BaseRoom.java");
    assert!(base.is_file());
    assert!(!classes.join("JavaSource").exists());
    assert!(!classes.join("org/x/base").exists());
}
