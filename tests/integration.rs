// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{
    fs,
    path::{Path, PathBuf},
    thread,
    time::{Duration, SystemTime}
};

use hbm_modelgen::{Error, GeneratorConfig, run_conversion};
use tempfile::TempDir;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("hbm_modelgen=debug")
        .try_init();
}

const CONFIG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<hibernate-configuration>
    <session-factory>
        <property name="connection.driver_class">org.h2.Driver</property>
        <mapping resource="org/x/Building.hbm.xml"/>
        <mapping resource="org/x/Room.hbm.xml"/>
    </session-factory>
</hibernate-configuration>
"#;

const BUILDING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<hibernate-mapping package="org.x">
    <class name="Building" table="building">
        <id name="uniqueId" column="uniqueid" type="java.lang.Long"/>
        <property name="abbreviation" column="abbreviation" type="java.lang.String"/>
        <many-to-one name="room" class="Room" column="room_id"/>
        <many-to-one name="campus" class="Campus" column="campus_id"/>
    </class>
</hibernate-mapping>
"#;

const ROOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<hibernate-mapping package="org.x">
    <class name="Room" table="room">
        <id name="uniqueId" column="uid" type="java.lang.Long"/>
        <property name="name" column="name" type="java.lang.String"/>
    </class>
    <class name="Location" table="location" abstract="true">
        <id name="permanentId" column="permanent_id" type="java.lang.String"/>
        <property name="label" column="label" type="java.lang.String"/>
        <union-subclass name="Lab" table="lab">
            <property name="benches" column="benches" type="java.lang.Integer"/>
            <subclass name="ChemistryLab">
                <property name="fumeHoods" column="fume_hoods" type="java.lang.Integer"/>
            </subclass>
        </union-subclass>
    </class>
    <class name="RoomPref" table="room_pref">
        <composite-id>
            <key-many-to-one name="room" class="Room" column="room_id"/>
            <key-property name="level" type="java.lang.Integer" column="level"/>
        </composite-id>
    </class>
</hibernate-mapping>
"#;

struct Project {
    dir: TempDir
}

impl Project {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("hibernate.cfg.xml"), CONFIG);
        write(&dir.path().join("org/x/Building.hbm.xml"), BUILDING);
        write(&dir.path().join("org/x/Room.hbm.xml"), ROOM);
        Self {
            dir
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new().with_source(self.root())
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative))
            .unwrap_or_else(|e| panic!("reading {relative}: {e}"))
    }

    fn modified(&self, relative: &str) -> SystemTime {
        fs::metadata(self.root().join(relative))
            .and_then(|m| m.modified())
            .unwrap_or_else(|e| panic!("stat {relative}: {e}"))
    }
}

fn write(path: &Path, text: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

#[test]
fn room_and_building_end_to_end() {
    init_logging();
    let project = Project::new();
    let report = run_conversion(&project.config()).unwrap();

    assert_eq!(report.entities, 6);
    assert_eq!(report.written, 24);

    for entity in ["Room", "Building"] {
        for file in [
            format!("org/x/base/Base{entity}.java"),
            format!("org/x/{entity}.java"),
            format!("org/x/base/Base{entity}DAO.java"),
            format!("org/x/dao/{entity}DAO.java")
        ] {
            assert!(project.root().join(&file).is_file(), "{file} missing");
        }
    }

    let base_room = project.read("org/x/base/BaseRoom.java");
    assert!(base_room.contains("public abstract class BaseRoom implements Serializable {"));
    assert!(base_room.contains("\tpublic static String PROP_UID = \"uniqueId\";"));
    assert!(base_room.contains("\tpublic static String PROP_NAME = \"name\";"));
    assert!(base_room.contains("\t\treturn getUniqueId().equals(((Room)o).getUniqueId());"));
    assert!(base_room.contains("\t\tif (getUniqueId() == null) return super.hashCode();"));
    assert!(base_room.contains("\t\treturn getUniqueId().hashCode();"));
    assert!(base_room.contains("return \"Room[\"+getUniqueId()+\" \"+getName()+\"]\";"));

    let building_dao = project.read("org/x/base/BaseBuildingDAO.java");
    assert!(building_dao.contains("extends _RootDAO<Building,Long> {"));
    assert!(building_dao.contains(
        "public List<Building> findByRoom(org.hibernate.Session hibSession, Long roomId) {"
    ));
    assert!(building_dao.contains(
        "createQuery(\"from Building x where x.room.uniqueId = :roomId\").setLong(\"roomId\", roomId).list();"
    ));
}

#[test]
fn finder_on_unmapped_target_uses_fallback_identifier() {
    let project = Project::new();
    run_conversion(&project.config()).unwrap();

    let building_dao = project.read("org/x/base/BaseBuildingDAO.java");
    assert!(building_dao.contains(
        "public List<Building> findByCampus(org.hibernate.Session hibSession, Long campusId) {"
    ));
    assert!(building_dao.contains("x.campus.uniqueId = :campusId"));
}

#[test]
fn second_run_is_idempotent_and_preserves_stubs() {
    let project = Project::new();
    run_conversion(&project.config()).unwrap();

    let base_before = project.read("org/x/base/BaseRoom.java");
    let dao_base_before = project.read("org/x/base/BaseRoomDAO.java");
    write(&project.root().join("org/x/Room.java"), "// hand edited\n");
    write(&project.root().join("org/x/dao/RoomDAO.java"), "// hand edited dao\n");
    let base_stamp = project.modified("org/x/base/BaseRoom.java");
    let dao_stamp = project.modified("org/x/dao/RoomDAO.java");
    thread::sleep(Duration::from_millis(50));

    let report = run_conversion(&project.config()).unwrap();
    assert_eq!(report.written, 0);
    assert_eq!(report.unchanged, 12);
    assert_eq!(report.preserved, 12);

    assert_eq!(project.read("org/x/base/BaseRoom.java"), base_before);
    assert_eq!(project.read("org/x/base/BaseRoomDAO.java"), dao_base_before);
    assert_eq!(project.read("org/x/Room.java"), "// hand edited\n");
    assert_eq!(project.read("org/x/dao/RoomDAO.java"), "// hand edited dao\n");
    assert_eq!(project.modified("org/x/base/BaseRoom.java"), base_stamp);
    assert_eq!(project.modified("org/x/dao/RoomDAO.java"), dao_stamp);
}

#[test]
fn subclass_debug_string_aggregates_ancestors() {
    let project = Project::new();
    run_conversion(&project.config()).unwrap();

    let chemistry = project.read("org/x/base/BaseChemistryLab.java");
    assert!(chemistry.contains("public abstract class BaseChemistryLab extends Lab implements Serializable {"));
    assert!(chemistry.contains(
        "\t\treturn \"ChemistryLab[\" +\n\
         \t\t\t\"\\n\\tBenches: \" + getBenches() +\n\
         \t\t\t\"\\n\\tFumeHoods: \" + getFumeHoods() +\n\
         \t\t\t\"\\n\\tLabel: \" + getLabel() +\n\
         \t\t\t\"\\n\\tPermanentId: \" + getPermanentId() +\n\
         \t\t\t\"]\";\n"
    ));
    assert!(chemistry.contains("\tpublic BaseChemistryLab(String permanentId) {"));
    assert!(chemistry.contains("return \"ChemistryLab[\"+getPermanentId()+\" \"+getLabel()+\"]\";"));

    let location = project.read("org/x/Location.java");
    assert!(location.contains("public abstract class Location extends BaseLocation {"));
    let location_dao = project.read("org/x/dao/LocationDAO.java");
    assert!(location_dao.contains("public class LocationDAO extends BaseLocationDAO {"));

    let lab_dao = project.read("org/x/base/BaseLabDAO.java");
    assert!(lab_dao.contains("extends _RootDAO<Lab,String> {"));
}

#[test]
fn composite_key_equality_and_hash() {
    let project = Project::new();
    run_conversion(&project.config()).unwrap();

    let pref = project.read("org/x/base/BaseRoomPref.java");
    assert!(pref.contains("\t\tRoomPref roomPref = (RoomPref)o;\n"));
    assert!(pref.contains(
        "\t\tif (getRoom() == null || roomPref.getRoom() == null || !getRoom().equals(roomPref.getRoom())) return false;\n"
    ));
    assert!(pref.contains(
        "\t\tif (getRoom() == null || getLevel() == null) return super.hashCode();\n\
         \t\treturn getRoom().hashCode() ^ getLevel().hashCode();\n"
    ));
    assert!(pref.contains("return \"RoomPref[\" + getRoom() + \", \" + getLevel() + \"]\";"));

    let pref_dao = project.read("org/x/base/BaseRoomPrefDAO.java");
    assert!(pref_dao.contains("extends _RootDAO<RoomPref,Serializable> {"));
}

#[test]
fn output_goes_next_to_web_content() {
    let dir = TempDir::new().unwrap();
    let classes = dir.path().join("WebContent/WEB-INF/classes");
    write(&classes.join("hibernate.cfg.xml"), CONFIG);
    write(&classes.join("org/x/Building.hbm.xml"), BUILDING);
    write(&classes.join("org/x/Room.hbm.xml"), ROOM);

    let config = GeneratorConfig::new().with_resource_root(&classes);
    run_conversion(&config).unwrap();

    let java_source: PathBuf = dir.path().join("JavaSource");
    assert!(java_source.join("org/x/base/BaseRoom.java").is_file());
    assert!(!classes.join("org").join("x").join("base").exists());
}

#[test]
fn custom_config_name_and_header() {
    let project = Project::new();
    write(&project.root().join("other.cfg.xml"), CONFIG);

    let config = project
        .config()
        .with_config_name("other.cfg.xml")
        .with_header("/* Licensed under MIT */");
    run_conversion(&config).unwrap();

    let stub = project.read("org/x/Room.java");
    assert!(stub.starts_with("/* Licensed under MIT */\npackage org.x;\n"));
}

#[test]
fn stock_doctypes_resolve_without_local_dtds() {
    let project = Project::new();
    write(
        &project.root().join("hibernate.cfg.xml"),
        &CONFIG.replacen(
            "<hibernate-configuration>",
            "<!DOCTYPE hibernate-configuration PUBLIC\n    \"-//Hibernate/Hibernate Configuration DTD 3.0//EN\"\n    \"http://www.hibernate.org/dtd/hibernate-configuration-3.0.dtd\">\n<hibernate-configuration>",
            1
        )
    );
    write(
        &project.root().join("org/x/Room.hbm.xml"),
        &ROOM.replacen(
            "<hibernate-mapping",
            "<!DOCTYPE hibernate-mapping PUBLIC\n    \"-//Hibernate/Hibernate Mapping DTD 3.0//EN\"\n    \"http://www.hibernate.org/dtd/hibernate-mapping-3.0.dtd\">\n<hibernate-mapping",
            1
        )
    );
    assert!(!project.root().join("org/hibernate").exists());

    let report = run_conversion(&project.config()).unwrap();
    assert_eq!(report.entities, 6);
    assert!(project.root().join("org/x/base/BaseRoom.java").is_file());
}

#[test]
fn missing_mapping_resource_is_fatal() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("hibernate.cfg.xml"), CONFIG);
    write(&dir.path().join("org/x/Building.hbm.xml"), BUILDING);

    let err = run_conversion(&GeneratorConfig::new().with_source(dir.path())).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!dir.path().join("org/x/base/BaseBuilding.java").exists());
}

#[test]
fn duplicate_entity_is_fatal() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("hibernate.cfg.xml"),
        r#"<hibernate-configuration><session-factory>
            <mapping resource="A.hbm.xml"/>
            <mapping resource="B.hbm.xml"/>
        </session-factory></hibernate-configuration>"#
    );
    write(
        &dir.path().join("A.hbm.xml"),
        r#"<hibernate-mapping package="a"><class name="Room"/></hibernate-mapping>"#
    );
    write(
        &dir.path().join("B.hbm.xml"),
        r#"<hibernate-mapping package="b"><class name="Room"/></hibernate-mapping>"#
    );

    let err = run_conversion(&GeneratorConfig::new().with_source(dir.path())).unwrap_err();
    assert!(matches!(err, Error::DuplicateEntity { .. }));
}
