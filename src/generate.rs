// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source generation (second pass).
//!
//! Walks every entity of a resource in document order, renders its four
//! artifacts, hands them to the [`Emitter`], then descends into nested
//! subclasses. A subclass sees what its ancestors contributed: the parent
//! class it extends, the identifier it inherits, and every debug property
//! accumulated along the chain.
//!
//! # Architecture
//!
//! ```text
//! generate.rs (coordinator: Generator, EntityView, GenerationReport)
//! ├── imports.rs    - sorted, grouped import block
//! ├── members.rs    - fields, PROP_ constants, accessors, addTo methods
//! ├── base_class.rs - Base<Class> (always regenerated)
//! ├── concrete.rs   - <Class> stub (created once)
//! ├── dao_base.rs   - Base<Class>DAO (always regenerated)
//! └── dao.rs        - <Class>DAO stub (created once)
//! ```
//!
//! # Inheritance Flow
//!
//! ```text
//! Location (id UniqueId : Long, props {UniqueId})
//! └── Room  extends Location, inherits UniqueId, props {UniqueId, Name}
//!     └── Lab extends Room, inherits UniqueId, props {UniqueId, Name, Benches}
//! ```

mod base_class;
mod concrete;
mod dao;
mod dao_base;
mod imports;
mod members;

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::{
    config::GeneratorConfig,
    emit::{Artifact, ArtifactKind, EmitOutcome, Emitter, qualify},
    error::Result,
    mapping::{EntityMapping, MappingResource},
    resolve::{ResolutionModel, ResolvedIdentifier},
    types::JavaType
};

/// Javadoc marker placed on machine-owned classes.
pub(crate) const GENERATED_MARKER: &str = "/**\n * Do not change this class. It has been automatically generated by hbm-modelgen.\n */\n";

/// Tally of one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Entities generated, subclasses included.
    pub entities:  usize,
    /// Files created or replaced.
    pub written:   usize,
    /// Regenerated files whose contents did not change.
    pub unchanged: usize,
    /// Existing stubs left untouched.
    pub preserved: usize
}

impl GenerationReport {
    fn record(&mut self, outcome: EmitOutcome) {
        match outcome {
            EmitOutcome::Written => self.written += 1,
            EmitOutcome::Unchanged => self.unchanged += 1,
            EmitOutcome::Preserved => self.preserved += 1
        }
    }

    /// Files considered, whatever the outcome.
    #[must_use]
    pub fn files(&self) -> usize {
        self.written + self.unchanged + self.preserved
    }
}

/// Everything a renderer needs to know about one entity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntityView<'a> {
    /// Mapping of the entity itself.
    pub entity:     &'a EntityMapping,
    /// Package of the concrete class.
    pub package:    &'a str,
    /// Concrete class of the enclosing mapping.
    pub parent:     Option<&'a JavaType>,
    /// Own identifier, else the nearest ancestor's.
    pub identifier: Option<&'a ResolvedIdentifier>,
    /// Debug properties, inherited ones included.
    pub properties: &'a BTreeSet<String>,
    /// First-pass facts.
    pub model:      &'a ResolutionModel
}

impl EntityView<'_> {
    pub(crate) fn class_name(&self) -> &str {
        &self.entity.class_name
    }

    /// Qualified name of a class in the entity's package family.
    pub(crate) fn qualified(&self, kind: ArtifactKind) -> String {
        qualify(
            &kind.package(self.package),
            &kind.class_name(self.class_name())
        )
    }

    fn artifact(&self, kind: ArtifactKind, header: Option<&str>, body: String) -> Artifact {
        let mut contents = String::new();
        if let Some(header) = header {
            contents.push_str(header);
            if !header.ends_with('\n') {
                contents.push('\n');
            }
        }
        contents.push_str(&body);

        Artifact {
            kind,
            package: kind.package(self.package),
            class_name: kind.class_name(self.class_name()),
            contents
        }
    }
}

/// `package <name>;` line followed by a blank line, empty for the default
/// package.
pub(crate) fn package_line(package: &str) -> String {
    if package.is_empty() {
        String::new()
    } else {
        format!("package {};\n\n", package)
    }
}

/// Second-pass walker.
#[derive(Debug)]
pub struct Generator<'a> {
    model:         &'a ResolutionModel,
    emitter:       &'a Emitter,
    header:        Option<&'a str>,
    properties_of: HashMap<String, BTreeSet<String>>,
    report:        GenerationReport
}

impl<'a> Generator<'a> {
    /// Create a generator over a resolved model.
    pub fn new(model: &'a ResolutionModel, emitter: &'a Emitter, config: &'a GeneratorConfig) -> Self {
        Self {
            model,
            emitter,
            header: config.header.as_deref(),
            properties_of: HashMap::new(),
            report: GenerationReport::default()
        }
    }

    /// Generate every entity of a resource.
    ///
    /// # Errors
    ///
    /// The first emitter failure; files of earlier entities stay written.
    pub fn generate_resource(&mut self, resource: &MappingResource) -> Result<()> {
        for entity in &resource.entities {
            self.generate_entity(entity, None, None)?;
        }
        Ok(())
    }

    /// Accumulated debug properties of an entity generated so far.
    #[must_use]
    pub fn properties_of(&self, entity: &str) -> Option<&BTreeSet<String>> {
        self.properties_of.get(entity)
    }

    /// Tally so far.
    #[must_use]
    pub fn report(&self) -> GenerationReport {
        self.report
    }

    fn generate_entity(
        &mut self,
        entity: &EntityMapping,
        parent: Option<&JavaType>,
        inherited: Option<&ResolvedIdentifier>
    ) -> Result<()> {
        info!("  {} ...", entity.class_name);

        let own = entity.simple_identifier().map(|id| ResolvedIdentifier {
            ty:   id.ty.clone(),
            name: id.name.clone()
        });
        let identifier = own.as_ref().or(inherited);

        let mut properties = debug_properties(entity);
        if let Some(ancestors) = parent.and_then(|p| self.properties_of.get(p.simple_name())) {
            properties.extend(ancestors.iter().cloned());
        }

        // A qualified class name wins over the resource's package attribute.
        let view = EntityView {
            entity,
            package: entity.java_type.package().unwrap_or(""),
            parent,
            identifier,
            properties: &properties,
            model: self.model
        };

        let artifacts = [
            view.artifact(ArtifactKind::BaseClass, self.header, base_class::render(&view)),
            view.artifact(ArtifactKind::ConcreteClass, self.header, concrete::render(&view)),
            view.artifact(ArtifactKind::DaoBase, self.header, dao_base::render(&view)),
            view.artifact(ArtifactKind::Dao, self.header, dao::render(&view))
        ];
        for artifact in &artifacts {
            let outcome = self.emitter.emit(artifact)?;
            self.report.record(outcome);
        }
        self.report.entities += 1;

        self.properties_of
            .insert(entity.class_name.clone(), properties);

        for sub in &entity.subclasses {
            debug!(parent = %entity.class_name, child = %sub.entity.class_name, kind = ?sub.kind, "subclass");
            self.generate_entity(&sub.entity, Some(&entity.java_type), identifier)?;
        }
        Ok(())
    }
}

/// Properties listed by `toDebugString()` that the entity itself declares.
///
/// The identifier, composite key components, and every column-backed
/// property and association. Formula-backed members and collections are
/// left out.
fn debug_properties(entity: &EntityMapping) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    if let Some(id) = entity.simple_identifier() {
        names.insert(id.name.clone());
    }
    if let Some(composite) = entity.composite_identifier() {
        names.extend(composite.components().iter().map(|c| c.name.clone()));
    }
    names.extend(
        entity
            .properties
            .iter()
            .filter(|p| p.backing.is_column())
            .map(|p| p.name.clone())
    );
    names.extend(
        entity
            .many_to_ones
            .iter()
            .filter(|m| m.backing.is_column())
            .map(|m| m.name.clone())
    );

    names
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::reader::LoadedDocument;

    pub(super) fn resource(xml: &str) -> MappingResource {
        MappingResource::load(&LoadedDocument::from_text("test.hbm.xml", xml)).unwrap()
    }

    const LOCATIONS: &str = r#"<hibernate-mapping package="org.x">
        <class name="Location" abstract="true">
            <id name="uniqueId" column="uniqueid" type="java.lang.Long"/>
            <property name="name" column="name" type="java.lang.String"/>
            <property name="busy" formula="(select 1)" type="boolean"/>
            <union-subclass name="Room">
                <property name="capacity" column="capacity" type="java.lang.Integer"/>
                <subclass name="Lab">
                    <property name="benches" column="benches" type="integer"/>
                </subclass>
            </union-subclass>
        </class>
    </hibernate-mapping>"#;

    fn run(xml: &str) -> (TempDir, GenerationReport, HashMap<String, BTreeSet<String>>) {
        let dir = TempDir::new().unwrap();
        let resources = vec![resource(xml)];
        let model = ResolutionModel::resolve(&resources).unwrap();
        let emitter = Emitter::new(dir.path());
        let config = GeneratorConfig::new();
        let mut generator = Generator::new(&model, &emitter, &config);
        for r in &resources {
            generator.generate_resource(r).unwrap();
        }
        let report = generator.report();
        let properties = generator.properties_of.clone();
        (dir, report, properties)
    }

    #[test]
    fn debug_properties_accumulate_down_the_chain() {
        let (_dir, report, properties) = run(LOCATIONS);

        assert_eq!(report.entities, 3);
        assert_eq!(report.written, 12);
        assert_eq!(report.files(), 12);

        let lab: Vec<_> = properties["Lab"].iter().map(String::as_str).collect();
        assert_eq!(lab, ["Benches", "Capacity", "Name", "UniqueId"]);

        let location: Vec<_> = properties["Location"].iter().map(String::as_str).collect();
        assert_eq!(location, ["Name", "UniqueId"]);
    }

    #[test]
    fn subclass_inherits_identifier_and_parent() {
        let (dir, ..) = run(LOCATIONS);
        let base = std::fs::read_to_string(dir.path().join("org/x/base/BaseLab.java")).unwrap();

        assert!(base.contains("public abstract class BaseLab extends Room implements Serializable {"));
        assert!(base.contains("import org.x.Room;"));
        assert!(base.contains("\tpublic BaseLab(Long uniqueId) {\n\t\tsetUniqueId(uniqueId);\n"));
        assert!(base.contains("return \"Lab[\"+getUniqueId()+\" \"+getName()+\"]\";"));
    }

    #[test]
    fn qualified_class_name_selects_output_package() {
        let (dir, report, _) = run(r#"<hibernate-mapping package="org.x">
            <class name="org.y.Widget">
                <id name="uniqueId" column="uid" type="java.lang.Long"/>
            </class>
        </hibernate-mapping>"#);

        assert_eq!(report.written, 4);
        let base = std::fs::read_to_string(dir.path().join("org/y/base/BaseWidget.java")).unwrap();
        assert!(base.contains("package org.y.base;"));
        assert!(dir.path().join("org/y/Widget.java").is_file());
        assert!(dir.path().join("org/y/dao/WidgetDAO.java").is_file());
        assert!(!dir.path().join("org/x").exists());
    }

    #[test]
    fn header_prefixes_every_file() {
        let dir = TempDir::new().unwrap();
        let resources = vec![resource(LOCATIONS)];
        let model = ResolutionModel::resolve(&resources).unwrap();
        let emitter = Emitter::new(dir.path());
        let config = GeneratorConfig::new().with_header("/* banner */");
        let mut generator = Generator::new(&model, &emitter, &config);
        generator.generate_resource(&resources[0]).unwrap();

        for path in ["org/x/base/BaseRoom.java", "org/x/Room.java", "org/x/dao/RoomDAO.java"] {
            let text = std::fs::read_to_string(dir.path().join(path)).unwrap();
            assert!(text.starts_with("/* banner */\npackage "), "{path}");
        }
    }

    #[test]
    fn default_package_has_no_package_line() {
        assert_eq!(package_line(""), "");
        assert_eq!(package_line("org.x"), "package org.x;\n\n");
    }
}
