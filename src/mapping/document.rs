// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Top-level documents: the configuration and the mapping resources.
//!
//! # Configuration Document
//!
//! ```xml
//! <hibernate-configuration>
//!     <session-factory>
//!         <mapping resource="org/x/Room.hbm.xml"/>
//!         <mapping resource="org/x/Building.hbm.xml"/>
//!     </session-factory>
//! </hibernate-configuration>
//! ```
//!
//! # Mapping Resource
//!
//! ```xml
//! <hibernate-mapping package="org.x">
//!     <class name="Room" table="room">...</class>
//! </hibernate-mapping>
//! ```

use roxmltree::Document;

use super::{EntityMapping, ParseContext, child, children};
use crate::{
    error::{Error, Result},
    reader::LoadedDocument
};

/// Mapping resources named by the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingConfig {
    /// Resource paths in document order.
    pub resources: Vec<String>
}

impl MappingConfig {
    /// Read `session-factory/mapping[@resource]` entries.
    ///
    /// Mapping entries without a `resource` attribute (class or jar
    /// mappings) are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::MissingElement`] if the root has no `session-factory`.
    pub fn from_document(doc: &Document<'_>, document: &str) -> Result<Self> {
        let root = doc.root_element();
        let factory = child(root, "session-factory").ok_or_else(|| Error::MissingElement {
            document: document.to_string(),
            parent:   root.tag_name().name().to_string(),
            element:  "session-factory".to_string()
        })?;

        let resources = children(factory, "mapping")
            .filter_map(|m| m.attribute("resource"))
            .map(str::to_string)
            .collect();

        Ok(Self {
            resources
        })
    }

    /// Parse a loaded configuration document.
    ///
    /// # Errors
    ///
    /// Parse errors and the errors of [`MappingConfig::from_document`].
    pub fn load(doc: &LoadedDocument) -> Result<Self> {
        Self::from_document(&doc.parse()?, doc.resource())
    }
}

/// One mapping resource and its top-level entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingResource {
    /// Resource path as named in the configuration.
    pub path:     String,
    /// Default package (`package` attribute of the root).
    pub package:  Option<String>,
    /// Top-level classes in document order.
    pub entities: Vec<EntityMapping>
}

impl MappingResource {
    /// Build the typed model of a mapping document.
    ///
    /// # Errors
    ///
    /// Missing mandatory attributes on any class or member.
    pub fn from_document(doc: &Document<'_>, path: &str) -> Result<Self> {
        let root = doc.root_element();
        let package = root.attribute("package");
        let ctx = ParseContext::new(path, package);

        let entities = children(root, "class")
            .map(|class| EntityMapping::from_node(class, &ctx))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_string(),
            package: package.map(str::to_string),
            entities
        })
    }

    /// Parse a loaded mapping document.
    ///
    /// # Errors
    ///
    /// Parse errors and the errors of [`MappingResource::from_document`].
    pub fn load(doc: &LoadedDocument) -> Result<Self> {
        Self::from_document(&doc.parse()?, doc.resource())
    }
}
