// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed model of the mapping documents.
//!
//! XML trees from the [`reader`](crate::reader) are converted once into
//! owned structures; both generation passes work on these structures and
//! never touch XML again.
//!
//! # Architecture
//!
//! ```text
//! mapping.rs (coordinator, shared parsing helpers)
//! ├── document.rs   - MappingConfig (hibernate.cfg.xml), MappingResource (*.hbm.xml)
//! ├── entity.rs     - EntityMapping and its subclass tree
//! ├── identifier.rs - SimpleIdentifier, CompositeIdentifier, KeyComponent
//! └── field.rs      - PropertyDef, ManyToOneDef, CollectionDef, Backing
//! ```
//!
//! # Data Structures
//!
//! ```text
//! MappingResource
//! ├── path: String
//! ├── package: Option<String>
//! └── entities: Vec<EntityMapping>
//!     └── EntityMapping
//!         ├── name / class_name / java_type
//!         ├── is_abstract: bool
//!         ├── identifier: Option<Identifier>
//!         │   ├── Simple(SimpleIdentifier)       (type, name, column)
//!         │   └── Composite(CompositeIdentifier) (KeyComponent, ...)
//!         ├── properties: Vec<PropertyDef>       (column or formula)
//!         ├── many_to_ones: Vec<ManyToOneDef>    (column or formula)
//!         ├── collections: Vec<CollectionDef>    (set of element type)
//!         └── subclasses: Vec<Subclass>          (subclass / union-subclass)
//! ```
//!
//! # Recoverable Shapes
//!
//! Members the generator cannot express (a property with neither a
//! column nor a formula, a set without a recognized element) are logged
//! as warnings and skipped. Missing mandatory attributes are fatal.

mod document;
mod entity;
mod field;
mod identifier;

pub use document::{MappingConfig, MappingResource};
pub use entity::{EntityMapping, Subclass, SubclassKind};
pub use field::{Backing, CollectionDef, CollectionKind, ManyToOneDef, PropertyDef};
pub use identifier::{CompositeIdentifier, Identifier, KeyComponent, KeyKind, SimpleIdentifier};
use roxmltree::Node;

use crate::{
    error::{Error, Result},
    types::JavaType
};

/// Per-document state shared by the element parsers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    /// Resource name used in diagnostics.
    pub document: &'a str,
    /// Default package of the resource.
    pub package:  Option<&'a str>
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(document: &'a str, package: Option<&'a str>) -> Self {
        Self {
            document,
            package
        }
    }

    /// Read a mandatory attribute.
    pub(crate) fn required<'n>(&self, node: Node<'n, '_>, attribute: &str) -> Result<&'n str> {
        node.attribute(attribute).ok_or_else(|| {
            Error::missing_attribute(self.document, node.tag_name().name(), attribute)
        })
    }

    /// Read a mandatory type attribute and normalize it.
    pub(crate) fn required_type(&self, node: Node<'_, '_>, attribute: &str) -> Result<JavaType> {
        let raw = self.required(node, attribute)?;
        Ok(JavaType::normalize(raw, self.package))
    }
}

/// Child elements with the given tag name, in document order.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.has_tag_name(tag))
}

/// First child element with the given tag name.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.has_tag_name(tag))
}
