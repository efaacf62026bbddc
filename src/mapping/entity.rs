// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity mappings (`<class>`, `<subclass>`, `<union-subclass>`).

use roxmltree::Node;

use super::{
    CollectionDef, CompositeIdentifier, Identifier, ManyToOneDef, ParseContext, PropertyDef,
    SimpleIdentifier, children
};
use crate::{error::Result, types::JavaType};

/// Relation between an entity and a nested child mapping.
///
/// Both kinds produce the same parent/child edge; generation only reports
/// the kind in its debug log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubclassKind {
    /// `<subclass>`.
    Subclass,
    /// `<union-subclass>`.
    UnionSubclass
}

impl SubclassKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "subclass" => Some(Self::Subclass),
            "union-subclass" => Some(Self::UnionSubclass),
            _ => None
        }
    }
}

/// Nested child mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subclass {
    /// Element the child was declared with.
    pub kind:   SubclassKind,
    /// Child mapping.
    pub entity: EntityMapping
}

/// One mapped class and its nested subclasses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMapping {
    /// Raw `name` attribute.
    pub name:         String,
    /// Simple class name (e.g. `Room`).
    pub class_name:   String,
    /// Normalized, qualified class type (e.g. `org.x.Room`).
    pub java_type:    JavaType,
    /// `abstract="true"` on the element.
    pub is_abstract:  bool,
    /// Identifier declared on this element.
    pub identifier:   Option<Identifier>,
    /// Scalar properties in document order.
    pub properties:   Vec<PropertyDef>,
    /// Many-to-one associations in document order.
    pub many_to_ones: Vec<ManyToOneDef>,
    /// Set-valued members in document order.
    pub collections:  Vec<CollectionDef>,
    /// Nested mappings in document order.
    pub subclasses:   Vec<Subclass>
}

impl EntityMapping {
    /// Parse a class-shaped element and, recursively, its subclasses.
    pub(crate) fn from_node(node: Node<'_, '_>, ctx: &ParseContext<'_>) -> Result<Self> {
        let name = ctx.required(node, "name")?;
        let java_type = JavaType::normalize(name, ctx.package);
        let class_name = java_type.simple_name().to_string();

        let identifier = Identifier::from_class(node, ctx)?;

        let mut properties = Vec::new();
        for el in children(node, "property") {
            properties.extend(PropertyDef::from_node(el, ctx)?);
        }

        let mut many_to_ones = Vec::new();
        for el in children(node, "many-to-one") {
            many_to_ones.extend(ManyToOneDef::from_node(el, ctx)?);
        }

        let mut collections = Vec::new();
        for el in children(node, "set") {
            collections.extend(CollectionDef::from_node(el, ctx)?);
        }

        let mut subclasses = Vec::new();
        for el in node.children().filter(|n| n.is_element()) {
            if let Some(kind) = SubclassKind::from_tag(el.tag_name().name()) {
                subclasses.push(Subclass {
                    kind,
                    entity: Self::from_node(el, ctx)?
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            class_name,
            java_type,
            is_abstract: node.attribute("abstract") == Some("true"),
            identifier,
            properties,
            many_to_ones,
            collections,
            subclasses
        })
    }

    /// Simple identifier declared on this element.
    #[must_use]
    pub fn simple_identifier(&self) -> Option<&SimpleIdentifier> {
        match &self.identifier {
            Some(Identifier::Simple(id)) => Some(id),
            _ => None
        }
    }

    /// Composite identifier declared on this element.
    #[must_use]
    pub fn composite_identifier(&self) -> Option<&CompositeIdentifier> {
        match &self.identifier {
            Some(Identifier::Composite(id)) => Some(id),
            _ => None
        }
    }

    /// Direct children.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.subclasses.iter().map(|sub| &sub.entity)
    }
}
