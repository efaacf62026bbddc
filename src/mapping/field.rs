// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar properties, associations, and collections.
//!
//! Each parser returns `Ok(None)` for a shape the generator cannot express
//! after logging a warning; the caller skips the member and carries on.

use roxmltree::Node;
use tracing::warn;

use super::{ParseContext, child, identifier::accessor_name};
use crate::{
    error::Result,
    types::{JavaType, normalize_type}
};

/// How a property value is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backing {
    /// Stored in a column.
    Column(String),
    /// Computed by a query expression.
    Formula(String)
}

impl Backing {
    /// Read `column` or, failing that, `formula` from an element.
    fn from_node(node: Node<'_, '_>) -> Option<Self> {
        if let Some(column) = node.attribute("column") {
            Some(Self::Column(column.to_string()))
        } else {
            node.attribute("formula")
                .map(|formula| Self::Formula(formula.to_string()))
        }
    }

    /// Column name for column-backed members.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Column(column) => Some(column),
            Self::Formula(_) => None
        }
    }

    /// Check whether the member is stored in a column.
    #[must_use]
    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

/// Scalar property (`<property>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// Accessor-form name.
    pub name:    String,
    /// Normalized type.
    pub ty:      JavaType,
    /// Column or formula.
    pub backing: Backing
}

impl PropertyDef {
    pub(crate) fn from_node(node: Node<'_, '_>, ctx: &ParseContext<'_>) -> Result<Option<Self>> {
        let name = accessor_name(ctx.required(node, "name")?);

        let Some(ty) = normalize_type(node.attribute("type"), ctx.package) else {
            warn!(document = ctx.document, property = %name, "property without type, skipped");
            return Ok(None);
        };
        let Some(backing) = Backing::from_node(node) else {
            warn!(
                document = ctx.document,
                property = %name,
                "property with neither column nor formula, skipped"
            );
            return Ok(None);
        };

        Ok(Some(Self {
            name,
            ty,
            backing
        }))
    }
}

/// Association to a single entity (`<many-to-one>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManyToOneDef {
    /// Accessor-form name.
    pub name:    String,
    /// Normalized target entity type.
    pub target:  JavaType,
    /// Column or formula.
    pub backing: Backing
}

impl ManyToOneDef {
    pub(crate) fn from_node(node: Node<'_, '_>, ctx: &ParseContext<'_>) -> Result<Option<Self>> {
        let name = accessor_name(ctx.required(node, "name")?);
        let target = ctx.required_type(node, "class")?;

        let Some(backing) = Backing::from_node(node) else {
            warn!(
                document = ctx.document,
                association = %name,
                "many-to-one with neither column nor formula, skipped"
            );
            return Ok(None);
        };

        Ok(Some(Self {
            name,
            target,
            backing
        }))
    }
}

/// Element shape inside a `<set>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// `<many-to-many class="..."/>`.
    ManyToMany,
    /// `<one-to-many class="..."/>`.
    OneToMany,
    /// `<element type="..."/>`.
    Element
}

impl CollectionKind {
    const ALL: [Self; 3] = [Self::ManyToMany, Self::OneToMany, Self::Element];

    /// Element name inside `<set>`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ManyToMany => "many-to-many",
            Self::OneToMany => "one-to-many",
            Self::Element => "element"
        }
    }

    /// Attribute carrying the element type.
    #[must_use]
    pub const fn type_attribute(self) -> &'static str {
        match self {
            Self::ManyToMany | Self::OneToMany => "class",
            Self::Element => "type"
        }
    }
}

/// Set-valued member (`<set>`).
///
/// All kinds generate the same shape: a `Set` of the element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDef {
    /// Accessor-form name.
    pub name:    String,
    /// Source element kind.
    pub kind:    CollectionKind,
    /// Normalized element type.
    pub element: JavaType
}

impl CollectionDef {
    pub(crate) fn from_node(node: Node<'_, '_>, ctx: &ParseContext<'_>) -> Result<Option<Self>> {
        let name = accessor_name(ctx.required(node, "name")?);

        for kind in CollectionKind::ALL {
            if let Some(element) = child(node, kind.tag()) {
                return Ok(Some(Self {
                    name,
                    kind,
                    element: ctx.required_type(element, kind.type_attribute())?
                }));
            }
        }

        warn!(
            document = ctx.document,
            collection = %name,
            "unknown type of set, skipped"
        );
        Ok(None)
    }
}
