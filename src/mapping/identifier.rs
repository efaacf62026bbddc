// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity identifiers.
//!
//! An entity has at most one identifier form:
//!
//! | Element | Form | Generated equality |
//! |---------|------|--------------------|
//! | `<id>` | [`SimpleIdentifier`] | compares the identifier value |
//! | `<composite-id>` | [`CompositeIdentifier`] | compares every component |
//! | neither | none | inherited object identity |

use roxmltree::Node;
use tracing::warn;

use super::{ParseContext, children};
use crate::{error::Result, types::JavaType};

/// Single scalar primary key (`<id>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleIdentifier {
    /// Accessor-form name (e.g. `UniqueId`).
    pub name:   String,
    /// Normalized identifier type.
    pub ty:     JavaType,
    /// Mapped column.
    pub column: String
}

/// Which element a composite key component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `<key-property>`: scalar component.
    Property,
    /// `<key-many-to-one>`: reference to another entity.
    ManyToOne
}

/// One component of a composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyComponent {
    /// Accessor-form name.
    pub name: String,
    /// Normalized component type.
    pub ty:   JavaType,
    /// Source element kind.
    pub kind: KeyKind
}

/// Multi-component primary key (`<composite-id>`).
///
/// Always holds at least one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeIdentifier {
    components: Vec<KeyComponent>
}

impl CompositeIdentifier {
    /// Build from components, `None` when there are none.
    #[must_use]
    pub fn new(components: Vec<KeyComponent>) -> Option<Self> {
        if components.is_empty() {
            None
        } else {
            Some(Self {
                components
            })
        }
    }

    /// Components in declaration order.
    #[must_use]
    pub fn components(&self) -> &[KeyComponent] {
        &self.components
    }
}

/// Identifier form of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// `<id>` element.
    Simple(SimpleIdentifier),
    /// `<composite-id>` element.
    Composite(CompositeIdentifier)
}

impl Identifier {
    /// Parse the identifier of a class element.
    ///
    /// `<id>` wins when both forms are present; the composite form is then
    /// ignored with a warning.
    pub(crate) fn from_class(node: Node<'_, '_>, ctx: &ParseContext<'_>) -> Result<Option<Self>> {
        let simple = children(node, "id").next();
        let composite = children(node, "composite-id").next();

        if let Some(id) = simple {
            if composite.is_some() {
                warn!(
                    document = ctx.document,
                    "<id> and <composite-id> on the same class, composite key ignored"
                );
            }
            return Ok(Some(Self::Simple(parse_simple(id, ctx)?)));
        }

        let Some(cid) = composite else {
            return Ok(None);
        };

        let mut components = Vec::new();
        for key in cid.children().filter(|n| n.is_element()) {
            let (kind, type_attr) = match key.tag_name().name() {
                "key-property" => (KeyKind::Property, "type"),
                "key-many-to-one" => (KeyKind::ManyToOne, "class"),
                _ => continue
            };
            components.push(KeyComponent {
                name: accessor_name(ctx.required(key, "name")?),
                ty: ctx.required_type(key, type_attr)?,
                kind
            });
        }

        match CompositeIdentifier::new(components) {
            Some(composite) => Ok(Some(Self::Composite(composite))),
            None => {
                warn!(
                    document = ctx.document,
                    "<composite-id> without key components, entity has no identifier"
                );
                Ok(None)
            }
        }
    }
}

fn parse_simple(id: Node<'_, '_>, ctx: &ParseContext<'_>) -> Result<SimpleIdentifier> {
    Ok(SimpleIdentifier {
        name:   accessor_name(ctx.required(id, "name")?),
        ty:     ctx.required_type(id, "type")?,
        column: ctx.required(id, "column")?.to_string()
    })
}

/// Capitalize a mapping member name into accessor form.
pub(crate) fn accessor_name(name: &str) -> String {
    crate::types::capitalize(name)
}
