// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cross-resource resolution (first pass).
//!
//! Generation needs facts about entities that may be declared later in the
//! same document or in another resource entirely: a finder on `Room.building`
//! binds a parameter of `Building`'s identifier type, and a subclass
//! constructor takes its ancestor's identifier. This pass walks every entity
//! of every resource before any file is generated and records those facts.
//!
//! # Recorded Facts
//!
//! | Map | Key | Value |
//! |-----|-----|-------|
//! | parent-of | simple class name | simple class name of the enclosing class |
//! | identifier-of | simple class name | type and accessor name of its own `<id>` |
//!
//! # Guards
//!
//! A class name may be declared once per run. A class nested inside itself
//! (directly or through intermediate subclasses) is rejected before the
//! duplicate check so the error names the chain.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    error::{Error, Result},
    mapping::{EntityMapping, MappingResource},
    types::JavaType
};

/// Identifier type used by finders whose target has no known identifier.
pub const FALLBACK_ID_TYPE: &str = "Long";

/// Identifier accessor name used by finders whose target has no known
/// identifier.
pub const FALLBACK_ID_NAME: &str = "UniqueId";

/// Identifier facts of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentifier {
    /// Normalized identifier type.
    pub ty:   JavaType,
    /// Accessor-form identifier name.
    pub name: String
}

impl ResolvedIdentifier {
    /// Identifier assumed for finder targets nobody declared an id for.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            ty:   JavaType::from_canonical(FALLBACK_ID_TYPE),
            name: FALLBACK_ID_NAME.to_string()
        }
    }
}

/// Result of the first pass over all resources.
///
/// Read-only once built; the generator only queries it.
#[derive(Debug, Clone, Default)]
pub struct ResolutionModel {
    parent_of:     HashMap<String, String>,
    identifier_of: HashMap<String, ResolvedIdentifier>,
    entities:      HashSet<String>
}

impl ResolutionModel {
    /// Walk every entity and subclass of every resource.
    ///
    /// # Errors
    ///
    /// - [`Error::InheritanceCycle`] if a class is nested inside itself
    /// - [`Error::DuplicateEntity`] if a class name is declared twice
    pub fn resolve(resources: &[MappingResource]) -> Result<Self> {
        let mut model = Self::default();
        let mut chain = Vec::new();
        for resource in resources {
            for entity in &resource.entities {
                model.visit(entity, None, &mut chain)?;
            }
        }
        debug!(
            entities = model.entities.len(),
            identifiers = model.identifier_of.len(),
            "resolution complete"
        );
        Ok(model)
    }

    fn visit(
        &mut self,
        entity: &EntityMapping,
        parent: Option<&str>,
        chain: &mut Vec<String>
    ) -> Result<()> {
        let name = entity.class_name.as_str();

        if chain.iter().any(|ancestor| ancestor == name) {
            let mut cycle = chain.clone();
            cycle.push(name.to_string());
            return Err(Error::InheritanceCycle {
                entity: name.to_string(),
                chain:  cycle
            });
        }
        if !self.entities.insert(name.to_string()) {
            return Err(Error::DuplicateEntity {
                entity: name.to_string()
            });
        }

        if let Some(parent) = parent {
            self.parent_of.insert(name.to_string(), parent.to_string());
        }
        if let Some(id) = entity.simple_identifier() {
            self.identifier_of.insert(
                name.to_string(),
                ResolvedIdentifier {
                    ty:   id.ty.clone(),
                    name: id.name.clone()
                }
            );
        }

        chain.push(name.to_string());
        for child in entity.children() {
            self.visit(child, Some(name), chain)?;
        }
        chain.pop();
        Ok(())
    }

    /// Enclosing class of a subclass.
    #[must_use]
    pub fn parent_of(&self, entity: &str) -> Option<&str> {
        self.parent_of.get(entity).map(String::as_str)
    }

    /// Identifier declared directly on an entity.
    #[must_use]
    pub fn identifier_of(&self, entity: &str) -> Option<&ResolvedIdentifier> {
        self.identifier_of.get(entity)
    }

    /// Identifier used to bind a finder parameter referencing `target`.
    ///
    /// The target's own identifier, else the nearest ancestor's, else
    /// [`ResolvedIdentifier::fallback`].
    #[must_use]
    pub fn finder_identifier(&self, target: &str) -> ResolvedIdentifier {
        let mut current = Some(target);
        while let Some(name) = current {
            if let Some(id) = self.identifier_of.get(name) {
                return id.clone();
            }
            current = self.parent_of(name);
        }
        ResolvedIdentifier::fallback()
    }

    /// Number of entities, subclasses included.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
