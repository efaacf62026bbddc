// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for model generation.
//!
//! Every variant is fatal: the run stops at the first error and files
//! already written for earlier entities stay on disk. Recoverable schema
//! problems (unknown member shapes) never reach this type, they are logged
//! as warnings by the mapping parser and the member is skipped.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error raised while reading mappings or writing generated sources.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a document or writing a generated file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// A document is not well-formed XML.
    #[error("failed to parse {}: {source}", path.display())]
    Xml {
        /// Document being parsed.
        path:   PathBuf,
        /// Parser error with position.
        #[source]
        source: roxmltree::Error
    },

    /// A DTD public identifier resolved to a local file that cannot be read.
    #[error("cannot resolve DTD `{public_id}` to {}: {source}", location.display())]
    EntityResolution {
        /// Public identifier from the DOCTYPE declaration.
        public_id: String,
        /// Local file the identifier was mapped to.
        location:  PathBuf,
        /// Underlying I/O error.
        #[source]
        source:    io::Error
    },

    /// A required child element is missing.
    #[error("{document}: <{parent}> has no <{element}> element")]
    MissingElement {
        /// Document containing the parent element.
        document: String,
        /// Parent element name.
        parent:   String,
        /// Expected child element name.
        element:  String
    },

    /// A required attribute is missing.
    #[error("{document}: <{element}> is missing the `{attribute}` attribute")]
    MissingAttribute {
        /// Document containing the element.
        document:  String,
        /// Element name.
        element:   String,
        /// Attribute name.
        attribute: String
    },

    /// Two mappings in the same run declare the same class name.
    #[error("entity `{entity}` is mapped more than once")]
    DuplicateEntity {
        /// Simple class name.
        entity: String
    },

    /// A class is declared as its own (indirect) subclass.
    #[error("entity `{entity}` appears in its own inheritance chain: {}", chain.join(" -> "))]
    InheritanceCycle {
        /// Simple class name that closes the cycle.
        entity: String,
        /// Ancestor chain from the top-level class down to the repeat.
        chain:  Vec<String>
    }
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }

    /// Build a missing-attribute error.
    pub(crate) fn missing_attribute(document: &str, element: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            document:  document.to_string(),
            element:   element.to_string(),
            attribute: attribute.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_message() {
        let err = Error::missing_attribute("Room.hbm.xml", "id", "column");
        assert_eq!(
            err.to_string(),
            "Room.hbm.xml: <id> is missing the `column` attribute"
        );
    }

    #[test]
    fn cycle_message_lists_chain() {
        let err = Error::InheritanceCycle {
            entity: "A".to_string(),
            chain:  vec!["A".to_string(), "B".to_string(), "A".to_string()]
        };
        assert!(err.to_string().contains("A -> B -> A"));
    }

    #[test]
    fn io_error_keeps_path() {
        let err = Error::io("out/Base.java", io::Error::other("disk full"));
        let msg = err.to_string();
        assert!(msg.contains("out/Base.java"));
        assert!(msg.contains("disk full"));
    }
}
