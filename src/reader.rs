// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema document loading.
//!
//! Resources are plain relative paths (`org/x/Room.hbm.xml`) resolved
//! against one root directory. Documents are parsed without validation;
//! a DOCTYPE public identifier is still handed to an [`EntityResolver`].
//! The Hibernate 3.0 DTDs ship with the crate, so stock documents resolve
//! offline. A local copy under `org/hibernate/` takes precedence and must
//! be readable.
//!
//! # Flow
//!
//! ```text
//! resource path ──► ResourceLocator ──► file text ──► DOCTYPE scan
//!                                                        │
//!                                         EntityResolver ┘
//!                                                        │
//!                                   LoadedDocument ◄─────┘ ──► roxmltree
//! ```

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf}
};

use roxmltree::{Document, ParsingOptions};
use tracing::debug;

use crate::error::{Error, Result};

/// Public identifier of the Hibernate mapping DTD.
pub const MAPPING_DTD_PUBLIC_ID: &str = "-//Hibernate/Hibernate Mapping DTD 3.0//EN";

/// Public identifier of the Hibernate configuration DTD.
pub const CONFIGURATION_DTD_PUBLIC_ID: &str = "-//Hibernate/Hibernate Configuration DTD 3.0//EN";

/// Hibernate mapping DTD 3.0, as shipped in the Hibernate jar.
const MAPPING_DTD: &str = include_str!("../dtd/hibernate-mapping-3.0.dtd");

/// Hibernate configuration DTD 3.0, as shipped in the Hibernate jar.
const CONFIGURATION_DTD: &str = include_str!("../dtd/hibernate-configuration-3.0.dtd");

/// Where a resolved DTD lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DtdSource {
    /// Local file holding the DTD.
    File(PathBuf),
    /// DTD text supplied directly by the resolver.
    Inline(Cow<'static, str>)
}

impl DtdSource {
    /// Short description for log lines.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Inline(_) => "bundled".to_string()
        }
    }
}

/// Translates DOCTYPE identifiers to local DTD sources.
///
/// Returning `None` means "no special handling": the declaration is left
/// alone and parsing continues.
pub trait EntityResolver {
    /// Resolve a DOCTYPE declaration.
    fn resolve(&self, public_id: &str, system_id: Option<&str>) -> Option<DtdSource>;
}

/// Resolver for the two Hibernate 3.0 DTDs.
///
/// Resolves to the bundled DTD text. With an override directory, a file at
/// `org/hibernate/<name>.dtd` below it (the layout inside the Hibernate
/// jar) is used instead when present.
#[derive(Debug, Clone, Default)]
pub struct HibernateDtdResolver {
    override_dir: Option<PathBuf>
}

impl HibernateDtdResolver {
    /// Create a resolver serving the bundled DTDs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer DTD files found below `dir`.
    #[must_use]
    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }
}

impl EntityResolver for HibernateDtdResolver {
    fn resolve(&self, public_id: &str, _system_id: Option<&str>) -> Option<DtdSource> {
        let (file, bundled) = match public_id {
            MAPPING_DTD_PUBLIC_ID => ("org/hibernate/hibernate-mapping-3.0.dtd", MAPPING_DTD),
            CONFIGURATION_DTD_PUBLIC_ID => {
                ("org/hibernate/hibernate-configuration-3.0.dtd", CONFIGURATION_DTD)
            }
            _ => return None
        };

        if let Some(dir) = &self.override_dir {
            let location = dir.join(file);
            if location.exists() {
                return Some(DtdSource::File(location));
            }
        }
        Some(DtdSource::Inline(Cow::Borrowed(bundled)))
    }
}

/// Resolver that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl EntityResolver for NoopResolver {
    fn resolve(&self, _public_id: &str, _system_id: Option<&str>) -> Option<DtdSource> {
        None
    }
}

/// Resolves resource paths against a root directory.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    root: PathBuf
}

impl ResourceLocator {
    /// Create a locator rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into()
        }
    }

    /// File path of a resource.
    #[must_use]
    pub fn locate(&self, resource: &str) -> PathBuf {
        self.root.join(resource)
    }
}

/// Raw document text plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    resource: String,
    path:     PathBuf,
    text:     String,
    dtd:      Option<DtdSource>
}

impl LoadedDocument {
    /// Build a document from text already in memory.
    #[must_use]
    pub fn from_text(resource: impl Into<String>, text: impl Into<String>) -> Self {
        let resource = resource.into();
        Self {
            path: PathBuf::from(&resource),
            resource,
            text: text.into(),
            dtd: None
        }
    }

    /// Resource name the document was requested as.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// File the document was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// DTD the DOCTYPE declaration resolved to, if any.
    #[must_use]
    pub fn dtd(&self) -> Option<&DtdSource> {
        self.dtd.as_ref()
    }

    /// Parse the text into an XML tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] if the text is not well-formed.
    pub fn parse(&self) -> Result<Document<'_>> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        Document::parse_with_options(&self.text, options).map_err(|source| Error::Xml {
            path: self.path.clone(),
            source
        })
    }
}

/// Loads mapping and configuration documents.
pub struct SchemaReader {
    locator:  ResourceLocator,
    resolver: Box<dyn EntityResolver>
}

impl SchemaReader {
    /// Create a reader with an injected DTD resolver.
    #[must_use]
    pub fn new(locator: ResourceLocator, resolver: Box<dyn EntityResolver>) -> Self {
        Self {
            locator,
            resolver
        }
    }

    /// Reader serving the Hibernate DTDs, preferring copies below the
    /// resource root.
    #[must_use]
    pub fn with_hibernate_dtds(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::new(
            ResourceLocator::new(root.clone()),
            Box::new(HibernateDtdResolver::new().with_override_dir(root))
        )
    }

    /// Load a resource and resolve its DOCTYPE.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the resource cannot be read
    /// - [`Error::EntityResolution`] if the DOCTYPE resolves to a DTD file
    ///   that cannot be read (a directory, a permission failure)
    pub fn read_resource(&self, resource: &str) -> Result<LoadedDocument> {
        let path = self.locator.locate(resource);
        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;

        let dtd = match doctype_ids(&text) {
            Some((public_id, system_id)) => {
                let resolved = self.resolver.resolve(&public_id, system_id.as_deref());
                if let Some(dtd) = &resolved {
                    let bytes = match dtd {
                        DtdSource::File(location) => fs::read_to_string(location)
                            .map_err(|source| Error::EntityResolution {
                                public_id: public_id.clone(),
                                location: location.clone(),
                                source
                            })?
                            .len(),
                        DtdSource::Inline(inline) => inline.len()
                    };
                    debug!(resource, %public_id, dtd = %dtd.describe(), bytes, "DOCTYPE resolved");
                } else {
                    debug!(resource, %public_id, "DOCTYPE left unresolved");
                }
                resolved
            }
            None => None
        };

        Ok(LoadedDocument {
            resource: resource.to_string(),
            path,
            text,
            dtd
        })
    }
}

/// Extract the public and system identifiers of a `PUBLIC` DOCTYPE.
fn doctype_ids(text: &str) -> Option<(String, Option<String>)> {
    let start = text.find("<!DOCTYPE")?;
    let decl = &text[start..];
    let decl = &decl[..decl.find('>')?];
    let rest = &decl[decl.find("PUBLIC")? + "PUBLIC".len()..];

    let (public_id, rest) = quoted(rest)?;
    let system_id = quoted(rest).map(|(id, _)| id);
    Some((public_id, system_id))
}

/// Take the next single- or double-quoted literal.
fn quoted(s: &str) -> Option<(String, &str)> {
    let s = s.trim_start();
    let quote = s.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &s[1..];
    let end = body.find(quote)?;
    Some((body[..end].to_string(), &body[end + 1..]))
}
