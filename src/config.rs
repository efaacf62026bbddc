// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Two settings are exposed to callers of the command-line tool: the
//! source root override and the configuration file name. The remaining
//! fields describe the conventional project layout used when no source
//! root is given.
//!
//! # Layout Without a Source Root
//!
//! ```text
//! project/
//! ├── JavaSource/            ← output directory (sibling of the marker)
//! └── WebContent/            ← marker directory
//!     └── WEB-INF/classes/   ← resource root
//!         ├── hibernate.cfg.xml
//!         └── org/x/Room.hbm.xml
//! ```
//!
//! With a source root, resources are read from it and sources are written
//! into it.

use std::path::{self, Path, PathBuf};

/// Default configuration document name.
pub const DEFAULT_CONFIG_NAME: &str = "hibernate.cfg.xml";

/// Directory name searched for when deriving the output directory.
pub const DEFAULT_MARKER_DIR: &str = "WebContent";

/// Output directory created next to the marker directory.
pub const DEFAULT_OUTPUT_DIR: &str = "JavaSource";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Source root override. Resources are read from and sources written
    /// to this directory when set.
    pub source:          Option<PathBuf>,
    /// Configuration document name, relative to the resource root.
    pub config_name:     String,
    /// Default resource location used without a source root.
    pub resource_root:   PathBuf,
    /// Ancestor directory name marking the project layout.
    pub marker_dir:      String,
    /// Output directory name created beside the marker.
    pub output_dir_name: String,
    /// Text placed verbatim at the top of every generated file.
    pub header:          Option<String>
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source:          None,
            config_name:     DEFAULT_CONFIG_NAME.to_string(),
            resource_root:   PathBuf::from("."),
            marker_dir:      DEFAULT_MARKER_DIR.to_string(),
            output_dir_name: DEFAULT_OUTPUT_DIR.to_string(),
            header:          None
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read resources from and write sources to `source`.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Use a different configuration document name.
    #[must_use]
    pub fn with_config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = name.into();
        self
    }

    /// Use a different default resource location.
    #[must_use]
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }

    /// Prefix every generated file with `header`.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Directory resources are resolved against.
    #[must_use]
    pub fn resource_dir(&self) -> &Path {
        self.source.as_deref().unwrap_or(&self.resource_root)
    }

    /// Location of the configuration document.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.resource_dir().join(&self.config_name)
    }

    /// Root directory for generated sources.
    ///
    /// With a source root this is the source root itself. Otherwise the
    /// configuration document's ancestors are searched for the marker
    /// directory and its sibling output directory is used; when no marker
    /// exists the output directory name is used relative to the current
    /// directory. A relative resource root is taken against the current
    /// directory before the search.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        if let Some(source) = &self.source {
            return source.clone();
        }

        let config = self.config_path();
        let config = path::absolute(&config).unwrap_or(config);
        let marker = config
            .ancestors()
            .find(|dir| dir.file_name().is_some_and(|name| name == self.marker_dir.as_str()));

        match marker.and_then(Path::parent) {
            Some(project) => project.join(&self.output_dir_name),
            None => PathBuf::from(&self.output_dir_name)
        }
    }
}
