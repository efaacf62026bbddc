// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Writing generated sources to the output tree.
//!
//! # Artifacts
//!
//! | Kind | Package | File | Policy |
//! |------|---------|------|--------|
//! | [`ArtifactKind::BaseClass`] | `<pkg>.base` | `Base<Class>.java` | always overwrite |
//! | [`ArtifactKind::ConcreteClass`] | `<pkg>` | `<Class>.java` | create if absent |
//! | [`ArtifactKind::DaoBase`] | `<pkg>.base` | `Base<Class>DAO.java` | always overwrite |
//! | [`ArtifactKind::Dao`] | `<pkg>.dao` | `<Class>DAO.java` | create if absent |
//!
//! Machine-owned files are regenerated on every run. Hand-owned stubs are
//! created once and never touched again, so user edits survive.
//!
//! An overwrite whose bytes match the file on disk is skipped, leaving the
//! modification time alone.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf}
};

use tracing::debug;

use crate::error::{Error, Result};

/// How an artifact treats an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace the file on every run.
    AlwaysOverwrite,
    /// Write only when no file exists.
    CreateIfAbsent
}

/// The four generated files of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Abstract base class with fields and accessors.
    BaseClass,
    /// Concrete class stub for hand-written logic.
    ConcreteClass,
    /// Abstract data-access base with finders.
    DaoBase,
    /// Data-access stub for hand-written queries.
    Dao
}

impl ArtifactKind {
    /// All kinds, in generation order.
    pub const ALL: [Self; 4] = [Self::BaseClass, Self::ConcreteClass, Self::DaoBase, Self::Dao];

    /// Write policy of this kind.
    #[must_use]
    pub const fn write_policy(self) -> WritePolicy {
        match self {
            Self::BaseClass | Self::DaoBase => WritePolicy::AlwaysOverwrite,
            Self::ConcreteClass | Self::Dao => WritePolicy::CreateIfAbsent
        }
    }

    /// Sub-package appended to the entity package.
    #[must_use]
    pub const fn package_suffix(self) -> Option<&'static str> {
        match self {
            Self::BaseClass | Self::DaoBase => Some("base"),
            Self::ConcreteClass => None,
            Self::Dao => Some("dao")
        }
    }

    /// Java class name for an entity.
    #[must_use]
    pub fn class_name(self, entity: &str) -> String {
        match self {
            Self::BaseClass => format!("Base{}", entity),
            Self::ConcreteClass => entity.to_string(),
            Self::DaoBase => format!("Base{}DAO", entity),
            Self::Dao => format!("{}DAO", entity)
        }
    }

    /// Package the artifact is declared in.
    #[must_use]
    pub fn package(self, entity_package: &str) -> String {
        match self.package_suffix() {
            Some(suffix) => qualify(entity_package, suffix),
            None => entity_package.to_string()
        }
    }
}

/// Join a package and a name, tolerating the default package.
#[must_use]
pub fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

/// One rendered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// What the file contains.
    pub kind:       ArtifactKind,
    /// Declared package of the file.
    pub package:    String,
    /// Declared class name (also the file stem).
    pub class_name: String,
    /// Full file text.
    pub contents:   String
}

impl Artifact {
    /// Path relative to the output directory.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.class_name));
        path
    }
}

/// What [`Emitter::emit`] did with an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// The file was created or replaced.
    Written,
    /// Overwrite skipped: the file already had these contents.
    Unchanged,
    /// Create-if-absent skipped: a file already exists.
    Preserved
}

/// Writes artifacts below an output directory.
#[derive(Debug, Clone)]
pub struct Emitter {
    output_dir: PathBuf
}

impl Emitter {
    /// Create an emitter rooted at `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into()
        }
    }

    /// Root of the output tree.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Absolute location of an artifact.
    #[must_use]
    pub fn path_of(&self, artifact: &Artifact) -> PathBuf {
        self.output_dir.join(artifact.relative_path())
    }

    /// Write an artifact according to its kind's policy.
    ///
    /// Package directories are created as needed.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if a directory cannot be created or the file cannot be
    /// read or written.
    pub fn emit(&self, artifact: &Artifact) -> Result<EmitOutcome> {
        let path = self.path_of(artifact);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }

        let outcome = match artifact.kind.write_policy() {
            WritePolicy::AlwaysOverwrite => overwrite(&path, &artifact.contents)?,
            WritePolicy::CreateIfAbsent => create_if_absent(&path, &artifact.contents)?
        };

        debug!(path = %path.display(), ?outcome, "emitted");
        Ok(outcome)
    }
}

fn overwrite(path: &Path, contents: &str) -> Result<EmitOutcome> {
    match fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => return Ok(EmitOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(path, e))
    }

    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    Ok(EmitOutcome::Written)
}

fn create_if_absent(path: &Path, contents: &str) -> Result<EmitOutcome> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(EmitOutcome::Preserved),
        Err(e) => return Err(Error::io(path, e))
    };

    file.write_all(contents.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    Ok(EmitOutcome::Written)
}
