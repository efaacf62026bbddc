// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # hbm-modelgen
//!
//! Generates layered Java model and data-access classes from Hibernate
//! mapping documents.
//!
//! A `hibernate.cfg.xml` names the `*.hbm.xml` resources to read. For every
//! mapped class, including nested subclasses, four files are produced:
//!
//! | File | Owner | On re-run |
//! |------|-------|-----------|
//! | `<pkg>/base/Base<Class>.java` | generator | regenerated |
//! | `<pkg>/<Class>.java` | developer | left alone |
//! | `<pkg>/base/Base<Class>DAO.java` | generator | regenerated |
//! | `<pkg>/dao/<Class>DAO.java` | developer | left alone |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hbm_modelgen::{GeneratorConfig, run_conversion};
//!
//! let config = GeneratorConfig::new().with_source("src/main/resources");
//! let report = run_conversion(&config)?;
//! println!("{} entities, {} files written", report.entities, report.written);
//! # Ok::<(), hbm_modelgen::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! hibernate.cfg.xml ──► SchemaReader ──► MappingConfig
//!                                            │ resources
//!                                            ▼
//!                       SchemaReader ──► MappingResource (each read once)
//!                                            │
//!                  pass 1: ResolutionModel ◄─┤  parent-of, identifier-of
//!                                            │
//!                  pass 2: Generator ────────┘──► Emitter ──► *.java
//! ```
//!
//! Pass 1 sees every resource before pass 2 writes anything, so a finder
//! can bind the identifier type of an entity mapped in a later resource.
//!
//! ## Modules
//!
//! - [`types`]: mapping type tokens to Java type names
//! - [`reader`]: document loading and DOCTYPE resolution
//! - [`mapping`]: typed model of the documents
//! - [`resolve`]: first pass
//! - [`generate`]: second pass and Java rendering
//! - [`emit`]: output layout and overwrite policy
//! - [`config`]: run settings
//! - [`error`]: fatal errors

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod mapping;
pub mod reader;
pub mod resolve;
pub mod types;

use std::fs;

pub use config::GeneratorConfig;
pub use emit::{Artifact, ArtifactKind, EmitOutcome, Emitter, WritePolicy};
pub use error::{Error, Result};
pub use generate::{GenerationReport, Generator};
pub use mapping::{MappingConfig, MappingResource};
pub use reader::{EntityResolver, SchemaReader};
pub use resolve::{ResolutionModel, ResolvedIdentifier};
use tracing::info;
pub use types::{JavaType, normalize_type};

/// Run both passes for the configuration document named by `config`.
///
/// Every resource is read and modelled once, resolved as a whole, then
/// generated in configuration order.
///
/// # Errors
///
/// The first fatal error. Files of entities generated before the failure
/// stay on disk.
pub fn run_conversion(config: &GeneratorConfig) -> Result<GenerationReport> {
    info!("Config: {}", config.config_path().display());

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).map_err(|e| Error::io(&output_dir, e))?;
    let emitter = Emitter::new(output_dir);
    info!("Working directory: {}", emitter.output_dir().display());

    let reader = SchemaReader::with_hibernate_dtds(config.resource_dir());

    info!("Reading {} ...", config.config_name);
    let mapping_config = MappingConfig::load(&reader.read_resource(&config.config_name)?)?;

    let mut resources = Vec::with_capacity(mapping_config.resources.len());
    for resource in &mapping_config.resources {
        info!("Pre-processing {} ...", resource);
        resources.push(MappingResource::load(&reader.read_resource(resource)?)?);
    }
    let model = ResolutionModel::resolve(&resources)?;
    info!(entities = model.entity_count(), "Resolved {} resources", resources.len());

    let mut generator = Generator::new(&model, &emitter, config);
    for resource in &resources {
        info!("Processing {} ...", resource.path);
        generator.generate_resource(resource)?;
    }

    let report = generator.report();
    info!(
        entities = report.entities,
        written = report.written,
        unchanged = report.unchanged,
        preserved = report.preserved,
        "All done."
    );
    Ok(report)
}
