// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `hbm-modelgen` command.
//!
//! ```text
//! hbm-modelgen [--source <DIR>] [--config <NAME>]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use hbm_modelgen::{GeneratorConfig, run_conversion};
use tracing_subscriber::EnvFilter;

/// Generate Java model and DAO classes from Hibernate mappings.
#[derive(Parser, Debug)]
#[command(name = "hbm-modelgen", version, about, long_about = None)]
struct Cli {
    /// Directory holding the configuration and mapping resources; sources
    /// are generated into it as well
    #[arg(long, env = "HBM_MODELGEN_SOURCE")]
    source: Option<PathBuf>,

    /// Configuration document name, relative to the resource directory
    #[arg(long, env = "HBM_MODELGEN_CONFIG", default_value = hbm_modelgen::config::DEFAULT_CONFIG_NAME)]
    config: String
}

impl Cli {
    fn generator_config(self) -> GeneratorConfig {
        let config = GeneratorConfig::new().with_config_name(self.config);
        match self.source {
            Some(source) => config.with_source(source),
            None => config
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.generator_config();
    run_conversion(&config).context("model generation failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_packaged_layout() {
        let cli = Cli::try_parse_from(["hbm-modelgen"]).unwrap();
        let config = cli.generator_config();
        assert_eq!(config.source, None);
        assert_eq!(config.config_name, "hibernate.cfg.xml");
    }

    #[test]
    fn source_and_config_flags() {
        let cli =
            Cli::try_parse_from(["hbm-modelgen", "--source", "/work/res", "--config", "test.cfg.xml"])
                .unwrap();
        let config = cli.generator_config();
        assert_eq!(config.source, Some(PathBuf::from("/work/res")));
        assert_eq!(config.config_name, "test.cfg.xml");
        assert_eq!(config.output_dir(), PathBuf::from("/work/res"));
    }
}
