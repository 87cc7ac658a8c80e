//! CLI subcommands

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::AdvisorConfig;

pub mod dataset;
pub mod query;
pub mod suggest;

/// Read the advisor configuration from `path`, or use defaults
pub(crate) fn load_config(path: Option<&Path>) -> Result<AdvisorConfig> {
    match path {
        Some(path) => AdvisorConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(AdvisorConfig::default()),
    }
}
