//! Runner configuration.
//!
//! Values come from an optional TOML file; command-line flags override them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tcgen_report::ReportFormat;

/// Report format as spelled in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatName {
    #[default]
    Csv,
    Text,
    Json,
}

impl From<FormatName> for ReportFormat {
    fn from(name: FormatName) -> Self {
        match name {
            FormatName::Csv => ReportFormat::Csv,
            FormatName::Text => ReportFormat::Text,
            FormatName::Json => ReportFormat::Json,
        }
    }
}

/// Settings for one `build` run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Random seed; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    pub format: FormatName,
    pub output_dir: PathBuf,
    pub marker: String,
    /// Overrides the specification's `executedBy` when set.
    pub executed_by: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            format: FormatName::Csv,
            output_dir: PathBuf::from("reports"),
            marker: tcgen_report::layout::DEFAULT_MARKER.to_string(),
            executed_by: None,
        }
    }
}

impl RunnerConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("invalid runner configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` if given, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
