//! Configuration module

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hangul_splitter_core::{FilterOptions, SplitOptions, SplitterConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
///
/// Shares the `[split]` and `[filter]` sections with the library
/// configuration and adds an `[output]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Splitting options
    pub split: SplitOptions,

    /// Filtering applied before splitting
    pub filter: FilterOptions,

    /// Output configuration
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load configuration from a file if one is given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Library configuration for the split and filter sections
    pub fn splitter(&self) -> SplitterConfig {
        SplitterConfig {
            split: self.split,
            filter: self.filter,
        }
    }

    /// Commented template with the default configuration
    pub fn template() -> String {
        format!(
            r#"{}

# Output settings for the command-line tool
[output]
# One of "text", "json" or "markdown"
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#,
            SplitterConfig::template().trim_end()
        )
    }
}
