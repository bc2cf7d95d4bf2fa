//! Persisted splitter configuration
//!
//! This module defines the TOML schema for saved preferences:
//!
//! ```toml
//! [split]
//! split_complex_letters = true
//! insert_spaces_between_letters = false
//!
//! [filter]
//! enabled = false
//! include_whitespace = true
//! ```
//!
//! Both sections and every key are optional; missing values fall back to
//! the defaults. Unknown keys are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decompose::split_hangul_blocks;
use crate::error::{Error, Result};
use crate::options::{FilterOptions, SplitOptions};

/// Commented default configuration
const TEMPLATE: &str = include_str!("../configs/default.toml");

/// Root splitter configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitterConfig {
    pub split: SplitOptions,
    pub filter: FilterOptions,
}

impl SplitterConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config = toml::from_str(text)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading splitter configuration from {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Commented template holding the default configuration
    pub fn template() -> &'static str {
        TEMPLATE
    }

    /// Filter (if enabled) and split the text
    pub fn apply(&self, text: &str) -> String {
        let filtered = self.filter.apply(text);
        split_hangul_blocks(&filtered, self.split)
    }
}
