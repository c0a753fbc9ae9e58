//! Process-level configuration for the decoration engine.
//!
//! Loaded once at startup from TOML:
//!
//! ```toml
//! max_page_size = 500
//! strict_comparisons = false
//!
//! [capabilities]
//! application = ["name", "created_at"]
//! log_entry = ["timestamp"]
//! ```
//!
//! A missing `[capabilities]` table keeps the builtin allow-lists.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DecorationConfig {
    /// Largest page a pagination decoration may request
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Fail the request instead of degrading when field values cannot be
    /// compared
    #[serde(default)]
    pub strict_comparisons: bool,

    /// Replacement ordering allow-lists keyed by record kind wire name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<BTreeMap<String, Vec<String>>>,
}

fn default_max_page_size() -> usize {
    DEFAULT_MAX_PAGE_SIZE
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            strict_comparisons: false,
            capabilities: None,
        }
    }
}

impl DecorationConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Self::parse(raw, PathBuf::from("<inline>"))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&raw, path.to_path_buf())?;
        debug!(
            path = %path.display(),
            max_page_size = config.max_page_size,
            strict = config.strict_comparisons,
            "loaded decoration config"
        );
        Ok(config)
    }

    fn parse(raw: &str, path: PathBuf) -> Result<Self, ConfigError> {
        let config: DecorationConfig =
            toml::from_str(raw).map_err(|source| ConfigError::Parse { path, source })?;
        if config.max_page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(config)
    }
}
