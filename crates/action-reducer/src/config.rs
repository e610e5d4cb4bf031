//! Store configuration
//!
//! Loaded from TOML; every key is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for a [`crate::Store`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Install [`crate::LoggingMiddleware`] at the front of the chain
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,

    /// How deep actions queued by middleware may nest before dispatch gives up
    #[serde(default = "default_max_dispatch_depth")]
    pub max_dispatch_depth: usize,
}

fn default_log_actions() -> bool {
    true
}

fn default_max_dispatch_depth() -> usize {
    64
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_actions: default_log_actions(),
            max_dispatch_depth: default_max_dispatch_depth(),
        }
    }
}

impl StoreConfig {
    /// Parse config from TOML text, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded store config from {}", path.display());
        Ok(config)
    }
}
