//! Error types
//!
//! Building actions, clauses and reducers never fails. These errors only come
//! from the optional layers around them: typed payload access, configuration
//! loading and the store's dispatch loop.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when reading an action's payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Action {tag} carries props of type {actual}, not {expected}")]
    PropsMismatch {
        tag: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Errors raised while loading a [`crate::StoreConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by [`crate::Store::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Dispatch depth exceeded the limit of {limit}; {dropped} actions were dropped")]
    DispatchDepthExceeded { limit: usize, dropped: usize },
}
