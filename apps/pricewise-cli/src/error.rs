//! CLI error types.
//!
//! Library failures are wrapped with the context the user needs (which
//! file, which item). `main` reports them through `anyhow`.

use std::path::PathBuf;

use pricewise_core::{CoreError, ValidationError};

/// Errors raised by the `pricewise` commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid value: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Item '{name}': {source}")]
    InvalidItem {
        name: String,
        #[source]
        source: CoreError,
    },

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
