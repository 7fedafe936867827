// File: src/error.rs
// Purpose: Operational errors (configuration and input loading)
//
// Validation failures are never errors; they are returned as ValidationResult.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
