//! Error types for ktra.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Config file or environment could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Settings loaded but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
