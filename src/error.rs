//! Error types for configuration and document loading
//!
//! Builder operations themselves never fail; only the edges that touch files
//! or parse JSON return these.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fallible markupkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or documents
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an input file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON for the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
