//! Error types for record generation.

use record_core::{ArrayFormatError, TransformError};
use thiserror::Error;

/// Errors that can occur while generating or re-keying record files.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input element could not be decoded.
    #[error("Failed to decode element at line {line}: {source}")]
    Decode {
        line: u64,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed input array file.
    #[error("Malformed array file: {0}")]
    Structure(#[from] ArrayFormatError),

    /// Record-level error.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
