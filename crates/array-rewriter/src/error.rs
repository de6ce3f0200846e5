//! Error types for the array rewriter.

use record_core::{ArrayFormatError, TransformError};
use thiserror::Error;

/// Errors that abort a rewrite run.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// Record-level failure (missing key, invalid path, bad config).
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input element is not valid JSON.
    #[error("Failed to decode element at line {line}: {source}")]
    Decode {
        line: u64,
        #[source]
        source: serde_json::Error,
    },

    /// A transformed record could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not follow the one-element-per-line array layout.
    #[error("Malformed array file: {0}")]
    Structure(#[from] ArrayFormatError),
}
