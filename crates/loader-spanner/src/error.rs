//! Error types for the Spanner sink.

use batch_loader::LoaderError;
use thiserror::Error;

/// Errors that can occur while loading into Cloud Spanner.
#[derive(Error, Debug)]
pub enum SpannerLoaderError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Spanner API answered with a non-success status.
    #[error("Spanner API returned {status} for {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    /// A record lacks a column of the table layout.
    #[error("Record {index} is missing column '{column}'")]
    MissingColumn { index: usize, column: &'static str },

    /// A record value does not fit the column type.
    #[error("Record {index}: column '{column}' expects {expected}")]
    ColumnType {
        index: usize,
        column: &'static str,
        expected: &'static str,
    },

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SpannerLoaderError> for LoaderError {
    fn from(err: SpannerLoaderError) -> Self {
        LoaderError::store("Spanner", err)
    }
}
