//! Error types for batch loading.

use thiserror::Error;

/// Errors that abort a load run.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Invalid batch size or target.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file is not a JSON array of objects.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record is not shaped the way the loader needs it.
    #[error(transparent)]
    Record(#[from] record_core::TransformError),

    /// A record has no string value for the service's id field.
    #[error("Record {index} has no string '{field}' field")]
    MissingIdField { index: usize, field: &'static str },

    /// The backing store rejected a chunk.
    #[error("{store} error: {source}")]
    Store {
        store: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LoaderError {
    /// Wrap a backing-store client error.
    pub fn store<E>(store: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LoaderError::Store {
            store,
            source: Box::new(err),
        }
    }
}
