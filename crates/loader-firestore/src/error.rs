//! Error types for the Firestore sink.

use batch_loader::LoaderError;
use thiserror::Error;

/// Errors that can occur while loading into Firestore.
#[derive(Error, Debug)]
pub enum FirestoreLoaderError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Firestore API answered with a non-success status.
    #[error("Firestore API returned {status} for {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },
}

impl From<FirestoreLoaderError> for LoaderError {
    fn from(err: FirestoreLoaderError) -> Self {
        LoaderError::store("Firestore", err)
    }
}
