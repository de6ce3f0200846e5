//! Error types for the MongoDB sink.

use batch_loader::LoaderError;
use thiserror::Error;

/// Errors that can occur while loading into MongoDB.
#[derive(Error, Debug)]
pub enum MongoLoaderError {
    /// MongoDB connection or query error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// A record could not be converted to BSON.
    #[error("BSON conversion error: {0}")]
    Bson(#[from] bson::ser::Error),
}

impl From<MongoLoaderError> for LoaderError {
    fn from(err: MongoLoaderError) -> Self {
        LoaderError::store("MongoDB", err)
    }
}
