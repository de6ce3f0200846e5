//! MongoDB sink for the batch loader.
//!
//! Each chunk becomes one `insert_many` call against the target collection.

pub mod args;
pub mod error;
pub mod sink;

pub use args::MongoDBLoadArgs;
pub use error::MongoLoaderError;
pub use sink::{default_collection, record_to_document, MongoSink, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
