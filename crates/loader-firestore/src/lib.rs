//! Firestore sink for the batch loader.
//!
//! Each chunk is sent as one `documents:commit` request made of `update`
//! writes, so it is applied atomically. Document ids come from the service
//! id field with `/` replaced by `_`.

pub mod args;
pub mod client;
pub mod error;
pub mod sink;
pub mod value;

pub use args::FirestoreLoadArgs;
pub use client::{update_write, FirestoreClient, FirestoreConfig};
pub use error::FirestoreLoaderError;
pub use sink::{default_collection, FirestoreSink, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
pub use value::{sanitize_document_id, to_fields, to_value};
