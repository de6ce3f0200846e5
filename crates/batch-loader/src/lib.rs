//! Batch loading of record files into backing stores.
//!
//! A [`BatchLoader`] partitions an ordered slice of records into
//! consecutive chunks of at most `batch_size` and hands each chunk to a
//! [`BatchSink`]. The store-specific sinks live in their own crates:
//!
//! - `loader-mongodb` - `insert_many` per chunk
//! - `loader-spanner` - one `insert` mutation commit per chunk
//! - `loader-firestore` - one batched `commit` per chunk
//!
//! A failed chunk is fatal. There is no retry and nothing past the failing
//! chunk is submitted.

pub mod args;
pub mod error;
pub mod loader;
pub mod sink;
pub mod source;

pub use args::CommonLoadArgs;
pub use error::LoaderError;
pub use loader::{BatchLoader, LoadMetrics};
pub use sink::BatchSink;
pub use source::{read_records, record_id};
