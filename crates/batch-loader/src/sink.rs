//! Backing-store seam for the batch loader.

use crate::error::LoaderError;
use async_trait::async_trait;
use record_core::Record;

/// A store that accepts records in atomic chunks.
///
/// Implementations submit the whole chunk as one operation (one commit, one
/// `insert_many`) and return the number of records the store accepted.
#[async_trait]
pub trait BatchSink: Send + Sync {
    /// Short store name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Largest chunk the store accepts in one operation.
    fn max_batch_size(&self) -> usize;

    /// Chunk size used when none is configured.
    fn default_batch_size(&self) -> usize;

    /// Submit one chunk to `target` (a table or collection name).
    async fn write_batch(&self, target: &str, records: &[Record]) -> Result<u64, LoaderError>;
}
