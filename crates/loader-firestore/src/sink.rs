//! Firestore sink: one batched commit per chunk.

use crate::client::{update_write, FirestoreClient, FirestoreConfig};
use crate::error::FirestoreLoaderError;
use async_trait::async_trait;
use batch_loader::{record_id, BatchSink, LoaderError};
use record_core::{Record, ServiceKind};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Firestore accepts at most 500 writes per commit.
pub const MAX_BATCH_SIZE: usize = 500;

pub const DEFAULT_BATCH_SIZE: usize = MAX_BATCH_SIZE;

/// Default collection per service.
pub fn default_collection(service: ServiceKind) -> &'static str {
    match service {
        ServiceKind::Job => "jobs",
        ServiceKind::Namespace => "namespaces",
    }
}

pub struct FirestoreSink {
    client: FirestoreClient,
    service: ServiceKind,
    offset: AtomicUsize,
}

impl FirestoreSink {
    pub fn new(config: &FirestoreConfig, service: ServiceKind) -> Result<Self, FirestoreLoaderError> {
        Ok(Self {
            client: FirestoreClient::new(config)?,
            service,
            offset: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl BatchSink for FirestoreSink {
    fn name(&self) -> &'static str {
        "Firestore"
    }

    fn max_batch_size(&self) -> usize {
        MAX_BATCH_SIZE
    }

    fn default_batch_size(&self) -> usize {
        DEFAULT_BATCH_SIZE
    }

    async fn write_batch(&self, target: &str, records: &[Record]) -> Result<u64, LoaderError> {
        let offset = self.offset.fetch_add(records.len(), Ordering::Relaxed);
        let mut writes = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let id = record_id(record, self.service, offset + i)?;
            writes.push(update_write(self.client.database_path(), target, id, record));
        }

        self.client.commit(writes).await?;
        Ok(records.len() as u64)
    }
}
