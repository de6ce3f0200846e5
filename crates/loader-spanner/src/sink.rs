//! Spanner sink: one insert-mutation commit per chunk.

use crate::client::{insert_commit_body, SpannerClient, SpannerConfig};
use crate::error::SpannerLoaderError;
use crate::layout::TableLayout;
use async_trait::async_trait;
use batch_loader::{BatchSink, LoaderError};
use record_core::{Record, ServiceKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// Default rows per commit.
pub const DEFAULT_BATCH_SIZE: usize = 400;

/// Spanner allows 80k mutations per commit; 4000 rows of the 16-column
/// job layout stays below that.
pub const MAX_BATCH_SIZE: usize = 4000;

pub struct SpannerSink {
    client: SpannerClient,
    session: String,
    layout: TableLayout,
    // position of the next record, for error messages
    offset: AtomicUsize,
}

impl SpannerSink {
    /// Open a session against the configured database.
    pub async fn connect(config: &SpannerConfig, service: ServiceKind) -> Result<Self, SpannerLoaderError> {
        let client = SpannerClient::new(config)?;
        let session = client.create_session().await?;
        info!("Opened Spanner session {}", session);
        Ok(Self {
            client,
            session,
            layout: TableLayout::for_service(service),
            offset: AtomicUsize::new(0),
        })
    }

    /// Delete the session. Failures are logged, not returned.
    pub async fn close(self) {
        if let Err(e) = self.client.delete_session(&self.session).await {
            warn!("Failed to delete Spanner session {}: {}", self.session, e);
        }
    }
}

#[async_trait]
impl BatchSink for SpannerSink {
    fn name(&self) -> &'static str {
        "Spanner"
    }

    fn max_batch_size(&self) -> usize {
        MAX_BATCH_SIZE
    }

    fn default_batch_size(&self) -> usize {
        DEFAULT_BATCH_SIZE
    }

    async fn write_batch(&self, target: &str, records: &[Record]) -> Result<u64, LoaderError> {
        let offset = self.offset.fetch_add(records.len(), Ordering::Relaxed);
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| self.layout.row_values(record, offset + i))
            .collect::<Result<Vec<_>, _>>()?;

        let body = insert_commit_body(target, &self.layout.column_names(), rows);
        self.client.commit(&self.session, &body).await?;
        Ok(records.len() as u64)
    }
}
