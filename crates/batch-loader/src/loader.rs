//! Chunked loading with progress reporting.

use crate::error::LoaderError;
use crate::sink::BatchSink;
use record_core::Record;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from a load operation.
#[derive(Debug, Clone, Default)]
pub struct LoadMetrics {
    /// Number of records the store accepted.
    pub records_inserted: u64,
    /// Number of chunks submitted.
    pub batch_count: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl LoadMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Splits records into consecutive chunks and submits them one at a time.
pub struct BatchLoader<S> {
    sink: S,
    batch_size: usize,
}

impl<S: BatchSink> BatchLoader<S> {
    /// Create a loader using the sink's default batch size.
    pub fn new(sink: S) -> Self {
        let batch_size = sink.default_batch_size();
        Self { sink, batch_size }
    }

    /// Set the chunk size. It must be in `1..=sink.max_batch_size()`.
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self, LoaderError> {
        self.set_batch_size(batch_size)?;
        Ok(self)
    }

    /// In-place form of [`with_batch_size`](Self::with_batch_size); the loader
    /// is left unchanged on error.
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<(), LoaderError> {
        let max = self.sink.max_batch_size();
        if batch_size == 0 || batch_size > max {
            return Err(LoaderError::InvalidConfig(format!(
                "batch size for {} must be between 1 and {max}, got {batch_size}",
                self.sink.name()
            )));
        }
        self.batch_size = batch_size;
        Ok(())
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Insert all `records` into `target`, stopping at the first failed chunk.
    pub async fn load(&self, target: &str, records: &[Record]) -> Result<LoadMetrics, LoaderError> {
        let start_time = Instant::now();
        let mut metrics = LoadMetrics::default();
        let total = records.len();

        info!(
            "Loading {} records into {} '{}' (batch size: {})",
            total,
            self.sink.name(),
            target,
            self.batch_size
        );

        let mut done = 0usize;
        for chunk in records.chunks(self.batch_size) {
            let inserted = self.sink.write_batch(target, chunk).await?;
            done += chunk.len();
            metrics.records_inserted += inserted;
            metrics.batch_count += 1;

            debug!(
                "Batch {} complete: {} records accepted",
                metrics.batch_count, inserted
            );
            info!("Inserted {} out of {} records into {}", done, total, target);
        }

        metrics.total_duration = start_time.elapsed();
        info!(
            "Successfully inserted {} records into {} in {:?} ({:.2} rows/sec)",
            metrics.records_inserted,
            target,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }
}
