//! Streaming rewrite of line-oriented JSON array files.

use crate::config::RewriterConfig;
use crate::error::RewriteError;
use record_core::{create_output, into_record, ArrayElements, ArrayWriter, RecordTransform, ServiceTransform};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics from a rewrite run.
#[derive(Debug, Clone, Default)]
pub struct RewriteMetrics {
    /// Number of transformed records written.
    pub records_written: u64,
    /// Number of buffer flushes, including the one at the closing bracket.
    pub flushes: u64,
    /// Bytes written to the output.
    pub output_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl RewriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Rewrites an array one element at a time through a [`RecordTransform`].
///
/// At most `flush_size` transformed elements are held in memory.
pub struct ArrayRewriter<T> {
    transform: T,
    flush_size: usize,
}

impl<T: RecordTransform> ArrayRewriter<T> {
    pub fn new(transform: T, flush_size: usize) -> Self {
        Self {
            transform,
            flush_size,
        }
    }

    /// Rewrite `input` into `output`, replacing any existing output file.
    ///
    /// On error the partially written output is left in place.
    pub fn rewrite_file(&self, input: &Path, output: &Path) -> Result<RewriteMetrics, RewriteError> {
        let start_time = Instant::now();
        info!(
            "Transforming '{}' into '{}' (flush size {})",
            input.display(),
            output.display(),
            self.flush_size
        );

        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(create_output(output)?);
        let mut metrics = self.rewrite(reader, writer)?;
        metrics.total_duration = start_time.elapsed();

        info!(
            "Transform complete: {} records, {} flushes, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.flushes,
            metrics.output_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );
        Ok(metrics)
    }

    /// Rewrite from any line reader into any writer.
    pub fn rewrite<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<RewriteMetrics, RewriteError> {
        let start_time = Instant::now();
        let mut writer = ArrayWriter::new(writer, self.flush_size)?;

        for element in ArrayElements::new(reader) {
            let element = element?;
            let value: Value = serde_json::from_str(&element.text).map_err(|source| {
                RewriteError::Decode {
                    line: element.line,
                    source,
                }
            })?;
            let record = self.transform.transform(into_record(value)?)?;
            writer.push(serde_json::to_string(&record)?)?;
        }

        writer.close()?;

        Ok(RewriteMetrics {
            records_written: writer.emitted(),
            flushes: writer.flushes(),
            output_bytes: writer.bytes_written(),
            total_duration: start_time.elapsed(),
        })
    }
}

/// Run the service transform described by `config`.
pub fn rewrite_service_file(config: &RewriterConfig) -> Result<RewriteMetrics, RewriteError> {
    let transform = ServiceTransform::for_service(config.service)?;
    ArrayRewriter::new(transform, config.flush_size).rewrite_file(&config.input_path, &config.output_path)
}
