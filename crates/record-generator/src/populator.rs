//! Writes generated records to line-oriented JSON array files.

use crate::error::GeneratorError;
use crate::generator::RecordGenerator;
use crate::namespace::{EntityPathPlan, RandomPathStyle};
use record_core::{create_output, ArrayWriter, ServiceKind};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Default number of records buffered before a write.
pub const DEFAULT_FLUSH_SIZE: usize = 1000;

/// Metrics from a generate operation.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Number of buffer flushes.
    pub flushes: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl GenerateMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// File name used when no output path is given, e.g. `jobs_100.json`.
pub fn default_output_path(service: ServiceKind, count: u64) -> PathBuf {
    match service {
        ServiceKind::Job => PathBuf::from(format!("jobs_{count}.json")),
        ServiceKind::Namespace => PathBuf::from(format!("namespaces_{count}.json")),
    }
}

/// Generates record files for a service.
pub struct ArrayFilePopulator {
    generator: RecordGenerator,
    flush_size: usize,
}

impl ArrayFilePopulator {
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
            flush_size: DEFAULT_FLUSH_SIZE,
        }
    }

    /// Set the number of records buffered between writes.
    pub fn with_flush_size(mut self, flush_size: usize) -> Self {
        self.flush_size = flush_size;
        self
    }

    /// Write `count` records of `service` to `output_path`, replacing any existing file.
    ///
    /// Namespace files always contain at least the fixed entity path tree, so
    /// `count` is raised to its size when smaller.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        service: ServiceKind,
        output_path: P,
        count: u64,
    ) -> Result<GenerateMetrics, GeneratorError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();

        let file = create_output(output_path)?;
        let mut writer = ArrayWriter::new(BufWriter::new(file), self.flush_size)?;

        let written = match service {
            ServiceKind::Job => {
                info!(
                    "Generating {} job records into '{}'",
                    count,
                    output_path.display()
                );
                for job in self.generator.jobs(count) {
                    writer.push(serde_json::to_string(&job)?)?;
                }
                count
            }
            ServiceKind::Namespace => {
                let mut plan = EntityPathPlan::default_tree(RandomPathStyle::FilePath);
                let count = count.max(plan.fixed_len() as u64);
                info!(
                    "Generating {} namespace records into '{}'",
                    count,
                    output_path.display()
                );
                for _ in 0..count {
                    let key = plan.next_key(self.generator.rng_mut());
                    let namespace = self.generator.next_namespace(&key);
                    writer.push(serde_json::to_string(&namespace)?)?;
                }
                count
            }
        };

        writer.close()?;

        let metrics = GenerateMetrics {
            records_written: written,
            flushes: writer.flushes(),
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "Generation complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}
