//! Validated rewriter configuration.

use crate::args::TransformArgs;
use record_core::{ServiceKind, TransformError};
use std::path::{Path, PathBuf};

/// Smallest accepted write buffer flush size.
pub const MIN_FLUSH_SIZE: usize = 2;

/// Everything a rewrite run needs, checked up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub service: ServiceKind,
    pub flush_size: usize,
}

impl RewriterConfig {
    /// Build a config, deriving the output path from the input path.
    ///
    /// Fails with [`TransformError::InvalidConfig`] when `flush_size` is
    /// below [`MIN_FLUSH_SIZE`].
    pub fn new(
        input_path: impl Into<PathBuf>,
        service: ServiceKind,
        database_name: &str,
        flush_size: usize,
    ) -> Result<Self, TransformError> {
        if flush_size < MIN_FLUSH_SIZE {
            return Err(TransformError::InvalidConfig(format!(
                "write buffer flush size must be at least {MIN_FLUSH_SIZE}, got {flush_size}"
            )));
        }

        let input_path = input_path.into();
        let output_path = converted_output_path(&input_path, service, database_name);
        Ok(Self {
            input_path,
            output_path,
            service,
            flush_size,
        })
    }

    pub fn from_args(args: &TransformArgs) -> Result<Self, TransformError> {
        Self::new(
            args.input_file_path.clone(),
            args.service_name,
            &args.database_name,
            args.write_buffer_flush_size,
        )
    }
}

/// `data/jobs.json` becomes `data/jobs_converted_job_spanner.json`.
pub fn converted_output_path(input: &Path, service: ServiceKind, database_name: &str) -> PathBuf {
    let stem = input.with_extension("");
    let mut name = stem.into_os_string();
    name.push(format!("_converted_{service}_{database_name}.json"));
    PathBuf::from(name)
}
