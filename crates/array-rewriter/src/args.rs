//! CLI argument definitions for the transform command.

use clap::Args;
use record_core::ServiceKind;
use std::path::PathBuf;

/// Default number of transformed records buffered before a write.
pub const DEFAULT_WRITE_BUFFER_FLUSH_SIZE: usize = 10;

/// Arguments for rewriting a record file into a database layout.
#[derive(Args, Clone, Debug)]
pub struct TransformArgs {
    /// Array file to transform (one JSON object per line)
    #[arg(long, alias = "filename", alias = "inputfilepath")]
    pub input_file_path: PathBuf,

    /// Service whose key tables drive the transform (job or namespace)
    #[arg(long, alias = "servicename")]
    pub service_name: ServiceKind,

    /// Target database label, embedded in the output file name
    #[arg(long, alias = "databasename")]
    pub database_name: String,

    /// Number of transformed records buffered before they are written (>= 2)
    #[arg(long, default_value_t = DEFAULT_WRITE_BUFFER_FLUSH_SIZE)]
    pub write_buffer_flush_size: usize,
}
