//! CLI argument definitions for record generation.

use crate::generator::DEFAULT_SEED;
use crate::populator::DEFAULT_FLUSH_SIZE;
use crate::rekey::DEFAULT_REKEY_FLUSH_SIZE;
use clap::Args;
use record_core::ServiceKind;
use std::path::PathBuf;

/// Arguments for generating a fake record file.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Service to generate records for (job or namespace)
    #[arg(long)]
    pub service_name: ServiceKind,

    /// Number of records to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output file (default: jobs_{n}.json or namespaces_{n}.json)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Number of records buffered before they are written to disk
    #[arg(long, default_value_t = DEFAULT_FLUSH_SIZE)]
    pub write_buffer_flush_size: usize,
}

/// Arguments for re-keying a namespace file.
#[derive(Args, Clone, Debug)]
pub struct RekeyArgs {
    /// Namespace array file to read
    #[arg(long)]
    pub input_filename: PathBuf,

    /// File to write the re-keyed records to
    #[arg(long)]
    pub output_filename: PathBuf,

    /// Random seed for the generated paths
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of records buffered before they are written to disk
    #[arg(long, default_value_t = DEFAULT_REKEY_FLUSH_SIZE)]
    pub write_buffer_flush_size: usize,
}
