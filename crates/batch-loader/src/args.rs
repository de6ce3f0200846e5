//! CLI arguments shared by every load command.

use clap::Args;
use record_core::ServiceKind;
use std::path::PathBuf;

/// Common arguments shared by all loaders.
#[derive(Args, Clone, Debug)]
pub struct CommonLoadArgs {
    /// JSON array file to load
    #[arg(long, alias = "input-file-path")]
    pub filename: PathBuf,

    /// Service the records belong to (job or namespace)
    #[arg(long, alias = "servicename")]
    pub service_name: ServiceKind,

    /// Records per atomic store operation (default depends on the store)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Table or collection to load into (default depends on the store and service)
    #[arg(long, alias = "tablename", alias = "collection")]
    pub table_name: Option<String>,
}
