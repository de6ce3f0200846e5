//! Shared driver for the `load` subcommands.

use anyhow::Context;
use batch_loader::{read_records, BatchLoader, BatchSink, CommonLoadArgs, LoadMetrics};

/// Table or collection named on the command line, else the store default.
pub fn target_name(common: &CommonLoadArgs, default_target: &str) -> String {
    common
        .table_name
        .clone()
        .unwrap_or_else(|| default_target.to_string())
}

/// Read the input file and push it through `sink` in chunks.
///
/// The sink is handed back whether or not the load succeeded, so callers
/// can release store resources before reporting the error.
pub async fn load_file<S: BatchSink>(
    sink: S,
    common: &CommonLoadArgs,
    default_target: &str,
) -> (S, anyhow::Result<LoadMetrics>) {
    let mut loader = BatchLoader::new(sink);
    let result = run_load(&mut loader, common, default_target).await;
    (loader.into_sink(), result)
}

async fn run_load<S: BatchSink>(
    loader: &mut BatchLoader<S>,
    common: &CommonLoadArgs,
    default_target: &str,
) -> anyhow::Result<LoadMetrics> {
    let records = read_records(&common.filename)
        .with_context(|| format!("Failed to read records from {:?}", common.filename))?;

    if let Some(batch_size) = common.batch_size {
        loader.set_batch_size(batch_size)?;
    }

    let target = target_name(common, default_target);
    let metrics = loader
        .load(&target, &records)
        .await
        .with_context(|| format!("Failed to load {:?} into '{target}'", common.filename))?;

    tracing::info!(
        "Successfully inserted {} records into table {} from file {}",
        metrics.records_inserted,
        target,
        common.filename.display()
    );
    Ok(metrics)
}
