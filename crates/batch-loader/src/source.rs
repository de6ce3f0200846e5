//! Reading loader input files.

use crate::error::LoaderError;
use record_core::{into_record, Record, ServiceKind};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load a whole JSON array file of objects into memory.
///
/// The full file is read up front so progress can be reported against the
/// total record count.
pub fn read_records(path: &Path) -> Result<Vec<Record>, LoaderError> {
    info!("Loading the JSON file {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let values: Vec<Value> = serde_json::from_reader(reader)?;
    let records = values
        .into_iter()
        .map(into_record)
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "JSON file {} loaded successfully ({} records)",
        path.display(),
        records.len()
    );
    Ok(records)
}

/// The service id of the record at `index`, which must be a string.
pub fn record_id(record: &Record, service: ServiceKind, index: usize) -> Result<&str, LoaderError> {
    let field = service.id_field();
    record
        .get(field)
        .and_then(Value::as_str)
        .ok_or(LoaderError::MissingIdField { index, field })
}
