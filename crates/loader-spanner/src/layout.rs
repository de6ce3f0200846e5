//! Table layouts and row encoding for Spanner mutations.
//!
//! Values follow the Spanner JSON wire format: INT64 travels as a decimal
//! string and BYTES as base64 text. Rewritten records already carry their
//! byte columns as base64, so those are passed through unchanged.

use crate::error::SpannerLoaderError;
use record_core::{Record, ServiceKind};
use serde_json::Value;

/// How a record value is written to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    String,
    Int64,
    /// Base64 text passed through as BYTES.
    Bytes,
    /// Any JSON value, serialized and stored as STRING.
    JsonText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> Column {
    Column { name, kind }
}

const JOB_COLUMNS: &[Column] = &[
    col("jobId", ColumnKind::String),
    col("allDatasets", ColumnKind::JsonText),
    col("dataset", ColumnKind::String),
    col("datasetVersion", ColumnKind::String),
    col("duration", ColumnKind::Int64),
    col("endTime", ColumnKind::Int64),
    col("jobResult", ColumnKind::Bytes),
    col("jobState", ColumnKind::String),
    col("parentDataset", ColumnKind::JsonText),
    col("queryType", ColumnKind::String),
    col("queueName", ColumnKind::String),
    col("space", ColumnKind::String),
    col("sql", ColumnKind::JsonText),
    col("startTime", ColumnKind::Int64),
    col("user", ColumnKind::String),
    col("version", ColumnKind::Int64),
];

const NAMESPACE_COLUMNS: &[Column] = &[
    col("entityId", ColumnKind::String),
    col("container", ColumnKind::Bytes),
    col("entityType", ColumnKind::String),
    col("entityPathKey", ColumnKind::String),
];

/// Default table per service.
pub fn default_table(service: ServiceKind) -> &'static str {
    match service {
        ServiceKind::Job => "jobs",
        ServiceKind::Namespace => "dac_namespace",
    }
}

/// Ordered columns written for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    columns: &'static [Column],
}

impl TableLayout {
    pub fn for_service(service: ServiceKind) -> Self {
        match service {
            ServiceKind::Job => Self {
                columns: JOB_COLUMNS,
            },
            ServiceKind::Namespace => Self {
                columns: NAMESPACE_COLUMNS,
            },
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        self.columns
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Encode one record as a mutation row, in column order.
    ///
    /// `index` is the record's position in the input, for error messages.
    pub fn row_values(&self, record: &Record, index: usize) -> Result<Vec<Value>, SpannerLoaderError> {
        self.columns
            .iter()
            .map(|column| {
                let value = record
                    .get(column.name)
                    .ok_or(SpannerLoaderError::MissingColumn {
                        index,
                        column: column.name,
                    })?;
                encode_column(column, value, index)
            })
            .collect()
    }
}

fn encode_column(column: &Column, value: &Value, index: usize) -> Result<Value, SpannerLoaderError> {
    let type_error = |expected: &'static str| SpannerLoaderError::ColumnType {
        index,
        column: column.name,
        expected,
    };

    match (column.kind, value) {
        (ColumnKind::JsonText, value) => Ok(Value::String(serde_json::to_string(value)?)),
        (_, Value::Null) => Ok(Value::Null),
        (ColumnKind::String, Value::String(s)) => Ok(Value::String(s.clone())),
        (ColumnKind::String, _) => Err(type_error("a string")),
        (ColumnKind::Bytes, Value::String(s)) => Ok(Value::String(s.clone())),
        (ColumnKind::Bytes, _) => Err(type_error("base64 text")),
        (ColumnKind::Int64, Value::Number(n)) => n
            .as_i64()
            .map(|i| Value::String(i.to_string()))
            .ok_or_else(|| type_error("a 64-bit integer")),
        (ColumnKind::Int64, _) => Err(type_error("a 64-bit integer")),
    }
}
