//! Error types for record projection and encoding.

use thiserror::Error;

/// Errors raised while projecting or encoding a record.
///
/// Every variant is fatal to a run; nothing here is retried.
#[derive(Error, Debug)]
pub enum TransformError {
    /// A flat key is absent from the source record.
    #[error("Missing key '{0}' in source record")]
    MissingKey(String),

    /// A dotted path stopped resolving at `segment`.
    #[error("Invalid key path '{path}': segment '{segment}' does not resolve to a value")]
    InvalidPath { path: String, segment: String },

    /// Unknown service identifier.
    #[error("{0} is invalid service name")]
    InvalidServiceName(String),

    /// Configuration rejected before any record was processed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A decoded element was valid JSON but not an object.
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An encoded field was not valid base64.
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Describe the JSON type of a value for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
