//! Core record types for the ycsb-loader toolkit.
//!
//! This crate holds everything the data preparation pipeline agrees on:
//!
//! - [`KeyPath`] - flat or dotted field locators (`jobInfo.startTime`)
//! - [`ProjectionSpec`] - ordered key paths describing an output record
//! - [`EncodingSpec`] - fields re-serialized to JSON and base64-encoded
//! - [`ServiceKind`] - the static projection/encoding tables per service
//! - [`array`] - the one-element-per-line JSON array file convention
//!
//! # Pipeline
//!
//! ```text
//! source line ──► Record ──► ProjectionSpec::project ──► EncodingSpec::encode ──► output line
//!                   │                                          ▲
//!                   └──────────── dotted lookups redone ───────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{RecordTransform, ServiceKind, ServiceTransform};
//! use serde_json::json;
//!
//! let transform = ServiceTransform::for_service(ServiceKind::Namespace).unwrap();
//! let source = json!({
//!     "entityPathKey": "/mysource",
//!     "container": {"type": {"entityType": "SOURCE", "entityId": "abc"}}
//! });
//! let out = transform.transform(source.as_object().unwrap().clone()).unwrap();
//! assert_eq!(out["entityType"], "SOURCE");
//! assert_eq!(out["version"], 1);
//! ```

pub mod array;
pub mod encoding;
pub mod error;
pub mod path;
pub mod projection;
pub mod service;
pub mod transform;

pub use array::{
    classify_line, create_output, ArrayElement, ArrayElements, ArrayFormatError, ArrayLine, ArrayWriter,
};
pub use encoding::{
    decode_value, encode_value, EncodingKey, EncodingSpec, SCHEMA_VERSION, VERSION_FIELD,
};
pub use error::TransformError;
pub use path::KeyPath;
pub use projection::ProjectionSpec;
pub use service::ServiceKind;
pub use transform::{RecordTransform, ServiceTransform};

/// A single JSON object as read from an input file.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Sentinel entry in an encoding list meaning "serialize the whole source record".
pub const ALL_FIELDS_SENTINEL: &str = "all_keys";

/// Require `value` to be a JSON object.
pub fn into_record(value: serde_json::Value) -> Result<Record, TransformError> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(TransformError::NotAnObject(error::json_kind(&other))),
    }
}
