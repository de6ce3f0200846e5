//! Byte encoding of selected fields.
//!
//! Encoded fields are serialized to JSON text and then base64-encoded, so a
//! nested value can travel as an opaque, printable blob (for example into a
//! BYTES column). [`decode_value`] reverses the process.

use crate::error::TransformError;
use crate::path::KeyPath;
use crate::{Record, ALL_FIELDS_SENTINEL};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

/// Schema version stamped on every transformed record.
pub const SCHEMA_VERSION: i64 = 1;

/// Field name carrying [`SCHEMA_VERSION`].
pub const VERSION_FIELD: &str = "version";

/// One entry of an [`EncodingSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingKey {
    /// Serialize the entire source record.
    AllFields,
    /// Serialize a single field, flat or dotted.
    Field(KeyPath),
}

/// Ordered list of fields to re-encode after projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingSpec {
    keys: Vec<EncodingKey>,
    all_fields_target: String,
}

impl EncodingSpec {
    /// Build a spec. `all_fields_target` names the output field used by
    /// [`EncodingKey::AllFields`].
    pub fn new(keys: Vec<EncodingKey>, all_fields_target: impl Into<String>) -> Self {
        Self {
            keys,
            all_fields_target: all_fields_target.into(),
        }
    }

    /// Parse a comma-separated list where `all_keys` is the whole-record sentinel.
    pub fn parse(list: &str, all_fields_target: &str) -> Result<Self, TransformError> {
        let keys = list
            .split(',')
            .map(|key| {
                if key.trim() == ALL_FIELDS_SENTINEL {
                    Ok(EncodingKey::AllFields)
                } else {
                    KeyPath::parse(key).map(EncodingKey::Field)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(keys, all_fields_target))
    }

    pub fn keys(&self) -> &[EncodingKey] {
        &self.keys
    }

    pub fn all_fields_target(&self) -> &str {
        &self.all_fields_target
    }

    /// Re-encode the configured fields of `projected` and stamp the version.
    ///
    /// Dotted keys are resolved again against `source`. Flat keys use the
    /// projected value, falling back to the source record's top-level field
    /// when the key was not projected.
    pub fn encode(&self, mut projected: Record, source: &Record) -> Result<Record, TransformError> {
        for key in &self.keys {
            match key {
                EncodingKey::AllFields => {
                    let encoded = encode_record(source)?;
                    projected.insert(self.all_fields_target.clone(), Value::String(encoded));
                }
                EncodingKey::Field(path) if path.is_dotted() => {
                    let encoded = encode_value(path.resolve(source)?)?;
                    projected.insert(path.output_name().to_string(), Value::String(encoded));
                }
                EncodingKey::Field(path) => {
                    let value = match projected.get(path.as_str()) {
                        Some(value) => value,
                        None => path.resolve(source)?,
                    };
                    let encoded = encode_value(value)?;
                    projected.insert(path.as_str().to_string(), Value::String(encoded));
                }
            }
        }

        projected.insert(VERSION_FIELD.to_string(), Value::from(SCHEMA_VERSION));
        Ok(projected)
    }
}

/// Serialize `value` to JSON and base64-encode the bytes.
pub fn encode_value(value: &Value) -> Result<String, TransformError> {
    let bytes = serde_json::to_vec(value)?;
    Ok(STANDARD.encode(bytes))
}

fn encode_record(record: &Record) -> Result<String, TransformError> {
    let bytes = serde_json::to_vec(record)?;
    Ok(STANDARD.encode(bytes))
}

/// Inverse of [`encode_value`].
pub fn decode_value(encoded: &str) -> Result<Value, TransformError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(serde_json::from_slice(&bytes)?)
}
