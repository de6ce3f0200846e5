//! JSON to Firestore typed value mapping.
//!
//! Firestore's REST API wraps every value in a single-key object naming its
//! type, e.g. `{"stringValue": "x"}`. 64-bit integers are sent as decimal
//! strings.

use record_core::Record;
use serde_json::{json, Map, Value};

/// Document id for a service id: Firestore ids may not contain `/`.
pub fn sanitize_document_id(id: &str) -> String {
    id.replace('/', "_")
}

/// Encode a record as a Firestore `fields` map.
pub fn to_fields(record: &Record) -> Map<String, Value> {
    record
        .iter()
        .map(|(key, value)| (key.clone(), to_value(value)))
        .collect()
}

/// Encode one JSON value. Integers outside `i64` go out as doubles.
pub fn to_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": to_fields(map) } }),
    }
}
