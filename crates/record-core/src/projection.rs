//! Key extraction into flat output records.

use crate::error::TransformError;
use crate::path::KeyPath;
use crate::Record;

/// Ordered list of key paths describing the shape of an output record.
///
/// Each path contributes one entry named after its last segment. Two paths
/// sharing a last segment collide and the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSpec {
    paths: Vec<KeyPath>,
}

impl ProjectionSpec {
    pub fn new(paths: Vec<KeyPath>) -> Self {
        Self { paths }
    }

    /// Parse a comma-separated list such as `jobId,jobInfo.user`.
    pub fn parse(list: &str) -> Result<Self, TransformError> {
        let paths = list
            .split(',')
            .map(KeyPath::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[KeyPath] {
        &self.paths
    }

    /// Output field names in evaluation order, duplicates included.
    pub fn output_names(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(KeyPath::output_name)
    }

    /// Project `source` into a new flat record.
    pub fn project(&self, source: &Record) -> Result<Record, TransformError> {
        let mut projected = Record::new();
        for path in &self.paths {
            let value = path.resolve(source)?;
            projected.insert(path.output_name().to_string(), value.clone());
        }
        Ok(projected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn job() -> Record {
        json!({
            "jobId": "j1",
            "jobState": "RUNNING",
            "jobInfo": {"user": "alice", "startTime": 10, "endTime": 20}
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_job_projection_scenario() {
        let spec = ProjectionSpec::parse(
            "jobId,jobState,jobInfo.user,jobInfo.startTime,jobInfo.endTime",
        )
        .unwrap();

        let projected = spec.project(&job()).unwrap();

        assert_eq!(
            Value::Object(projected.clone()),
            json!({"jobId":"j1","jobState":"RUNNING","user":"alice","startTime":10,"endTime":20})
        );
        // insertion order follows the path list
        let keys: Vec<&str> = projected.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["jobId", "jobState", "user", "startTime", "endTime"]);
    }

    #[test]
    fn test_missing_nested_field_scenario() {
        let spec = ProjectionSpec::parse("jobId,jobInfo.missingField").unwrap();
        let err = spec.project(&job()).unwrap_err();
        assert!(matches!(err, TransformError::InvalidPath { .. }));
    }

    #[test]
    fn test_missing_flat_key() {
        let spec = ProjectionSpec::parse("jobId,queueName").unwrap();
        let err = spec.project(&job()).unwrap_err();
        assert!(matches!(err, TransformError::MissingKey(k) if k == "queueName"));
    }

    #[test]
    fn test_shared_last_segment_last_write_wins() {
        let source = json!({"a": {"x": 1}, "b": {"x": 2}})
            .as_object()
            .unwrap()
            .clone();
        let spec = ProjectionSpec::parse("a.x,b.x").unwrap();

        let projected = spec.project(&source).unwrap();

        assert_eq!(projected.len(), 1);
        assert_eq!(projected["x"], json!(2));

        let reversed = ProjectionSpec::parse("b.x,a.x").unwrap();
        assert_eq!(reversed.project(&source).unwrap()["x"], json!(1));
    }

    #[test]
    fn test_one_entry_per_distinct_output_name() {
        let source = json!({
            "k1": null,
            "k2": [1, {"z": true}],
            "o": {"p": {"q": "deep"}, "r": 1.5}
        })
        .as_object()
        .unwrap()
        .clone();
        let spec = ProjectionSpec::parse("k1,k2,o.p.q,o.r,o.p").unwrap();

        let projected = spec.project(&source).unwrap();

        assert_eq!(projected.len(), spec.paths().len());
        assert_eq!(projected["k1"], Value::Null);
        assert_eq!(projected["q"], json!("deep"));
        assert_eq!(projected["r"], json!(1.5));
        assert_eq!(projected["p"], json!({"q": "deep"}));
    }
}
