//! Per-record transformation seam used by the streaming rewriter.

use crate::encoding::EncodingSpec;
use crate::error::TransformError;
use crate::projection::ProjectionSpec;
use crate::service::ServiceKind;
use crate::Record;

/// Turns one source record into one output record.
pub trait RecordTransform {
    fn transform(&self, source: Record) -> Result<Record, TransformError>;
}

impl<F> RecordTransform for F
where
    F: Fn(Record) -> Result<Record, TransformError>,
{
    fn transform(&self, source: Record) -> Result<Record, TransformError> {
        self(source)
    }
}

/// Projection followed by byte encoding.
#[derive(Debug, Clone)]
pub struct ServiceTransform {
    projection: ProjectionSpec,
    encoding: EncodingSpec,
}

impl ServiceTransform {
    pub fn new(projection: ProjectionSpec, encoding: EncodingSpec) -> Self {
        Self {
            projection,
            encoding,
        }
    }

    /// Build the transform from a service's static tables.
    pub fn for_service(service: ServiceKind) -> Result<Self, TransformError> {
        Ok(Self::new(service.projection_spec()?, service.encoding_spec()?))
    }

    pub fn projection(&self) -> &ProjectionSpec {
        &self.projection
    }

    pub fn encoding(&self) -> &EncodingSpec {
        &self.encoding
    }
}

impl RecordTransform for ServiceTransform {
    fn transform(&self, source: Record) -> Result<Record, TransformError> {
        let projected = self.projection.project(&source)?;
        self.encoding.encode(projected, &source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::decode_value;
    use serde_json::{json, Value};

    fn job_source() -> Record {
        json!({
            "jobId": "j-1",
            "jobState": "COMPLETED",
            "version": 1,
            "jobInfo": {
                "user": "Ada Lovelace",
                "space": "sp",
                "dataset": "/a/b/c.csv",
                "datasetVersion": "v1",
                "sql": "SELECT 1",
                "queryType": "UI_RUN",
                "startTime": 100,
                "endTime": 200,
                "duration": 100,
                "queueName": "Ui Previews",
                "parentDataset": [{"datasetPath": ["", "a"], "datasetType": "VIRTUAL_DATASET"}],
                "allDatasets": [],
                "client": "ignored"
            },
            "jobStats": {"inputBytes": 10}
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_job_transform() {
        let transform = ServiceTransform::for_service(ServiceKind::Job).unwrap();
        let source = job_source();

        let out = transform.transform(source.clone()).unwrap();

        // 14 projected fields + jobResult + version
        assert_eq!(out.len(), 16);
        assert_eq!(out["user"], json!("Ada Lovelace"));
        assert_eq!(out["allDatasets"], json!([]));
        assert!(!out.contains_key("client"));
        assert_eq!(out["version"], json!(1));
        assert_eq!(
            decode_value(out["jobResult"].as_str().unwrap()).unwrap(),
            Value::Object(source)
        );
    }

    #[test]
    fn test_namespace_transform() {
        let transform = ServiceTransform::for_service(ServiceKind::Namespace).unwrap();
        let source = json!({
            "entityPathKey": "/mysource/schema/table1",
            "id": "x",
            "container": {"type": {"entityType": "FOLDER", "entityId": "e-9"}, "config": {}}
        })
        .as_object()
        .unwrap()
        .clone();

        let out = transform.transform(source.clone()).unwrap();

        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["entityPathKey", "entityType", "entityId", "container", "version"]
        );
        assert_eq!(
            decode_value(out["container"].as_str().unwrap()).unwrap(),
            source["container"]
        );
    }

    #[test]
    fn test_closure_transform() {
        let identity = |record: Record| -> Result<Record, TransformError> { Ok(record) };
        let record = json!({"a": 1}).as_object().unwrap().clone();
        assert_eq!(identity.transform(record.clone()).unwrap(), record);
    }
}
