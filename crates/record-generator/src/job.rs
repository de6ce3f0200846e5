//! Fake job records.

use crate::generators::collection::{self, ScalarKind};
use crate::generators::{net, numeric, path, pick, text, uuid};
use rand::Rng;
use record_core::SCHEMA_VERSION;
use serde_json::{json, Map, Value};

pub const JOB_STATES: &[&str] = &[
    "NOT_SUBMITTED",
    "STARTING",
    "RUNNING",
    "COMPLETED",
    "CANCELLED",
    "FAILED",
    "CANCELLATION_REQUESTED",
    "ENQUEUED",
    "PLANNING",
];

pub const REQUEST_TYPES: &[&str] = &[
    "GET_CATALOGS",
    "GET_COLUMNS",
    "GET_SCHEMAS",
    "GET_TABLES",
    "CREATE_PREPARE",
    "EXECUTE_PREPARE",
    "RUN_SQL",
    "GET_SERVER_META",
];

pub const QUERY_TYPES: &[&str] = &[
    "UI_RUN",
    "UI_PREVIEW",
    "UI_INTERNAL_PREVIEW",
    "UI_INTERNAL_RUN",
    "UI_EXPORT",
    "ODBC",
    "JDBC",
    "REST",
    "ACCELERATOR_CREATE",
    "ACCELERATOR_DROP",
    "UNKNOWN",
    "PREPARE_INTERNAL",
    "ACCELERATOR_EXPLAIN",
    "UI_INITIAL_PREVIEW",
];

pub const QUEUE_NAMES: &[&str] = &[
    "Ui Previews",
    "High Cost Reflections",
    "Low Cost Reflections",
    "High Cost User Queries",
    "Low Cost User Queries",
];

pub const DATASET_TYPES: &[&str] = &[
    "INVALID_DATASET_TYPE",
    "VIRTUAL_DATASET",
    "PHYSICAL_DATASET",
    "PHYSICAL_DATASET_SOURCE_FILE",
    "PHYSICAL_DATASET_SOURCE_FOLDER",
    "PHYSICAL_DATASET_HOME_FILE",
    "PHYSICAL_DATASET_HOME_FOLDER",
];

pub const ATTEMPT_REASONS: &[&str] = &[
    "NONE",
    "OUT_OF_MEMORY",
    "SCHEMA_CHANGE",
    "INVALID_DATASET_METADATA",
    "JSON_FIELD_CHANGE",
];

/// Fixed gap between a job's start and end time.
pub const JOB_DURATION: i64 = 100;

/// Generate one job record.
pub fn generate_job<R: Rng>(rng: &mut R) -> Value {
    let job_id = uuid::uuid_v4(rng);
    let job_state = *pick(rng, JOB_STATES);
    let job_info = job_info(rng);

    let job_stats = json!({
        "inputBytes": numeric::int_range(rng, 0, 500),
        "outputBytes": numeric::int_range(rng, 0, 500),
        "inputRecords": numeric::int_range(rng, 0, 10),
        "outputRecords": numeric::int_range(rng, 0, 10),
        "isOutputLimited": numeric::boolean(rng),
    });

    let mut job_details = match collection::dict(rng, 5, ScalarKind::Int) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    job_details.insert("tableDatasetProfiles".to_string(), json!([{}]));
    job_details.insert("fsDatasetProfiles".to_string(), json!([{}]));
    job_details.insert("topOperations".to_string(), json!([{}]));

    let attempt_reason = *pick(rng, ATTEMPT_REASONS);
    let attempt_id = uuid::uuid_v4(rng);
    let node_endpoint = json!({
        "address": net::ipv4_private(rng),
        "userPort": numeric::int_range(rng, 0, 65535),
        "fabricPort": numeric::int_range(rng, 0, 65535),
        "roles": collection::dict(rng, 3, ScalarKind::Text),
        "startTime": numeric::int_range(rng, 0, 100),
        "provisionId": uuid::uuid_v4(rng),
        "maxDirectMemory": numeric::int_range(rng, 0, 100),
        "nodeTag": net::slug(rng),
        "jobsUri": net::uri(rng),
    });

    let acceleration_details = text::text(rng, text::DEFAULT_TEXT_CHARS);
    let snowflake_details = text::text(rng, text::DEFAULT_TEXT_CHARS);
    let extra_info = json!([{
        "name": text::person_name(rng),
        "data": text::text(rng, text::DEFAULT_TEXT_CHARS),
    }]);
    let completed = numeric::boolean(rng);

    json!({
        "jobId": job_id,
        "jobState": job_state,
        "version": SCHEMA_VERSION,
        "jobInfo": job_info,
        "jobStats": job_stats,
        "jobDetails": Value::Object(job_details),
        "attemptReason": attempt_reason,
        "attemptId": attempt_id,
        "nodeEndpoint": node_endpoint,
        "accelerationDetails": acceleration_details,
        "snowFlakeDetails": snowflake_details,
        "extraInfo": extra_info,
        "completed": completed,
    })
}

fn job_info<R: Rng>(rng: &mut R) -> Value {
    let mut info = Map::new();
    let mut put = |key: &str, value: Value| {
        info.insert(key.to_string(), value);
    };

    put("sql", text::text(rng, text::DEFAULT_TEXT_CHARS).into());
    put("requestType", (*pick(rng, REQUEST_TYPES)).into());
    put("client", text::random_string(rng).into());
    put("user", text::person_name(rng).into());
    let start_time = numeric::int(rng);
    let end_time = start_time + JOB_DURATION;
    put("startTime", start_time.into());
    put("endTime", end_time.into());
    put("dataset", path::file_path(rng, 3).into());
    put("datasetVersion", text::random_string(rng).into());
    put("space", text::random_string(rng).into());
    put("queueName", (*pick(rng, QUEUE_NAMES)).into());
    put("duration", (end_time - start_time).into());
    put("queryType", (*pick(rng, QUERY_TYPES)).into());
    put("appId", text::random_string(rng).into());
    put("failureInfo", text::text(rng, text::DEFAULT_TEXT_CHARS).into());
    put("fieldOrigins", json!([{}]));
    put("joins", json!([{}]));
    put("resultMetadata", json!([{}]));
    put("acceleration", json!({}));
    put("grandparents", dataset_refs(rng, 1));
    put("parentDataset", dataset_refs(rng, 2));
    put("allDatasets", dataset_refs(rng, 3));
    put("downloadInfo", json!({}));
    put("description", text::text(rng, text::DEFAULT_TEXT_CHARS).into());
    put("materializationFor", json!({}));
    put("originalCost", numeric::float(rng).into());
    put("partitions", collection::list(rng, 3));
    put("scanPaths", collection::list(rng, 3));
    put("detailedFailureInfo", collection::dict(rng, 3, ScalarKind::Any));
    put("joinAnalysis", collection::dict(rng, 3, ScalarKind::Any));
    put("context", collection::list(rng, 3));
    put("resourceSchedulingInfo", collection::dict(rng, 3, ScalarKind::Any));
    put("outputTable", collection::list(rng, 3));
    put("cancellationInfo", collection::dict(rng, 3, ScalarKind::Any));
    put("spillJobDetails", collection::dict(rng, 3, ScalarKind::Any));
    put("batchSchema", text::random_string(rng).into());
    put("commandPoolWaitMillis", numeric::int_range(rng, 0, 100).into());

    Value::Object(info)
}

/// Three `{datasetPath, datasetType}` references whose paths have `depth` directories.
fn dataset_refs<R: Rng>(rng: &mut R, depth: usize) -> Value {
    let refs: Vec<Value> = (0..3)
        .map(|_| {
            json!({
                "datasetPath": path::dataset_path(rng, depth),
                "datasetType": *pick(rng, DATASET_TYPES),
            })
        })
        .collect();
    Value::Array(refs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use record_core::{RecordTransform, ServiceKind, ServiceTransform};

    #[test]
    fn test_job_shape() {
        let mut rng = StdRng::seed_from_u64(4321);
        let job = generate_job(&mut rng);

        assert!(job["jobId"].is_string());
        assert!(JOB_STATES.contains(&job["jobState"].as_str().unwrap()));
        assert_eq!(job["version"], json!(1));

        let info = &job["jobInfo"];
        let start = info["startTime"].as_i64().unwrap();
        assert_eq!(info["endTime"].as_i64().unwrap(), start + JOB_DURATION);
        assert_eq!(info["duration"].as_i64().unwrap(), JOB_DURATION);
        assert_eq!(info["allDatasets"].as_array().unwrap().len(), 3);
        assert_eq!(
            info["parentDataset"][0]["datasetPath"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert_eq!(job["jobDetails"]["topOperations"], json!([{}]));
    }

    #[test]
    fn test_job_is_projectable() {
        let mut rng = StdRng::seed_from_u64(1);
        let job = generate_job(&mut rng);
        let transform = ServiceTransform::for_service(ServiceKind::Job).unwrap();
        let out = transform
            .transform(job.as_object().unwrap().clone())
            .unwrap();
        assert_eq!(out["jobId"], job["jobId"]);
        assert!(out.contains_key("jobResult"));
    }

    #[test]
    fn test_job_deterministic() {
        let a = generate_job(&mut StdRng::seed_from_u64(9));
        let b = generate_job(&mut StdRng::seed_from_u64(9));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
