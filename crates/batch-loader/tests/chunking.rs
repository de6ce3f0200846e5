//! Chunk partitioning tests against an in-memory sink.

use async_trait::async_trait;
use batch_loader::{BatchLoader, BatchSink, LoaderError};
use record_core::Record;
use serde_json::json;
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("chunk {0} rejected")]
struct Rejected(usize);

/// Records every chunk; optionally rejects the chunk at `fail_at`.
struct RecordingSink {
    chunks: Mutex<Vec<(String, Vec<i64>)>>,
    fail_at: Option<usize>,
    max: usize,
}

impl RecordingSink {
    fn new(max: usize) -> Self {
        Self {
            chunks: Mutex::new(Vec::new()),
            fail_at: None,
            max,
        }
    }

    fn failing_at(max: usize, chunk: usize) -> Self {
        Self {
            fail_at: Some(chunk),
            ..Self::new(max)
        }
    }

    fn chunks(&self) -> Vec<(String, Vec<i64>)> {
        self.chunks.lock().unwrap().clone()
    }
}

#[async_trait]
impl BatchSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn max_batch_size(&self) -> usize {
        self.max
    }

    fn default_batch_size(&self) -> usize {
        3
    }

    async fn write_batch(&self, target: &str, records: &[Record]) -> Result<u64, LoaderError> {
        let mut chunks = self.chunks.lock().unwrap();
        if self.fail_at == Some(chunks.len()) {
            return Err(LoaderError::store("recording", Rejected(chunks.len())));
        }
        let ids = records.iter().map(|r| r["n"].as_i64().unwrap()).collect();
        chunks.push((target.to_string(), ids));
        Ok(records.len() as u64)
    }
}

fn records(count: i64) -> Vec<Record> {
    (0..count)
        .map(|n| json!({ "n": n }).as_object().unwrap().clone())
        .collect()
}

#[tokio::test]
async fn test_chunks_are_consecutive_and_bounded() {
    for (count, batch) in [(0, 4), (1, 4), (7, 4), (8, 4), (9, 4), (5, 1), (5, 10)] {
        let loader = BatchLoader::new(RecordingSink::new(10))
            .with_batch_size(batch)
            .unwrap();
        let input = records(count);

        let metrics = loader.load("jobs", &input).await.unwrap();

        let chunks = loader.sink().chunks();
        let expected_chunks = (count as usize).div_ceil(batch);
        assert_eq!(chunks.len(), expected_chunks, "count={count} batch={batch}");
        assert_eq!(metrics.batch_count, expected_chunks as u64);
        assert_eq!(metrics.records_inserted, count as u64);
        assert!(chunks.iter().all(|(t, ids)| t == "jobs" && ids.len() <= batch));

        let flattened: Vec<i64> = chunks.into_iter().flat_map(|(_, ids)| ids).collect();
        assert_eq!(flattened, (0..count).collect::<Vec<_>>());
    }
}

#[tokio::test]
async fn test_default_batch_size_comes_from_sink() {
    let loader = BatchLoader::new(RecordingSink::new(10));
    assert_eq!(loader.batch_size(), 3);

    loader.load("t", &records(7)).await.unwrap();
    let sizes: Vec<usize> = loader.sink().chunks().iter().map(|(_, ids)| ids.len()).collect();
    assert_eq!(sizes, vec![3, 3, 1]);
}

#[tokio::test]
async fn test_failed_chunk_stops_the_run() {
    let loader = BatchLoader::new(RecordingSink::failing_at(10, 1))
        .with_batch_size(2)
        .unwrap();

    let err = loader.load("jobs", &records(10)).await.unwrap_err();

    assert!(matches!(err, LoaderError::Store { store: "recording", .. }));
    // only the chunk before the failure was accepted
    assert_eq!(loader.sink().chunks().len(), 1);
}

#[test]
fn test_batch_size_bounds() {
    for bad in [0, 11] {
        let err = BatchLoader::new(RecordingSink::new(10))
            .with_batch_size(bad)
            .err()
            .unwrap();
        assert!(matches!(err, LoaderError::InvalidConfig(_)));
    }
    assert!(BatchLoader::new(RecordingSink::new(10)).with_batch_size(10).is_ok());
}

#[test]
fn test_rejected_batch_size_keeps_previous() {
    let mut loader = BatchLoader::new(RecordingSink::new(10));
    loader.set_batch_size(4).unwrap();

    assert!(loader.set_batch_size(11).is_err());
    assert_eq!(loader.batch_size(), 4);

    let sink = loader.into_sink();
    assert!(sink.chunks().is_empty());
}
