//! Re-key namespace files onto deterministic entity paths.
//!
//! The first records receive the fixed entity path tree; the rest get a
//! random depth-3 path stem numbered `_1.txt`, `_2.txt`, ... so every key in
//! the output is unique.

use crate::error::GeneratorError;
use crate::namespace::{EntityPathPlan, RandomPathStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use record_core::{create_output, into_record, ArrayElements, ArrayWriter, ServiceKind};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Default number of records buffered before a write.
pub const DEFAULT_REKEY_FLUSH_SIZE: usize = 100;

/// Metrics from a rekey operation.
#[derive(Debug, Clone, Default)]
pub struct RekeyMetrics {
    pub records_rekeyed: u64,
    pub total_duration: Duration,
}

/// Stream `input` to `output`, replacing every `entityPathKey`.
pub fn rekey_namespaces(
    input: &Path,
    output: &Path,
    seed: u64,
    flush_size: usize,
) -> Result<RekeyMetrics, GeneratorError> {
    let start_time = Instant::now();
    let id_field = ServiceKind::Namespace.id_field();

    info!(
        "Re-keying namespace records from '{}' into '{}'",
        input.display(),
        output.display()
    );

    let reader = BufReader::new(File::open(input)?);
    let mut writer = ArrayWriter::new(BufWriter::new(create_output(output)?), flush_size)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut plan = EntityPathPlan::default_tree(RandomPathStyle::NumberedFile);
    let mut rekeyed = 0u64;

    for element in ArrayElements::new(reader) {
        let element = element?;
        let value: Value = serde_json::from_str(&element.text).map_err(|source| {
            GeneratorError::Decode {
                line: element.line,
                source,
            }
        })?;
        let mut record = into_record(value)?;

        let key = plan.next_key(&mut rng);
        record.insert(id_field.to_string(), Value::String(key));

        writer.push(serde_json::to_string(&record)?)?;
        rekeyed += 1;
    }
    writer.finish()?;

    let metrics = RekeyMetrics {
        records_rekeyed: rekeyed,
        total_duration: start_time.elapsed(),
    };
    info!(
        "Re-keyed {} namespace records in {:?}",
        metrics.records_rekeyed, metrics.total_duration
    );
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{generate_entity_paths, DEFAULT_NUM_FILES, DEFAULT_NUM_TABLES};
    use crate::populator::ArrayFilePopulator;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_rekey_assigns_fixed_then_numbered_paths() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("ns.json");
        let output = dir.path().join("ns_rekeyed.json");

        let fixed = generate_entity_paths(DEFAULT_NUM_TABLES, DEFAULT_NUM_FILES);
        let count = fixed.len() as u64 + 5;
        ArrayFilePopulator::new(1)
            .populate(ServiceKind::Namespace, &input, count)
            .unwrap();

        let metrics = rekey_namespaces(&input, &output, 4321, 50).unwrap();
        assert_eq!(metrics.records_rekeyed, count);

        let before: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&input).unwrap()).unwrap();
        let after: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(after.len(), before.len());

        let keys: Vec<&str> = after
            .iter()
            .map(|ns| ns["entityPathKey"].as_str().unwrap())
            .collect();
        assert_eq!(&keys[..fixed.len()], fixed.as_slice());
        assert!(keys[fixed.len()].ends_with("_1.txt"));
        assert!(keys.last().unwrap().ends_with("_5.txt"));
        assert_eq!(keys.iter().collect::<HashSet<_>>().len(), keys.len());

        // everything except the key is untouched
        assert_eq!(after[0]["container"], before[0]["container"]);
    }

    #[test]
    fn test_rekey_rejects_non_object_elements() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bad.json");
        let output = dir.path().join("out.json");
        std::fs::write(&input, "[\n[1, 2]\n]\n").unwrap();

        let err = rekey_namespaces(&input, &output, 1, 10).unwrap_err();
        assert!(matches!(err, GeneratorError::Transform(_)));
    }
}
