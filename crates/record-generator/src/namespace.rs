//! Fake namespace records and the entity paths they are keyed by.

use crate::generators::collection::{self, ScalarKind};
use crate::generators::{net, path, pick, text, uuid};
use rand::Rng;
use serde_json::{json, Value};
use std::collections::BTreeSet;

pub const ENTITY_TYPES: &[&str] = &["SPACE", "SOURCE", "HOME", "FOLDER", "DATASET"];

/// Default number of tables in the fixed entity path tree.
pub const DEFAULT_NUM_TABLES: usize = 10;

/// Default number of files per table in the fixed entity path tree.
pub const DEFAULT_NUM_FILES: usize = 30;

/// Generate one namespace record keyed by `entity_path_key`.
pub fn generate_namespace<R: Rng>(rng: &mut R, entity_path_key: &str) -> Value {
    let full_path = path::file_path(rng, 3);
    let full_path_list: Vec<&str> = full_path.split('/').collect();

    let id = text::random_string(rng);
    let child_ids: Vec<String> = (0..2).map(|_| text::random_string(rng)).collect();
    let container_uuid = uuid::uuid_v4(rng);
    let entity_type = *pick(rng, ENTITY_TYPES);
    let entity_id = text::random_string(rng);
    let config = collection::dict(rng, 5, ScalarKind::Text);
    let attributes: Vec<Value> = (0..5)
        .map(|_| {
            json!({
                "typeUrl": net::uri(rng),
                "value": text::text(rng, text::DEFAULT_TEXT_CHARS),
            })
        })
        .collect();

    json!({
        "entityPathKey": entity_path_key,
        "id": id,
        "childIds": child_ids,
        "container": {
            "uuid": container_uuid,
            "type": {
                "entityType": entity_type,
                "entityId": entity_id,
            },
            "fullPathList": full_path_list,
            "config": config,
        },
        "attributes": attributes,
    })
}

/// Every prefix of `/mysource/schema/table{i}/file{j}.txt`, deduplicated and sorted.
///
/// For one table and one file this yields `/mysource`, `/mysource/schema`,
/// `/mysource/schema/table1` and `/mysource/schema/table1/file1.txt`.
pub fn generate_entity_paths(num_tables: usize, num_files: usize) -> Vec<String> {
    let mut paths = BTreeSet::new();
    for table in 1..=num_tables {
        for file in 1..=num_files {
            let full = format!("/mysource/schema/table{table}/file{file}.txt");
            let mut prefix = String::new();
            for segment in full.split('/').skip(1) {
                prefix.push('/');
                prefix.push_str(segment);
                paths.insert(prefix.clone());
            }
        }
    }
    paths.into_iter().collect()
}

/// Supplies entity path keys: the fixed tree first, then random paths.
pub struct EntityPathPlan {
    fixed: Vec<String>,
    next: usize,
    style: RandomPathStyle,
}

/// How keys beyond the fixed tree are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomPathStyle {
    /// A random file path of depth 2 to 4.
    FilePath,
    /// A depth-3 file path stem suffixed with `_{n}.txt`, unique by construction.
    NumberedFile,
}

impl EntityPathPlan {
    pub fn new(fixed: Vec<String>, style: RandomPathStyle) -> Self {
        Self {
            fixed,
            next: 0,
            style,
        }
    }

    /// Plan over the default 10x30 tree.
    pub fn default_tree(style: RandomPathStyle) -> Self {
        Self::new(
            generate_entity_paths(DEFAULT_NUM_TABLES, DEFAULT_NUM_FILES),
            style,
        )
    }

    pub fn fixed_len(&self) -> usize {
        self.fixed.len()
    }

    /// Produce the next key.
    pub fn next_key<R: Rng>(&mut self, rng: &mut R) -> String {
        let position = self.next;
        self.next += 1;

        if let Some(fixed) = self.fixed.get(position) {
            return fixed.clone();
        }

        let extra = position - self.fixed.len();
        match self.style {
            RandomPathStyle::FilePath => {
                let depth = *pick(rng, &[2usize, 3, 4]);
                path::file_path(rng, depth)
            }
            RandomPathStyle::NumberedFile => {
                format!("{}_{}.txt", path::file_path_stem(rng, 3), extra + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_entity_paths_single() {
        let paths = generate_entity_paths(1, 1);
        assert_eq!(
            paths,
            vec![
                "/mysource",
                "/mysource/schema",
                "/mysource/schema/table1",
                "/mysource/schema/table1/file1.txt",
            ]
        );
    }

    #[test]
    fn test_entity_paths_default_tree_size() {
        // 2 shared prefixes + 10 tables + 300 files
        let paths = generate_entity_paths(DEFAULT_NUM_TABLES, DEFAULT_NUM_FILES);
        assert_eq!(paths.len(), 312);
    }

    #[test]
    fn test_plan_fixed_then_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut plan = EntityPathPlan::new(generate_entity_paths(1, 1), RandomPathStyle::NumberedFile);

        let keys: Vec<String> = (0..6).map(|_| plan.next_key(&mut rng)).collect();

        assert_eq!(keys[0], "/mysource");
        assert_eq!(keys[3], "/mysource/schema/table1/file1.txt");
        assert!(keys[4].ends_with("_1.txt"));
        assert!(keys[5].ends_with("_2.txt"));
    }

    #[test]
    fn test_namespace_shape() {
        let mut rng = StdRng::seed_from_u64(4321);
        let ns = generate_namespace(&mut rng, "/mysource");

        assert_eq!(ns["entityPathKey"], json!("/mysource"));
        assert_eq!(ns["childIds"].as_array().unwrap().len(), 2);
        assert!(ENTITY_TYPES.contains(&ns["container"]["type"]["entityType"].as_str().unwrap()));
        assert_eq!(ns["container"]["fullPathList"][0], json!(""));
        assert_eq!(ns["attributes"].as_array().unwrap().len(), 5);
    }
}
