//! File path generators.

use super::pick;
use super::text::word;
use rand::Rng;

const EXTENSIONS: &[&str] = &["csv", "json", "parquet", "txt", "avro", "orc", "xlsx"];

/// An absolute path of `depth` directories followed by a file name,
/// e.g. `/market/report/source/window.csv` for depth 3.
pub fn file_path<R: Rng>(rng: &mut R, depth: usize) -> String {
    let mut path = String::new();
    for _ in 0..depth {
        path.push('/');
        path.push_str(word(rng));
    }
    path.push('/');
    path.push_str(word(rng));
    path.push('.');
    path.push_str(*pick(rng, EXTENSIONS));
    path
}

/// The directory components of a [`file_path`], split on `/`, file name
/// dropped. The leading empty component of the absolute path is kept.
pub fn dataset_path<R: Rng>(rng: &mut R, depth: usize) -> Vec<String> {
    let path = file_path(rng, depth);
    let mut parts: Vec<String> = path.split('/').map(str::to_string).collect();
    parts.pop();
    parts
}

/// [`file_path`] with its extension removed.
pub fn file_path_stem<R: Rng>(rng: &mut R, depth: usize) -> String {
    let path = file_path(rng, depth);
    match path.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_file_path_depth() {
        let mut rng = StdRng::seed_from_u64(42);
        let path = file_path(&mut rng, 3);
        assert!(path.starts_with('/'));
        // leading empty + 3 dirs + file
        assert_eq!(path.split('/').count(), 5);
        assert!(path.contains('.'));
    }

    #[test]
    fn test_file_path_has_known_extension() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let path = file_path(&mut rng, 2);
            let (_, extension) = path.rsplit_once('.').unwrap();
            assert!(EXTENSIONS.contains(&extension));
        }
    }

    #[test]
    fn test_dataset_path() {
        let mut rng = StdRng::seed_from_u64(42);
        let parts = dataset_path(&mut rng, 2);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "");
    }

    #[test]
    fn test_file_path_stem() {
        let mut rng = StdRng::seed_from_u64(42);
        let stem = file_path_stem(&mut rng, 3);
        assert!(!stem.contains('.'));
        assert_eq!(stem.split('/').count(), 5);
    }
}
