//! Loosely typed lists and maps of scalar values.

use super::{numeric, text};
use rand::Rng;
use serde_json::{Map, Value};

/// Which scalar values a collection may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Any of string, integer, float, boolean.
    Any,
    Int,
    Text,
}

pub fn scalar<R: Rng>(rng: &mut R, kind: ScalarKind) -> Value {
    match kind {
        ScalarKind::Int => Value::from(numeric::int(rng)),
        ScalarKind::Text => Value::from(text::word(rng)),
        ScalarKind::Any => match rng.random_range(0..4) {
            0 => Value::from(text::random_string(rng)),
            1 => Value::from(numeric::int(rng)),
            2 => Value::from(numeric::float(rng)),
            _ => Value::from(numeric::boolean(rng)),
        },
    }
}

/// A list of `len` scalars.
pub fn list<R: Rng>(rng: &mut R, len: usize) -> Value {
    Value::Array((0..len).map(|_| scalar(rng, ScalarKind::Any)).collect())
}

/// A map of up to `len` word keys to scalars of `kind`.
///
/// Keys are drawn from a word list, so duplicates collapse and the map may
/// hold fewer than `len` entries.
pub fn dict<R: Rng>(rng: &mut R, len: usize, kind: ScalarKind) -> Value {
    let mut map = Map::new();
    for _ in 0..len {
        let key = text::word(rng).to_string();
        map.insert(key, scalar(rng, kind));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_list_len() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(list(&mut rng, 3).as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_dict_value_kinds() {
        let mut rng = StdRng::seed_from_u64(42);
        let ints = dict(&mut rng, 5, ScalarKind::Int);
        let ints = ints.as_object().unwrap();
        assert!(!ints.is_empty() && ints.len() <= 5);
        assert!(ints.values().all(Value::is_i64));

        let strs = dict(&mut rng, 3, ScalarKind::Text);
        assert!(strs.as_object().unwrap().values().all(Value::is_string));
    }
}
