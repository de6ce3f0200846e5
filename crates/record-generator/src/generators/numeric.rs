//! Numeric value generators.

use rand::Rng;

/// Upper bound used when no explicit range is given.
pub const DEFAULT_INT_MAX: i64 = 9999;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Generate a random non-negative integer below [`DEFAULT_INT_MAX`].
pub fn int<R: Rng>(rng: &mut R) -> i64 {
    int_range(rng, 0, DEFAULT_INT_MAX)
}

/// Generate a random float with two decimal places.
pub fn float<R: Rng>(rng: &mut R) -> f64 {
    let raw = rng.random_range(-10_000.0..10_000.0_f64);
    (raw * 100.0).round() / 100.0
}

pub fn boolean<R: Rng>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = int_range(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_float_two_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = float(&mut rng);
            assert!((-10_000.0..=10_000.0).contains(&v));
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6);
        }
    }
}
