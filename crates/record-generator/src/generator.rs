//! Seeded generator for job and namespace records.

use crate::job::generate_job;
use crate::namespace::generate_namespace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 4321;

/// Produces deterministic fake records.
///
/// All randomness comes from the owned `StdRng`; two generators built with
/// the same seed produce identical records in the same order.
pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn next_job(&mut self) -> Value {
        generate_job(&mut self.rng)
    }

    pub fn next_namespace(&mut self, entity_path_key: &str) -> Value {
        generate_namespace(&mut self.rng, entity_path_key)
    }

    /// Lazily generate `count` job records.
    pub fn jobs(&mut self, count: u64) -> JobIterator<'_> {
        JobIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates job records.
pub struct JobIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for JobIterator<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_job())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for JobIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = RecordGenerator::new(42);
        let mut gen2 = RecordGenerator::new(42);

        for _ in 0..3 {
            assert_eq!(gen1.next_job(), gen2.next_job());
        }
        assert_eq!(gen1.next_namespace("/a"), gen2.next_namespace("/a"));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = RecordGenerator::new(1);
        let mut gen2 = RecordGenerator::new(2);
        assert_ne!(gen1.next_job()["jobId"], gen2.next_job()["jobId"]);
    }

    #[test]
    fn test_jobs_iterator() {
        let mut generator = RecordGenerator::new(42);
        let jobs = generator.jobs(5);
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs.count(), 5);
    }

    #[test]
    fn test_jobs_iterator_continues_the_sequence() {
        let mut streamed = RecordGenerator::new(7);
        let mut stepped = RecordGenerator::new(7);

        let first: Vec<Value> = streamed.jobs(2).collect();
        assert_eq!(first[0], stepped.next_job());
        assert_eq!(first[1], stepped.next_job());
        assert_eq!(streamed.next_job(), stepped.next_job());
    }
}
