//! Fake record generator for the ycsb-loader toolkit.
//!
//! Produces schema-shaped "job" and "namespace" records from a seeded
//! `StdRng`, so a given seed always yields the same file.
//!
//! # Architecture
//!
//! ```text
//!  seed ──► RecordGenerator (StdRng) ──► generate_job / generate_namespace
//!                                               │
//!                       EntityPathPlan ─────────┤
//!                                               ▼
//!                                   ArrayFilePopulator ──► [\n{..},\n{..}\n]
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::new(42);
//! let job = generator.next_job();
//! assert!(job["jobId"].is_string());
//! ```

pub mod args;
pub mod error;
pub mod generator;
pub mod generators;
pub mod job;
pub mod namespace;
pub mod populator;
pub mod rekey;

pub use args::{GenerateArgs, RekeyArgs};
pub use error::GeneratorError;
pub use generator::{JobIterator, RecordGenerator, DEFAULT_SEED};
pub use job::generate_job;
pub use namespace::{generate_entity_paths, generate_namespace, EntityPathPlan, RandomPathStyle};
pub use populator::{default_output_path, ArrayFilePopulator, GenerateMetrics};
pub use rekey::{rekey_namespaces, RekeyMetrics};
