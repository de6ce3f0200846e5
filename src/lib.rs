//! ycsb-loader: benchmark data preparation for YCSB-style workloads.
//!
//! The workspace is split into focused crates, re-exported here:
//!
//! - [`record_core`] - key paths, projection, byte encoding, array file format
//! - [`record_generator`] - seeded fake job and namespace records
//! - [`array_rewriter`] - streaming reshape of record files per service
//! - [`batch_loader`] - chunked loading with progress, plus the sink seam
//!
//! The store sinks (`loader-mongodb`, `loader-spanner`, `loader-firestore`)
//! are wired up by the binary.

pub mod load;

pub use array_rewriter;
pub use batch_loader;
pub use record_core;
pub use record_generator;

pub use load::{load_file, target_name};
