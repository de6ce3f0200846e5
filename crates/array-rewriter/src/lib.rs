//! Streaming JSON array rewriter.
//!
//! Reads an array file laid out one element per line, runs every element
//! through a [`RecordTransform`](record_core::RecordTransform) and writes the
//! results in the same layout. Memory use is bounded by the write buffer
//! flush size, not by the size of the file.
//!
//! ```text
//! [                        [
//! {source record},   ──►   {projected + encoded},
//! {source record}          {projected + encoded}
//! ]                        ]
//! ```
//!
//! Any decode or transform failure aborts the run. The partial output file
//! is left behind and should be treated as invalid.

pub mod args;
pub mod config;
pub mod error;
pub mod rewriter;

pub use args::{TransformArgs, DEFAULT_WRITE_BUFFER_FLUSH_SIZE};
pub use config::{converted_output_path, RewriterConfig, MIN_FLUSH_SIZE};
pub use error::RewriteError;
pub use rewriter::{rewrite_service_file, ArrayRewriter, RewriteMetrics};
