//! Cloud Spanner sink for the batch loader.
//!
//! Talks to the Spanner REST API directly: one session per run and one
//! single-use read-write commit carrying an `insert` mutation per chunk, so
//! every chunk is applied atomically.
//!
//! Rewritten records map onto fixed column layouts ([`TableLayout`]):
//!
//! | service | default table | columns |
//! |---|---|---|
//! | job | `jobs` | 16, `jobResult` as BYTES |
//! | namespace | `dac_namespace` | 4, `container` as BYTES |

pub mod args;
pub mod client;
pub mod error;
pub mod layout;
pub mod sink;

pub use args::SpannerLoadArgs;
pub use client::{insert_commit_body, SpannerClient, SpannerConfig};
pub use error::SpannerLoaderError;
pub use layout::{default_table, Column, ColumnKind, TableLayout};
pub use sink::{SpannerSink, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
