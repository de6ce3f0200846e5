//! CLI argument definitions for the Spanner loader.

use batch_loader::CommonLoadArgs;
use clap::Args;

/// Cloud Spanner-specific load arguments.
#[derive(Args, Clone, Debug)]
pub struct SpannerLoadArgs {
    /// Spanner REST endpoint (an emulator's HTTP port works too)
    #[arg(
        long,
        env = "SPANNER_ENDPOINT",
        default_value = "https://spanner.googleapis.com"
    )]
    pub spanner_endpoint: String,

    /// GCP project id
    #[arg(long, env = "SPANNER_PROJECT")]
    pub spanner_project: String,

    /// Spanner instance id
    #[arg(long, env = "SPANNER_INSTANCE", default_value = "spandb1")]
    pub spanner_instance: String,

    /// Spanner database id
    #[arg(long, env = "SPANNER_DATABASE", default_value = "ycsb-db")]
    pub spanner_database: String,

    /// OAuth2 bearer token (omit for the emulator)
    #[arg(long, env = "GOOGLE_OAUTH_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[command(flatten)]
    pub common: CommonLoadArgs,
}
