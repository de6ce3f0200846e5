//! CLI argument definitions for the Firestore loader.

use batch_loader::CommonLoadArgs;
use clap::Args;

/// Firestore-specific load arguments.
#[derive(Args, Clone, Debug)]
pub struct FirestoreLoadArgs {
    /// Firestore REST endpoint (an emulator's HTTP port works too)
    #[arg(
        long,
        env = "FIRESTORE_ENDPOINT",
        default_value = "https://firestore.googleapis.com"
    )]
    pub firestore_endpoint: String,

    /// GCP project id
    #[arg(long, env = "FIRESTORE_PROJECT")]
    pub firestore_project: String,

    /// OAuth2 bearer token (omit for the emulator)
    #[arg(long, env = "GOOGLE_OAUTH_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[command(flatten)]
    pub common: CommonLoadArgs,
}
