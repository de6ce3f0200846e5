//! Command-line interface for ycsb-loader
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 10k fake jobs into jobs_10000.json
//! ycsb-loader generate --service-name job -n 10000 --seed 4321
//!
//! # Namespaces (at least the fixed 10x30 entity path tree)
//! ycsb-loader generate --service-name namespace -n 500
//!
//! # Give namespaces unique numbered entity paths
//! ycsb-loader rekey-namespaces \
//!   --input-filename namespaces_500.json \
//!   --output-filename namespaces_500_rekeyed.json
//! ```
//!
//! ## Transform
//! ```bash
//! # Writes jobs_10000_converted_job_spanner.json
//! ycsb-loader transform \
//!   --input-file-path jobs_10000.json \
//!   --service-name job \
//!   --database-name spanner \
//!   --write-buffer-flush-size 100
//! ```
//!
//! ## Load
//! ```bash
//! ycsb-loader load mongodb \
//!   --mongodb-connection-string mongodb://localhost:27017 \
//!   --mongodb-database dremio-perf-test \
//!   --filename jobs_10000_converted_job_mongo.json \
//!   --service-name job --table-name jobs
//!
//! ycsb-loader load spanner --spanner-project my-project \
//!   --filename jobs_10000_converted_job_spanner.json --service-name job
//!
//! ycsb-loader load firestore --firestore-project my-project \
//!   --filename namespaces_500_converted_namespace_firestore.json \
//!   --service-name namespace
//! ```

use anyhow::Context;
use array_rewriter::{rewrite_service_file, RewriterConfig, TransformArgs};
use clap::{Parser, Subcommand};
use loader_firestore::{FirestoreConfig, FirestoreLoadArgs, FirestoreSink};
use loader_mongodb::{MongoDBLoadArgs, MongoSink};
use loader_spanner::{SpannerConfig, SpannerLoadArgs, SpannerSink};
use record_generator::{default_output_path, rekey_namespaces, ArrayFilePopulator, GenerateArgs, RekeyArgs};
use tracing_subscriber::EnvFilter;
use ycsb_loader::{load_file, target_name};

#[derive(Parser)]
#[command(name = "ycsb-loader")]
#[command(about = "Generate, reshape and bulk-load YCSB benchmark records")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a file of fake job or namespace records
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Reshape a record file into a database layout
    Transform {
        #[command(flatten)]
        args: TransformArgs,
    },

    /// Replace namespace entity path keys with unique deterministic paths
    RekeyNamespaces {
        #[command(flatten)]
        args: RekeyArgs,
    },

    /// Batch-insert a record file into a backing store
    Load {
        #[command(subcommand)]
        store: LoadTarget,
    },
}

/// Backing store to load records into
#[derive(Subcommand)]
enum LoadTarget {
    /// Load into MongoDB with insert_many
    #[command(name = "mongodb")]
    MongoDB {
        #[command(flatten)]
        args: MongoDBLoadArgs,
    },
    /// Load into Cloud Spanner with one insert commit per batch
    #[command(name = "spanner")]
    Spanner {
        #[command(flatten)]
        args: SpannerLoadArgs,
    },
    /// Load into Firestore with one batched commit per batch
    #[command(name = "firestore")]
    Firestore {
        #[command(flatten)]
        args: FirestoreLoadArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args)?,
        Commands::Transform { args } => run_transform(args)?,
        Commands::RekeyNamespaces { args } => run_rekey(args)?,
        Commands::Load { store } => run_load(store).await?,
    }

    Ok(())
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(args.service_name, args.count));

    let metrics = ArrayFilePopulator::new(args.seed)
        .with_flush_size(args.write_buffer_flush_size)
        .populate(args.service_name, &output, args.count)
        .with_context(|| format!("Failed to generate {} records into {output:?}", args.service_name))?;

    tracing::info!(
        "Generated {}: {} records in {:?}",
        output.display(),
        metrics.records_written,
        metrics.total_duration
    );
    Ok(())
}

fn run_transform(args: TransformArgs) -> anyhow::Result<()> {
    let config = RewriterConfig::from_args(&args).context("Invalid transform configuration")?;

    let metrics = rewrite_service_file(&config).with_context(|| {
        format!(
            "Failed to transform {:?} for service {}",
            config.input_path, config.service
        )
    })?;

    tracing::info!(
        "Transformed {} records into {}",
        metrics.records_written,
        config.output_path.display()
    );
    Ok(())
}

fn run_rekey(args: RekeyArgs) -> anyhow::Result<()> {
    let metrics = rekey_namespaces(
        &args.input_filename,
        &args.output_filename,
        args.seed,
        args.write_buffer_flush_size,
    )
    .with_context(|| format!("Failed to re-key namespaces from {:?}", args.input_filename))?;

    tracing::info!(
        "Re-keyed {} namespace records into {}",
        metrics.records_rekeyed,
        args.output_filename.display()
    );
    Ok(())
}

async fn run_load(store: LoadTarget) -> anyhow::Result<()> {
    match store {
        LoadTarget::MongoDB { args } => {
            let service = args.common.service_name;
            let sink = MongoSink::connect(&args.mongodb_connection_string, &args.mongodb_database, service)
                .await
                .context("Failed to connect to MongoDB")?
                .with_record_id(args.use_record_id);

            let default_target = loader_mongodb::default_collection(service);
            if args.drop_collection {
                let collection = target_name(&args.common, default_target);
                sink.drop_collection(&collection)
                    .await
                    .with_context(|| format!("Failed to drop collection '{collection}'"))?;
            }

            let (_, result) = load_file(sink, &args.common, default_target).await;
            result?;
        }
        LoadTarget::Spanner { args } => {
            let service = args.common.service_name;
            let config = SpannerConfig {
                endpoint: args.spanner_endpoint.clone(),
                project: args.spanner_project.clone(),
                instance: args.spanner_instance.clone(),
                database: args.spanner_database.clone(),
                access_token: args.access_token.clone(),
            };
            let sink = SpannerSink::connect(&config, service)
                .await
                .with_context(|| format!("Failed to open a session on {}", config.database_path()))?;

            let (sink, result) =
                load_file(sink, &args.common, loader_spanner::default_table(service)).await;
            // the session is released even when a chunk failed
            sink.close().await;
            result?;
        }
        LoadTarget::Firestore { args } => {
            let service = args.common.service_name;
            let config = FirestoreConfig {
                endpoint: args.firestore_endpoint.clone(),
                project: args.firestore_project.clone(),
                access_token: args.access_token.clone(),
            };
            let sink = FirestoreSink::new(&config, service).context("Failed to build Firestore client")?;

            let (_, result) =
                load_file(sink, &args.common, loader_firestore::default_collection(service)).await;
            result?;
        }
    }
    Ok(())
}
