//! Synthetic rider seeding tool.
//!
//! Connects to MongoDB, generates randomized rider documents and inserts them
//! in batches. Any failure ends the process with a non-zero exit code.

use anyhow::Context;
use clap::{Args, Parser};
use riderseed_core::config::{
    DEFAULT_BATCH_SIZE, DEFAULT_COLLECTION, DEFAULT_CONNECT_TIMEOUT, DEFAULT_CONNECTION_URL,
    DEFAULT_DATABASE, DEFAULT_DOCUMENTS, DEFAULT_MIN_POOL_SIZE,
};
use riderseed_core::{
    DocumentSink, MemorySink, MongoSink, RiderGenerator, SeedConfig, Seeder, init_logging,
};
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(name = "riderseed")]
#[command(about = "Populate a MongoDB collection with synthetic rider documents")]
#[command(version)]
#[command(long_about = "
riderseed - synthetic rider documents for testing and load generation

Each rider carries a profile, a current location and up to nine embedded
rides with origin and destination coordinates. Documents are generated
sequentially and inserted with one insert_many call per batch. The first
connection or insert error stops the run.

EXAMPLES:
  riderseed
  riderseed --docs 1000 --batchsize 100
  riderseed --connectionurl mongodb://user:pass@db:27017 --database test
  riderseed --dry-run --docs 10 --seed 42 -v
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Number of documents to generate
    #[arg(
        long = "docs",
        env = "RIDERSEED_DOCS",
        default_value_t = DEFAULT_DOCUMENTS,
        help = "Number of documents to generate into the riders collection"
    )]
    pub docs: u64,

    /// Documents per insert call
    #[arg(
        long = "batchsize",
        env = "RIDERSEED_BATCH_SIZE",
        default_value_t = DEFAULT_BATCH_SIZE,
        help = "Batch size of documents to insert at a time"
    )]
    pub batch_size: usize,

    /// MongoDB connection URL
    #[arg(
        long = "connectionurl",
        env = "DATABASE_URL",
        default_value = DEFAULT_CONNECTION_URL,
        hide_env_values = true,
        help = "MongoDB connection string (credentials are redacted in logs)"
    )]
    pub connection_url: String,

    /// Target database
    #[arg(long, default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Target collection
    #[arg(long, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Minimum connection pool size
    #[arg(long, default_value_t = DEFAULT_MIN_POOL_SIZE)]
    pub min_pool_size: u32,

    /// Connection setup timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout: u64,

    /// Seed for reproducible generation
    #[arg(long, help = "Seed the generator for reproducible content")]
    pub seed: Option<u64>,

    /// Generate without connecting
    #[arg(long, help = "Generate documents in memory without connecting to MongoDB")]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, help = "Suppress all output except errors")]
    pub quiet: bool,
}

impl Cli {
    /// Converts parsed arguments into a run configuration.
    pub fn seed_config(&self) -> SeedConfig {
        let config = SeedConfig::default()
            .with_connection_url(&self.connection_url)
            .with_database(&self.database)
            .with_collection(&self.collection)
            .with_documents(self.docs)
            .with_batch_size(self.batch_size)
            .with_min_pool_size(self.min_pool_size)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout));

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    let config = cli.seed_config();
    config.validate()?;

    if let Err(e) = run(&config, cli.dry_run).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Performs one seeding run against MongoDB or, for a dry run, memory.
async fn run(config: &SeedConfig, dry_run: bool) -> anyhow::Result<()> {
    info!("Starting: {}", config);

    let generator = RiderGenerator::from_seed(config.seed);
    let mut seeder = Seeder::new(generator, config.batch_size)?;

    let mut sink: Box<dyn DocumentSink> = if dry_run {
        Box::new(MemorySink::counting())
    } else {
        let sink = MongoSink::connect(config)
            .await
            .context("could not open the target database")?;
        Box::new(sink)
    };

    if dry_run && config.documents > 0 {
        let sample = RiderGenerator::from_seed(config.seed).generate_rider();
        debug!("Sample document: {}", serde_json::to_string(&sample)?);
    }

    let report = seeder
        .run(sink.as_mut(), config.documents)
        .await
        .context("seeding aborted")?;

    info!(
        "Inserted {} documents in {} batches ({:.0} docs/s)",
        report.inserted,
        report.batches,
        report.docs_per_second()
    );
    info!("Generated {} docs!", report.requested);

    Ok(())
}
