//! MongoDB connection management and batch insertion.
//!
//! # Security Features
//! - Connection string credentials are never logged
//! - Connection setup is bounded by the configured timeout

use crate::Result;
use crate::config::{SeedConfig, validate_connection_url};
use crate::error::{SeedError, redact_database_url};
use crate::models::Rider;
use crate::sink::DocumentSink;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

/// Lower bound for the pool's upper limit, so a large minimum never exceeds it.
pub const DEFAULT_MAX_POOL_SIZE: u32 = 100;

/// Sink writing rider batches into a MongoDB collection.
#[derive(Debug, Clone)]
pub struct MongoSink {
    client: Client,
    collection: Collection<Rider>,
    target: String,
}

impl MongoSink {
    /// Connects to MongoDB and verifies the server is reachable.
    ///
    /// The driver connects lazily, so a `ping` is issued here to surface bad
    /// URLs and unreachable servers before any document is generated.
    ///
    /// # Errors
    /// Returns error if:
    /// - The connection string is malformed
    /// - Client creation fails
    /// - The server does not answer within the connect timeout
    pub async fn connect(config: &SeedConfig) -> Result<Self> {
        let client_options = Self::create_client_options(config).await?;

        let client = Client::with_options(client_options)
            .map_err(|e| SeedError::connection_failed(&config.connection_url, e))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| SeedError::connection_failed(&config.connection_url, e))?;

        tracing::debug!(
            "Connected to {}",
            redact_database_url(&config.connection_url)
        );

        let collection = client
            .database(&config.database)
            .collection::<Rider>(&config.collection);

        Ok(Self {
            client,
            collection,
            target: describe_target(config),
        })
    }

    /// Builds MongoDB client options from the run configuration.
    ///
    /// # Errors
    /// Returns a configuration error if the URL is rejected by the driver
    pub async fn create_client_options(config: &SeedConfig) -> Result<ClientOptions> {
        validate_connection_url(&config.connection_url)?;

        let mut options = ClientOptions::parse(&config.connection_url)
            .await
            .map_err(|e| {
                SeedError::configuration(format!(
                    "Failed to parse MongoDB connection options for {}: {}",
                    redact_database_url(&config.connection_url),
                    e
                ))
            })?;

        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        options.min_pool_size = Some(config.min_pool_size);
        let max_pool = options.max_pool_size.unwrap_or(DEFAULT_MAX_POOL_SIZE);
        options.max_pool_size = Some(max_pool.max(config.min_pool_size));

        options.app_name = Some(format!("riderseed-{}", env!("CARGO_PKG_VERSION")));

        Ok(options)
    }

    /// Gets the MongoDB client reference.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Gets the target collection.
    pub fn collection(&self) -> &Collection<Rider> {
        &self.collection
    }
}

/// `database.collection at <redacted url>`, used in log lines and errors.
fn describe_target(config: &SeedConfig) -> String {
    format!(
        "{}.{} at {}",
        config.database,
        config.collection,
        redact_database_url(&config.connection_url)
    )
}

#[async_trait]
impl DocumentSink for MongoSink {
    async fn insert_batch(&mut self, batch: Vec<Rider>) -> Result<u64> {
        let len = batch.len();
        let result = self.collection.insert_many(batch).await.map_err(|e| {
            SeedError::insert_failed(
                format!("inserting {} documents into {}", len, self.target),
                e,
            )
        })?;

        Ok(u64::try_from(result.inserted_ids.len()).unwrap_or(u64::MAX))
    }

    fn describe(&self) -> String {
        self.target.clone()
    }
}
