//! Temples API server
//!
//! Reads configuration from `TEMPLES_API_CONFIG` and the environment,
//! connects to the configured store and serves until SIGINT or SIGTERM.

use anyhow::{Context, Result};
use std::sync::Arc;
use temples::config::{AppConfig, StorageBackend};
use temples::core::store::DocumentStore;
use temples::server::ServerBuilder;
use temples::storage::{InMemoryStore, MongoStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store: Arc<dyn DocumentStore> = match config.storage.backend {
        StorageBackend::MongoDb => Arc::new(
            MongoStore::connect(&config.storage.uri, config.storage.database.as_deref())
                .await
                .context("Failed to connect to MongoDB")?,
        ),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Arc::new(InMemoryStore::new())
        }
    };

    ServerBuilder::new()
        .with_shared_store(store)
        .serve(&config.server.address())
        .await
}
