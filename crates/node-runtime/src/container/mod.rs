//! # Node Container
//!
//! Holds the long-lived resources of the node and injects them into the
//! components that need them. Nothing here is global: the store handle is
//! created once and passed explicitly to the ledger writer.

pub mod config;

pub use config::{ConfigError, NodeConfig, StorageConfig};

use anyhow::{Context, Result};
use api_gateway::ApiGatewayService;
use block_ledger::{LedgerApi, LedgerService, SqliteStore};
use std::sync::Arc;
use tracing::info;

/// Initialized node resources.
pub struct NodeContainer {
    /// Effective configuration.
    pub config: NodeConfig,
    /// Shared store handle.
    pub store: SqliteStore,
    /// Ledger writer over `store`.
    pub ledger: Arc<LedgerService>,
}

impl NodeContainer {
    /// Open the store and build the ledger writer.
    ///
    /// Fails if the store cannot be opened; callers must not start serving
    /// traffic in that case.
    pub fn new(config: NodeConfig) -> Result<Self> {
        let location = config.storage.location();
        info!(location = %location, "Initializing block store");

        let store = SqliteStore::open(&location).context("Failed to initialize block store")?;
        let ledger = Arc::new(LedgerService::new(store.clone()));

        Ok(Self {
            config,
            store,
            ledger,
        })
    }

    /// Build the gateway with the ledger injected.
    pub fn gateway(&self) -> Result<ApiGatewayService> {
        let ledger: Arc<dyn LedgerApi> = self.ledger.clone();
        ApiGatewayService::new(self.config.gateway.clone(), ledger)
            .context("Failed to create API gateway")
    }
}
