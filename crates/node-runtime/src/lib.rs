//! # Node Runtime Library
//!
//! Startup orchestration for the block ledger node. The `main.rs` binary is
//! a thin wrapper around [`NodeRuntime`].
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (defaults, file, environment)
//! 3. Open the block store (fatal on failure, before any socket is bound)
//! 4. Start the API gateway
//! 5. Serve until shutdown, then release the store handle

#![allow(missing_docs)]

pub mod container;

use anyhow::{Context, Result};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub use container::{ConfigError, NodeConfig, NodeContainer, StorageConfig};

/// The main node runtime.
pub struct NodeRuntime {
    /// Container with the opened store and ledger writer.
    container: NodeContainer,
}

impl NodeRuntime {
    /// Create the runtime, opening the block store.
    ///
    /// Returns an error if the store is unavailable; no listener exists yet
    /// at that point.
    pub fn new(config: NodeConfig) -> Result<Self> {
        info!("Creating block ledger node runtime");
        let container = NodeContainer::new(config)?;
        Ok(Self { container })
    }

    pub fn container(&self) -> &NodeContainer {
        &self.container
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let gateway = self.container.gateway()?;
        let listener = gateway.bind().await?;
        self.run_on(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn run_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("===========================================");
        info!("  Block Ledger Node v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");
        info!("Store: {}", self.container.store.location());

        let gateway = self.container.gateway()?;
        gateway
            .serve(listener, shutdown)
            .await
            .context("API gateway failed")?;

        drop(self.container);
        info!("Shutdown complete");
        Ok(())
    }
}

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
