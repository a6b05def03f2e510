//! # Block Ledger Node
//!
//! Entry point: greeting, JSON status and block append endpoints over HTTP,
//! backed by a SQLite ledger.
//!
//! ## Environment
//!
//! - `LEDGER_CONFIG` - optional JSON config file
//! - `LEDGER_HTTP_HOST` / `LEDGER_HTTP_PORT` - bind address (default `0.0.0.0:8080`)
//! - `LEDGER_DB_PATH` - database file (default `blockchain.db`, `:memory:` for ephemeral)
//! - `RUST_LOG` - log filter (default `info`)

use anyhow::Result;
use node_runtime::{init_logging, NodeConfig, NodeRuntime};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging()?;

    // Load configuration
    let config = NodeConfig::load()?;

    // Store initialization failure ends the process before any socket is bound
    let runtime = NodeRuntime::new(config)?;

    runtime
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal");
        })
        .await
}
