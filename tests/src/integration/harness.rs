//! Boots a node on `127.0.0.1:0` for a single test.

use anyhow::{Context, Result};
use block_ledger::SqliteStore;
use node_runtime::{NodeConfig, NodeRuntime};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running node plus a handle on its store for assertions.
pub struct TestNode {
    pub addr: SocketAddr,
    pub store: SqliteStore,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<()>>,
}

impl TestNode {
    /// Start a node backed by a private in-memory store.
    pub async fn in_memory() -> Result<Self> {
        let mut config = NodeConfig::default();
        config.storage.db_path = ":memory:".to_string();
        Self::start(config).await
    }

    /// Start a node with `config`, ignoring its configured bind address.
    pub async fn start(config: NodeConfig) -> Result<Self> {
        let runtime = NodeRuntime::new(config)?;
        let store = runtime.container().store.clone();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind ephemeral port")?;
        let addr = listener.local_addr()?;

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(runtime.run_on(listener, async move {
            let _ = rx.await;
        }));

        Ok(Self {
            addr,
            store,
            shutdown: Some(tx),
            handle,
        })
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    /// Signal shutdown and wait for the server task to finish.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.context("node task panicked")?
    }
}
