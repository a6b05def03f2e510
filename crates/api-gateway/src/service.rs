//! API Gateway service - main entry point.
//!
//! Binds the HTTP listener and serves the dispatcher until the shutdown
//! future resolves or the server fails.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::{build_router, AppState};
use axum::Router;
use block_ledger::LedgerApi;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl ApiGatewayService {
    /// Create a new API Gateway service around an injected ledger.
    pub fn new(config: GatewayConfig, ledger: Arc<dyn LedgerApi>) -> Result<Self, GatewayError> {
        config.validate()?;

        Ok(Self {
            config,
            state: AppState::new(ledger),
        })
    }

    /// Build the HTTP router
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind the configured HTTP address.
    pub async fn bind(&self) -> Result<TcpListener, GatewayError> {
        let addr = self.config.http_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr().map_err(GatewayError::Serve)?;
        info!(addr = %addr, "Starting HTTP server");

        let app = self
            .router()
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP server error");
                GatewayError::Serve(e)
            })?;

        info!("API Gateway stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_ledger::{LedgerService, SqliteStore};
    use tokio::sync::oneshot;

    fn ledger() -> Arc<dyn LedgerApi> {
        Arc::new(LedgerService::new(SqliteStore::open_in_memory().unwrap()))
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GatewayConfig::default();
        config.http.port = 0;

        let result = ApiGatewayService::new(config, ledger());
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown_signal() {
        let service = ApiGatewayService::new(GatewayConfig::default(), ledger()).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(async move {
            service
                .serve(listener, async move {
                    let _ = rx.await;
                })
                .await
        });

        tx.send(()).unwrap();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = GatewayConfig::default();
        config.http.host = "127.0.0.1".parse().unwrap();
        config.http.port = taken.local_addr().unwrap().port();

        let service = ApiGatewayService::new(config, ledger()).unwrap();
        let err = service.bind().await.unwrap_err();
        assert!(matches!(err, GatewayError::Bind { .. }));
    }
}
