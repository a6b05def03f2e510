//! API Gateway - HTTP surface of the block ledger node.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    API GATEWAY                       │
//! ├──────────────────────────────────────────────────────┤
//! │   TCP :8080 ──→ RequestLog ──→ Router                │
//! │                                  │                   │
//! │        ┌─────────────┬───────────┴───────┐           │
//! │        ▼             ▼                   ▼           │
//! │   /              /api              /addblock         │
//! │   greeting       JSON message      BlockData → append│
//! └──────────────────────────────────────────┼───────────┘
//!                                            ▼
//!                                    block-ledger (SQLite)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let service = ApiGatewayService::new(GatewayConfig::default(), ledger)?;
//! let listener = service.bind().await?;
//! service.serve(listener, async { tokio::signal::ctrl_c().await.ok(); }).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

// Re-exports for public API
pub use domain::config::{ConfigError, GatewayConfig, HttpConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use middleware::RequestLogLayer;
pub use router::{build_router, AddBlockRequest, AppState, Message};
pub use service::ApiGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
