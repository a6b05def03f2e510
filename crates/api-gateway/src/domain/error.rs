//! API Gateway error types and their HTTP mapping.
//!
//! | Error | Status | Body |
//! |-------|--------|------|
//! | `Validation` | 400 | validation message |
//! | `Persistence` | 500 | underlying store error text |
//! | `Serialization` | 500 | encoder error text |
//! | `Internal` | 500 | worker failure text |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use block_ledger::{LedgerError, ValidationError};
use std::net::SocketAddr;

/// Per-request failure, rendered as a plain-text HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller input failed validation. Never a server fault.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The ledger rejected a validated write.
    #[error(transparent)]
    Persistence(#[from] LedgerError),

    /// A response payload could not be encoded.
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    /// The worker running the request failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) | ApiError::Serialization(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (not per-request, internal use)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    /// Server socket bind error
    #[error("server bind error on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
