//! Request dispatcher: routes, boundary validation and handlers.
//!
//! | Path | Success | Failure |
//! |------|---------|---------|
//! | `/` (and any unmatched path) | 200 `Hello, World!` | - |
//! | `/api` | 200 `{"text":"Hello from the API"}` | 500 on encoding failure |
//! | `/addblock?data=..` | 200 `Block added successfully` | 400 missing/empty `data`, 500 store failure |
//!
//! Routes answer every HTTP method the same way; only the query string is read.

use crate::domain::error::{ApiError, ApiResult};
use crate::middleware::RequestLogLayer;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query, State},
    http::{header, request::Parts},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use block_ledger::{BlockData, LedgerApi, ValidationError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Body of `/`.
pub const GREETING: &str = "Hello, World!";
/// Text carried by the `/api` message.
pub const API_MESSAGE: &str = "Hello from the API";
/// Body of a successful `/addblock`.
pub const BLOCK_ADDED: &str = "Block added successfully";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn LedgerApi>,
}

impl AppState {
    pub fn new(ledger: Arc<dyn LedgerApi>) -> Self {
        Self { ledger }
    }
}

/// Fixed payload returned by `/api`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
}

/// Build the dispatcher with the request log wrapped around every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(greeting))
        .route("/api", any(api_message))
        .route("/addblock", any(add_block))
        .fallback(greeting)
        .layer(RequestLogLayer::new())
        .with_state(state)
}

async fn greeting() -> &'static str {
    GREETING
}

async fn api_message() -> ApiResult<Response> {
    let message = Message {
        text: API_MESSAGE.to_string(),
    };
    let body = serde_json::to_string(&message)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn add_block(
    State(state): State<AppState>,
    AddBlockRequest { data }: AddBlockRequest,
) -> ApiResult<&'static str> {
    let ledger = Arc::clone(&state.ledger);

    // The insert may block on disk I/O; keep it off the async workers.
    let id = tokio::task::spawn_blocking(move || ledger.append(&data))
        .await
        .map_err(|e| {
            error!(error = %e, "Block append task failed");
            ApiError::Internal(e.to_string())
        })?
        .map_err(|e| {
            error!(error = %e, "Failed to append block");
            e
        })?;

    info!(block_id = %id, "Block added");
    Ok(BLOCK_ADDED)
}

/// Validated `/addblock` input.
///
/// Built from the first `data` query parameter; a missing or empty value is
/// rejected with a 400 before any handler code runs.
#[derive(Debug, Clone)]
pub struct AddBlockRequest {
    pub data: BlockData,
}

#[async_trait]
impl<S> FromRequestParts<S> for AddBlockRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Query(pairs)| first_value(pairs, "data"))
            .unwrap_or_default();

        let data = BlockData::new(raw).map_err(|e: ValidationError| {
            debug!(reason = %e, "Rejected addblock request");
            e
        })?;

        Ok(Self { data })
    }
}

fn first_value(pairs: Vec<(String, String)>, key: &str) -> Option<String> {
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
