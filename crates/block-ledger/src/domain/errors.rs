//! # Domain Errors
//!
//! Error types for the Block Ledger.
//!
//! - `ValidationError` is a caller fault and never reaches the store.
//! - `LedgerError::StoreUnavailable` is raised while opening the store.
//! - `LedgerError::Persistence` is raised when a write fails after validation.

/// Caller input failed a precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `data` payload was missing or empty.
    #[error("Missing 'data' parameter")]
    EmptyData,
}

/// Errors raised by the store and the ledger writer.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The backing store could not be opened or its schema initialized.
    #[error("store unavailable at {location}: {source}")]
    StoreUnavailable {
        location: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed after the store was opened.
    #[error("{0}")]
    Persistence(#[from] rusqlite::Error),
}

impl LedgerError {
    /// Whether this error happened while opening the store.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LedgerError::StoreUnavailable { .. })
    }
}
