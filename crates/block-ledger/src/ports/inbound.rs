//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the Block Ledger.

use crate::domain::entities::{BlockData, BlockId};
use crate::domain::errors::LedgerError;

/// Primary API for the Block Ledger.
///
/// Implementations are shared across request workers, so they must be
/// callable concurrently through `&self`.
pub trait LedgerApi: Send + Sync {
    /// Persist exactly one block carrying `data`.
    ///
    /// The store assigns `id` and `timestamp`. No retry is attempted and
    /// identical payloads are never deduplicated.
    ///
    /// ## Errors
    ///
    /// - `Persistence`: statement preparation or execution failed
    fn append(&self, data: &BlockData) -> Result<BlockId, LedgerError>;
}
