//! # Ledger Writer
//!
//! Validated payload in, one row out.

use crate::adapters::sqlite::SqliteStore;
use crate::domain::entities::{BlockData, BlockId};
use crate::domain::errors::LedgerError;
use crate::ports::inbound::LedgerApi;
use rusqlite::params;
use tracing::debug;

/// The only statement the writer ever issues.
const INSERT_BLOCK_SQL: &str = "INSERT INTO blocks(data) VALUES (?1)";

/// Ledger Writer backed by a [`SqliteStore`].
#[derive(Debug, Clone)]
pub struct LedgerService {
    store: SqliteStore,
}

impl LedgerService {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }
}

impl LedgerApi for LedgerService {
    fn append(&self, data: &BlockData) -> Result<BlockId, LedgerError> {
        let conn = self.store.connection();
        let mut stmt = conn.prepare_cached(INSERT_BLOCK_SQL)?;
        let id = BlockId(stmt.insert(params![data.as_str()])?);

        debug!(block_id = %id, bytes = data.as_str().len(), "Block appended");
        Ok(id)
    }
}
