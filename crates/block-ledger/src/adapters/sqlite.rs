//! # SQLite Store
//!
//! Owns the database handle and the `blocks` schema.
//!
//! ## Concurrency
//!
//! A single connection is shared by every request worker. `rusqlite`
//! connections are `Send` but not `Sync`, so the handle sits behind a
//! `parking_lot::Mutex`; SQLite therefore sees one statement at a time and
//! assigns ids in the order the lock is acquired. No transaction batching
//! happens here.

use crate::domain::entities::{Block, BlockId};
use crate::domain::errors::LedgerError;
use crate::domain::value_objects::StoreLocation;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tracing::info;

/// Idempotent schema statement. `id` and `timestamp` are always store-assigned.
const CREATE_BLOCKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS blocks (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    data TEXT,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const SELECT_BLOCK_COLUMNS: &str = "SELECT id, data, timestamp FROM blocks";

/// Shared handle to the ledger database.
///
/// Cloning is cheap and every clone refers to the same connection. The
/// connection is closed when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    location: Arc<StoreLocation>,
}

impl SqliteStore {
    /// Open (or create) the store at `location` and ensure the `blocks` table exists.
    ///
    /// ## Errors
    ///
    /// - `StoreUnavailable`: the location cannot be opened, is not a SQLite
    ///   database, or the schema statement fails
    pub fn open(location: &StoreLocation) -> Result<Self, LedgerError> {
        let unavailable = |source: rusqlite::Error| LedgerError::StoreUnavailable {
            location: location.to_string(),
            source,
        };

        let conn = match location {
            StoreLocation::File(path) => Connection::open(path),
            StoreLocation::InMemory => Connection::open_in_memory(),
        }
        .map_err(unavailable)?;

        Self::init_schema(&conn).map_err(unavailable)?;

        info!(location = %location, "Block store opened");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            location: Arc::new(location.clone()),
        })
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self, LedgerError> {
        Self::open(&StoreLocation::InMemory)
    }

    /// Initialize the database schema.
    pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(CREATE_BLOCKS_TABLE, [])?;
        Ok(())
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Exclusive access to the underlying connection for one statement.
    pub(crate) fn connection(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    /// Number of stored blocks.
    pub fn count(&self) -> Result<u64, LedgerError> {
        let count: i64 = self
            .connection()
            .query_row("SELECT COUNT(*) FROM blocks", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// All blocks whose payload equals `data`, in id order.
    pub fn find_by_data(&self, data: &str) -> Result<Vec<Block>, LedgerError> {
        let conn = self.connection();
        let mut stmt =
            conn.prepare_cached(&format!("{SELECT_BLOCK_COLUMNS} WHERE data = ?1 ORDER BY id"))?;
        let blocks = stmt
            .query_map(params![data], map_block_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks)
    }

    /// Block with the given id, if any.
    pub fn get(&self, id: BlockId) -> Result<Option<Block>, LedgerError> {
        let block = self
            .connection()
            .query_row(
                &format!("{SELECT_BLOCK_COLUMNS} WHERE id = ?1"),
                params![id.get()],
                map_block_row,
            )
            .optional()?;
        Ok(block)
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

fn map_block_row(row: &Row<'_>) -> rusqlite::Result<Block> {
    Ok(Block {
        id: BlockId(row.get(0)?),
        // The column is nullable even though the writer never stores NULL.
        data: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        timestamp: row.get(2)?,
    })
}
