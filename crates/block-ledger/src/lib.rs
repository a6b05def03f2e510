//! # Block Ledger
//!
//! The Block Ledger is the only persistent part of the node. It owns a single
//! SQLite table of blocks and appends exactly one row per accepted request.
//!
//! ## Architecture
//!
//! ```text
//! api-gateway ──append(BlockData)──→ LedgerService ──INSERT──→ SqliteStore
//!                                    [Ledger Writer]           [blocks table]
//! ```
//!
//! Blocks are independent records. There is no hashing, linking or chain
//! verification between rows.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Store-assigned ids | `id` is assigned by the store, never by the caller |
//! | 2 | Immutability | No update or delete operation exists |
//! | 3 | Monotonic ids | Ids increase with insertion order; gaps after failures are not corruption |
//! | 4 | Non-empty payload | Empty data is rejected before it reaches the writer |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Block entity, validated payload, store location, errors
//! - `ports/` - Inbound `LedgerApi` trait
//! - `adapters/` - SQLite store owning the connection and schema
//! - `service.rs` - Ledger Writer implementing `LedgerApi`
//!
//! ## Usage
//!
//! ```ignore
//! use block_ledger::{BlockData, LedgerApi, LedgerService, SqliteStore, StoreLocation};
//!
//! let store = SqliteStore::open(&StoreLocation::InMemory)?;
//! let ledger = LedgerService::new(store.clone());
//!
//! let id = ledger.append(&BlockData::new("Test Block")?)?;
//! assert_eq!(store.find_by_data("Test Block")?[0].id, id);
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::sqlite::SqliteStore;
pub use domain::entities::{Block, BlockData, BlockId};
pub use domain::errors::{LedgerError, ValidationError};
pub use domain::value_objects::StoreLocation;
pub use ports::inbound::LedgerApi;
pub use service::LedgerService;
