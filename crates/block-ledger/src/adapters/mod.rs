//! # Adapters
//!
//! - `sqlite` - Store backed by a single shared SQLite connection

pub mod sqlite;
