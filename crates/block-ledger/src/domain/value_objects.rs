//! # Value Objects
//!
//! Where the ledger lives.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "blockchain.db";

/// Textual form that selects an ephemeral in-memory store.
pub const IN_MEMORY: &str = ":memory:";

/// Location of the backing SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A database file, created if absent.
    File(PathBuf),
    /// A private in-memory database that vanishes with the handle.
    InMemory,
}

impl StoreLocation {
    pub fn file(path: impl AsRef<Path>) -> Self {
        StoreLocation::File(path.as_ref().to_path_buf())
    }

    pub fn is_in_memory(&self) -> bool {
        matches!(self, StoreLocation::InMemory)
    }
}

impl Default for StoreLocation {
    fn default() -> Self {
        StoreLocation::File(PathBuf::from(DEFAULT_DB_PATH))
    }
}

impl FromStr for StoreLocation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == IN_MEMORY {
            Ok(StoreLocation::InMemory)
        } else {
            Ok(StoreLocation::file(s))
        }
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreLocation::File(path) => write!(f, "{}", path.display()),
            StoreLocation::InMemory => f.write_str(IN_MEMORY),
        }
    }
}
