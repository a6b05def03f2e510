//! # Domain Entities
//!
//! The persisted `Block` record and the validated payload that creates it.

use crate::domain::errors::ValidationError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Row id assigned by the store on insert.
///
/// Always positive. Ids increase with insertion order but may contain gaps
/// after failed writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub i64);

impl BlockId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One persisted ledger record.
///
/// Created exactly once by the Ledger Writer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Store-assigned primary key.
    pub id: BlockId,
    /// Caller-supplied payload.
    pub data: String,
    /// Creation time, set by the store (UTC, second precision).
    pub timestamp: NaiveDateTime,
}

/// A block payload that has passed boundary validation.
///
/// The only way to obtain one is through [`BlockData::new`] (or the
/// `TryFrom`/`FromStr` impls), all of which reject the empty string. Content
/// and length are otherwise unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockData(String);

impl BlockData {
    /// Validate a raw payload.
    pub fn new(data: impl Into<String>) -> Result<Self, ValidationError> {
        let data = data.into();
        if data.is_empty() {
            return Err(ValidationError::EmptyData);
        }
        Ok(Self(data))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for BlockData {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for BlockData {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BlockData {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
