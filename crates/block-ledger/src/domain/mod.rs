//! # Domain Layer
//!
//! Pure domain types for the Block Ledger.
//!
//! ## Modules
//!
//! - `entities` - Block, BlockId and the validated BlockData payload
//! - `value_objects` - Store location
//! - `errors` - Domain error types

pub mod entities;
pub mod errors;
pub mod value_objects;
