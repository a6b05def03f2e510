//! # Block Ledger Test Suite
//!
//! End-to-end tests that boot a real node on an ephemeral port and talk to
//! it over HTTP.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── harness.rs      # Node startup/shutdown on 127.0.0.1:0
//!     └── http_flows.rs   # Request → ledger → response flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ledger-tests
//! ```

pub mod integration;
