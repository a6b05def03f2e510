//! # Ports Layer
//!
//! - `inbound` - API this library exposes to the gateway

pub mod inbound;
