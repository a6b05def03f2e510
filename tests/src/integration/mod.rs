//! Cross-crate integration flows.

pub mod harness;
mod http_flows;
