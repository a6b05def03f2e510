//! Middleware stack for the API Gateway.
//!
//! Layer order: Request → RequestLog → Router → Handler

pub mod request_log;

pub use request_log::{RequestLogLayer, RequestLogService};
