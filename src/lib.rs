//! Operational substrate for an HTTP service: structured logging,
//! per-request correlation IDs, request instrumentation, and a bounded
//! graceful-shutdown lifecycle.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod logging;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::{Coordinator, Shutdown};
pub use logging::{CorrelationId, Field, Format, Level, Logger};
