//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! listener → router → instrument middleware → /health + host routes
//!                          │
//!                          └→ one log record per completed request
//! ```
//!
//! # Design Decisions
//! - Instrumentation is the outermost layer so it sees every route
//! - Host applications mount routes through `HttpServer::with_routes`;
//!   this crate defines no business routes itself

pub mod middleware;
pub mod server;

pub use server::HttpServer;
