//! Structured logging subsystem.
//!
//! # Data Flow
//! ```text
//! caller (handler, middleware, lifecycle)
//!     → Logger (level filter, caller resolution)
//!     → Encoder (console or json, shared timestamp rule)
//!     → sink (stdout, mutex-guarded, shared by all clones)
//! ```
//!
//! # Design Decisions
//! - Console format for interactive use, JSON for ingestion; both carry
//!   the identical field set
//! - Suppressed records cost nothing: the level filter runs before any
//!   encoding work
//! - Correlation IDs live here because they exist to tie log records
//!   of one request together

pub mod correlation;
pub mod encoder;
pub mod logger;
pub mod record;

pub use correlation::{CorrelationId, REQUEST_ID_HEADER};
pub use logger::{Logger, LoggerError};
pub use record::{Field, FieldValue, Format, Level};
