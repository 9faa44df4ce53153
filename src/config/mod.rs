//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables (APP_ENV, LOG_LEVEL, LOG_FORMAT, SERVER_PORT)
//!     → loader.rs (read raw values, apply defaults)
//!     → validation.rs (semantic checks, all violations reported)
//!     → AppConfig (typed, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All knobs have defaults so an empty environment still boots
//! - Validation reports every violation, not just the first
//! - Invalid configuration is fatal before any listener opens

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{AppConfig, Environment};
