//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config + logger in → spawn serve loop → Serving
//!
//! Shutdown (shutdown.rs):
//!     Trigger fires → stop accepting → drain in-flight → Stopped
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Startup failures before the listener are fatal; after, they are
//!   logged and the signal path stays live
//! - Drain is bounded: requests past the deadline are abandoned

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, DEFAULT_DRAIN_DEADLINE};
pub use startup::{Coordinator, Phase};
