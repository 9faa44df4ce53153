//! Service entry point.
//!
//! ```text
//! env vars → AppConfig → Logger → Coordinator
//!                                     │
//!             SIGINT/SIGTERM ─────────┤
//!                                     ▼
//!                          drain (bounded) → sync → exit 0
//! ```
//!
//! Configuration or logger construction failure exits 1 before any
//! listener opens.

use service_core::lifecycle::Shutdown;
use service_core::{AppConfig, Coordinator, Logger};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let logger = match Logger::build(config.log_level, config.log_format) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("logger initialization failed: {err}");
            std::process::exit(1);
        }
    };

    Coordinator::new(config, logger.clone())
        .run(Shutdown::new())
        .await;

    if let Err(err) = logger.sync() {
        eprintln!("log sync failed: {err}");
    }
}
