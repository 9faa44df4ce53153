//! OS signal handling.
//!
//! # Responsibilities
//! - Arm SIGINT and SIGTERM handlers once, for the process lifetime
//! - Resolve when the first termination signal arrives
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - One-shot: the coordinator transitions to draining on the first
//!   signal; there is no forced-exit escalation on repeat signals

/// Wait for the first SIGINT (Ctrl+C) or SIGTERM.
///
/// If a handler cannot be installed that arm stays pending rather than
/// failing, so the other signal still works.
pub async fn wait_for_termination() {
    let interrupt = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }
}
