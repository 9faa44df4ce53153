//! Shutdown coordination.

use std::time::Duration;

use tokio::sync::broadcast;

/// Grace period for in-flight requests once shutdown begins.
pub const DEFAULT_DRAIN_DEADLINE: Duration = Duration::from_secs(5);

/// One-shot shutdown trigger shared between the signal listener, the
/// serve loop, and tests.
///
/// Wraps a broadcast channel: every long-running task subscribes, the
/// first trigger reaches all of them, repeat triggers are no-ops for
/// subscribers that already observed one.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[tokio::test]
    async fn clones_share_one_channel() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        shutdown.clone().trigger();
        assert!(rx.recv().await.is_ok());
    }
}
