//! Startup and shutdown orchestration.
//!
//! # Responsibilities
//! - Drive the lifecycle state machine:
//!   Init → Starting → Serving → Draining → Stopped
//! - Start the serve loop on its own task so a bind failure is logged
//!   without disabling the signal path
//! - Bound the drain by the deadline; abandon what is still in flight
//!
//! # Design Decisions
//! - The coordinator is an explicitly-owned instance; the only ambient
//!   state is the OS signal handler it arms
//! - The drain deadline is a one-shot timeout, never extended or retried
//! - Stopped is terminal; `run` returns and the process exits cleanly

use std::fmt;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::{Shutdown, DEFAULT_DRAIN_DEADLINE};
use crate::lifecycle::signals;
use crate::logging::{Field, Logger};

/// Lifecycle phase. No transition leaves `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Starting,
    Serving,
    Draining,
    Stopped,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Init => "init",
            Phase::Starting => "starting",
            Phase::Serving => "serving",
            Phase::Draining => "draining",
            Phase::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Owns process startup and shutdown.
pub struct Coordinator {
    config: AppConfig,
    logger: Logger,
    routes: Router,
    drain_deadline: Duration,
    phase: Phase,
}

impl Coordinator {
    /// Config and logger are constructed by the caller; failures there
    /// are fatal before the coordinator exists.
    pub fn new(config: AppConfig, logger: Logger) -> Self {
        Self {
            config,
            logger,
            routes: Router::new(),
            drain_deadline: DEFAULT_DRAIN_DEADLINE,
            phase: Phase::Init,
        }
    }

    /// Mount host-application routes.
    pub fn with_routes(mut self, routes: Router) -> Self {
        self.routes = self.routes.merge(routes);
        self
    }

    /// Override the drain deadline.
    pub fn with_drain_deadline(mut self, deadline: Duration) -> Self {
        self.drain_deadline = deadline;
        self
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Serve until `shutdown` fires or a termination signal arrives,
    /// then drain within the deadline.
    pub async fn run(mut self, shutdown: Shutdown) {
        // Subscribe before anything else so a trigger racing startup is
        // still observed.
        let mut triggered = shutdown.subscribe();

        self.set_phase(Phase::Starting);
        self.logger.info(
            "server starting",
            &[
                Field::str("address", self.config.bind_address()),
                Field::str("env", self.config.env.as_str()),
            ],
        );

        let server = HttpServer::new(&self.logger).with_routes(self.routes.clone());
        let address = self.config.bind_address();
        let serve_logger = self.logger.clone();
        let serve_shutdown = shutdown.subscribe();

        let mut serve_task = tokio::spawn(async move {
            let listener = match TcpListener::bind(&address).await {
                Ok(listener) => listener,
                Err(err) => {
                    serve_logger.error(
                        "listener failed to start",
                        &[
                            Field::str("address", address),
                            Field::str("error", err.to_string()),
                        ],
                    );
                    return;
                }
            };
            if let Err(err) = server.run(listener, serve_shutdown).await {
                serve_logger.error("server error", &[Field::str("error", err.to_string())]);
            }
        });

        self.set_phase(Phase::Serving);

        tokio::select! {
            _ = signals::wait_for_termination() => shutdown.trigger(),
            _ = triggered.recv() => {}
        }

        self.set_phase(Phase::Draining);
        self.logger.info("server shutting down", &[]);

        if tokio::time::timeout(self.drain_deadline, &mut serve_task)
            .await
            .is_err()
        {
            self.logger.error(
                "drain deadline exceeded, abandoning in-flight requests",
                &[Field::duration("deadline", self.drain_deadline)],
            );
            serve_task.abort();
            let _ = serve_task.await;
        }

        self.set_phase(Phase::Stopped);
        self.logger.info("server stopped", &[]);
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.logger
            .debug("lifecycle phase", &[Field::str("phase", phase.to_string())]);
    }
}
