//! HTTP server setup.
//!
//! # Responsibilities
//! - Assemble the Axum router: operational routes plus host routes
//! - Mount the instrumentation middleware in front of every handler
//! - Serve with graceful shutdown driven by the lifecycle coordinator

use std::net::SocketAddr;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::http::middleware::instrument;
use crate::logging::{Field, Logger};

/// HTTP server for the service.
pub struct HttpServer {
    logger: Logger,
    routes: Router,
}

impl HttpServer {
    /// Create a server exposing only the operational routes.
    pub fn new(logger: &Logger) -> Self {
        Self {
            logger: logger.clone(),
            routes: Router::new(),
        }
    }

    /// Merge host-application routes. They pass through instrumentation
    /// like every other route.
    pub fn with_routes(mut self, routes: Router) -> Self {
        self.routes = self.routes.merge(routes);
        self
    }

    fn build_router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .merge(self.routes.clone())
            .layer(middleware::from_fn_with_state(
                self.logger.clone(),
                instrument,
            ))
    }

    /// Accept connections until the shutdown signal fires, then stop
    /// accepting and let in-flight requests finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        self.logger.info(
            "http server starting",
            &[Field::str("address", addr.to_string())],
        );

        let app = self
            .build_router()
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        self.logger.info("http server stopped", &[]);
        Ok(())
    }
}

async fn health() -> &'static str {
    "OK"
}
