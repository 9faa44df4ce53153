//! Shared utilities for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use service_core::config::{AppConfig, Environment};
use service_core::lifecycle::Shutdown;
use service_core::{Coordinator, Format, Level, Logger};
use tokio::task::JoinHandle;

/// In-memory sink shared between a test and the server's logger.
#[derive(Clone, Default)]
pub struct CaptureSink(Arc<Mutex<Vec<u8>>>);

impl CaptureSink {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// All JSON records written so far.
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.contents()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    /// Only the per-request instrumentation records.
    #[allow(dead_code)]
    pub fn request_records(&self) -> Vec<serde_json::Value> {
        self.records()
            .into_iter()
            .filter(|r| r["msg"] == "http request")
            .collect()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A running coordinator plus the handles a test needs to drive it.
pub struct TestServer {
    pub port: u16,
    pub sink: CaptureSink,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    /// Trigger shutdown and wait for the coordinator to stop.
    pub async fn stop(self) -> CaptureSink {
        self.shutdown.trigger();
        let _ = self.handle.await;
        self.sink
    }
}

/// Spawn a coordinator on a fixed port with JSON logs captured in memory.
/// Tests use unique ports to avoid collisions when run in parallel.
pub async fn spawn_server(port: u16, routes: Router, drain_deadline: Duration) -> TestServer {
    let sink = CaptureSink::default();
    let logger = Logger::with_sink(Level::Debug, Format::Json, Box::new(sink.clone()));
    let config = AppConfig {
        env: Environment::Development,
        log_level: Level::Debug,
        log_format: Format::Json,
        port,
    };
    let shutdown = Shutdown::new();
    let coordinator = Coordinator::new(config, logger)
        .with_routes(routes)
        .with_drain_deadline(drain_deadline);

    let handle = tokio::spawn(coordinator.run(shutdown.clone()));

    // Give the listener time to come up.
    tokio::time::sleep(Duration::from_millis(300)).await;

    TestServer {
        port,
        sink,
        shutdown,
        handle,
    }
}
