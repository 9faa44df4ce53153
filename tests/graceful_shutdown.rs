//! Graceful-shutdown and drain-deadline scenarios.

use std::time::{Duration, Instant};

use axum::routing::get;
use axum::Router;

mod common;

#[tokio::test]
async fn clean_shutdown_stops_promptly_and_logs_stop() {
    let server = common::spawn_server(28471, Router::new(), Duration::from_secs(5)).await;

    reqwest::get(server.url("/health")).await.unwrap();

    let started = Instant::now();
    let sink = server.stop().await;
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "idle shutdown should not wait for the drain deadline"
    );

    let output = sink.contents();
    assert!(output.contains("server stopped"));
    assert!(!output.contains("drain deadline exceeded"));
}

#[tokio::test]
async fn drain_is_bounded_by_the_deadline() {
    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(10)).await;
        "too late"
    }

    let deadline = Duration::from_millis(500);
    let routes = Router::new().route("/slow", get(slow));
    let server = common::spawn_server(28472, routes, deadline).await;

    // Hold one request open past the deadline.
    let url = server.url("/slow");
    let in_flight = tokio::spawn(async move {
        let _ = reqwest::get(url).await;
    });
    tokio::time::sleep(Duration::from_millis(200)).await;

    let started = Instant::now();
    let sink = server.stop().await;
    let elapsed = started.elapsed();

    assert!(
        elapsed >= Duration::from_millis(400),
        "stopped before the deadline: {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_secs(3),
        "drain was not bounded: {elapsed:?}"
    );

    let records = sink.records();
    assert!(records
        .iter()
        .any(|r| r["level"] == "error"
            && r["msg"] == "drain deadline exceeded, abandoning in-flight requests"));
    assert!(records.iter().any(|r| r["msg"] == "server stopped"));

    let _ = in_flight.await;
}

#[tokio::test]
async fn bind_failure_is_logged_and_shutdown_path_stays_live() {
    let first = common::spawn_server(28473, Router::new(), Duration::from_secs(5)).await;
    // Same port: the second coordinator's listener cannot start.
    let second = common::spawn_server(28473, Router::new(), Duration::from_secs(5)).await;

    let started = Instant::now();
    let sink = second.stop().await;
    assert!(started.elapsed() < Duration::from_secs(2));

    let records = sink.records();
    assert!(records
        .iter()
        .any(|r| r["level"] == "error" && r["msg"] == "listener failed to start"));
    assert!(records.iter().any(|r| r["msg"] == "server stopped"));

    first.stop().await;
}
