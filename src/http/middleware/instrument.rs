//! Per-request instrumentation middleware.
//!
//! # Responsibilities
//! - Resolve or create the correlation ID before the handler runs
//! - Resolve the client IP (forwarded-for, real-ip, then peer address)
//! - Emit exactly one info-level record once the handler returns
//!
//! # Design Decisions
//! - Fully transparent to the handler apart from the injected
//!   `x-request-id` header and extension
//! - The response status is read from the returned response value, so
//!   the first (and only) status set by the handler is what gets logged;
//!   a handler that never sets one yields the framework default of 200
//! - No recovery here: a panicking handler propagates to the runtime

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::logging::{CorrelationId, Field, Logger, REQUEST_ID_HEADER};

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
const REAL_IP_HEADER: &str = "x-real-ip";

/// Wrap a request with outcome logging. Mounted outermost on the router.
pub async fn instrument(
    State(logger): State<Logger>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();

    let request_id = CorrelationId::get_or_create(request.headers());
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        request.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    request.extensions_mut().insert(request_id.clone());

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let ip = client_ip(request.headers(), peer);

    let mut response = next.run(request).await;

    let elapsed = start.elapsed();
    logger.info(
        "http request",
        &[
            Field::str("method", method),
            Field::str("path", path),
            Field::int("status", i64::from(response.status().as_u16())),
            Field::float("duration_ms", elapsed.as_secs_f64() * 1000.0),
            Field::str("request_id", request_id.as_str()),
            Field::str("ip", ip),
        ],
    );

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// First non-empty of forwarded-for, real-ip, transport peer address.
fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    for header in [FORWARDED_FOR_HEADER, REAL_IP_HEADER] {
        if let Some(ip) = headers
            .get(header)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
        {
            return ip.to_string();
        }
    }
    peer.to_string()
}
