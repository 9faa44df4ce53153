//! Per-request correlation identifiers.
//!
//! # Responsibilities
//! - Generate a unique opaque token for each inbound request
//! - Reuse an identifier supplied by the caller (cross-process correlation)
//!
//! # Design Decisions
//! - 8 random bytes, hex-encoded, `req-` prefix
//! - Generation never fails visibly: if the entropy source errors, a
//!   nanosecond-timestamp token is used instead, trading uniqueness
//!   guarantees for availability under a fault that should never occur
//! - Carried as a typed value in request extensions, not a string lookup

use std::fmt;
use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::HeaderMap;

/// Header carrying the correlation identifier, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Opaque per-request token grouping one request's log records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 8];
        match getrandom::fill(&mut bytes) {
            Ok(()) => {
                let mut id = String::with_capacity(20);
                id.push_str("req-");
                for byte in bytes {
                    let _ = write!(id, "{:02x}", byte);
                }
                Self(id)
            }
            Err(_) => {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos())
                    .unwrap_or(0);
                Self(format!("req-{:x}", nanos))
            }
        }
    }

    /// Reuse a non-empty inbound identifier; otherwise generate one.
    pub fn get_or_create(headers: &HeaderMap) -> Self {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .unwrap_or_else(Self::generate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn generated_ids_have_prefix_and_hex_body() {
        let id = CorrelationId::generate();
        let s = id.as_str();
        assert!(s.starts_with("req-"));
        assert_eq!(s.len(), 20);
        assert!(s[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(CorrelationId::generate(), CorrelationId::generate());
    }

    #[test]
    fn inbound_header_value_is_reused_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-upstream1"));
        assert_eq!(CorrelationId::get_or_create(&headers).as_str(), "req-upstream1");
    }

    #[test]
    fn empty_or_missing_header_generates() {
        let headers = HeaderMap::new();
        assert!(CorrelationId::get_or_create(&headers).as_str().starts_with("req-"));

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));
        let id = CorrelationId::get_or_create(&headers);
        assert_eq!(id.as_str().len(), 20);
    }
}
