//! Correlation id resolution for request tracing.
//!
//! A caller may pass its own id in `X-Correlation-Id`; otherwise one is
//! generated. The id is attached to the request's tracing span and quoted in
//! 5xx responses so users can cite it in bug reports.

use axum::http::HeaderMap;
use std::fmt;
use uuid::Uuid;

/// Request header carrying a caller-supplied correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Request-scoped token used to find all log lines of one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generates a fresh UUIDv4 correlation id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Uses the `X-Correlation-Id` header when it is present, readable and
    /// non-empty, otherwise generates a new id.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
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
