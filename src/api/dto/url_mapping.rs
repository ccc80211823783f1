//! Wire records for the `/tinyurl` endpoints.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::utils::correlation::CorrelationId;

/// Body of `POST /tinyurl`.
///
/// Only `longUrl` is read; other fields a client echoes back are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMappingRequest {
    #[serde(default)]
    pub long_url: Option<String>,
}

/// Response body shared by both endpoints, on success and on failure.
///
/// Unset fields are omitted from the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMappingPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<u16>,
}

impl UrlMappingPayload {
    /// `200` body for a newly created mapping.
    pub fn created(long_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            long_url: Some(long_url.into()),
            short_url: Some(short_url.into()),
            message: Some("success".to_string()),
            http_status_code: Some(StatusCode::OK.as_u16()),
        }
    }

    /// `200` body for a resolved short code. Carries no message or status.
    pub fn resolved(long_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            long_url: Some(long_url.into()),
            short_url: Some(short_url.into()),
            message: None,
            http_status_code: None,
        }
    }

    /// `400` body for a long URL that failed validation.
    pub fn invalid_long_url(long_url: Option<String>) -> Self {
        let shown = long_url.as_deref().unwrap_or("null");
        Self {
            message: Some(format!(
                "Supplied longUrl ({shown}) is not a valid URL. \
                 Ensure it has valid Scheme, Authority, Path, Query, Fragment."
            )),
            long_url,
            short_url: None,
            http_status_code: Some(StatusCode::BAD_REQUEST.as_u16()),
        }
    }

    /// `404` body for a short code with no stored mapping.
    pub fn not_found(short_url: impl Into<String>) -> Self {
        let short_url = short_url.into();
        Self {
            message: Some(format!(
                "No mapping found for shortUrl: {short_url}. Did you create a mapping?"
            )),
            short_url: Some(short_url),
            long_url: None,
            http_status_code: Some(StatusCode::NOT_FOUND.as_u16()),
        }
    }

    /// `500` body quoting the correlation id for bug reports.
    pub fn unexpected(
        correlation_id: &CorrelationId,
        long_url: Option<String>,
        short_url: Option<String>,
    ) -> Self {
        Self {
            long_url,
            short_url,
            message: Some(format!(
                "An unexpected error occurred. If problem persists, please contact support. \
                 Provide correlation id: {correlation_id}"
            )),
            http_status_code: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
        }
    }

    /// Status carried in the body, or `200` when none is set.
    pub fn status(&self) -> StatusCode {
        self.http_status_code
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK)
    }
}
