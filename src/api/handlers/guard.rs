//! Error boundary shared by the `/tinyurl` handlers.
//!
//! Handler bodies run on their own task. Whatever they return, or however they
//! fail, the client receives a [`UrlMappingPayload`] with a matching status;
//! unexpected failures quote the correlation id.

use axum::{Json, http::StatusCode};
use std::future::Future;
use tracing::{Instrument, error, warn};

use crate::api::dto::url_mapping::UrlMappingPayload;
use crate::error::AppError;
use crate::utils::correlation::CorrelationId;

/// Response type of the `/tinyurl` handlers.
pub type TinyUrlResponse = (StatusCode, Json<UrlMappingPayload>);

/// Turns a payload into a response using the status it carries.
pub fn respond(payload: UrlMappingPayload) -> TinyUrlResponse {
    (payload.status(), Json(payload))
}

/// Runs `work` in the current span on a separate task and converts its outcome
/// into a response.
///
/// `long_url` and `short_url` are echoed in the 500 body when known.
pub async fn run_guarded<F>(
    work: F,
    correlation_id: &CorrelationId,
    long_url: Option<String>,
    short_url: Option<String>,
) -> TinyUrlResponse
where
    F: Future<Output = Result<UrlMappingPayload, AppError>> + Send + 'static,
{
    let outcome = match tokio::spawn(work.in_current_span()).await {
        Ok(outcome) => outcome,
        Err(join_error) => Err(AppError::Internal(join_error.to_string())),
    };

    let payload = match outcome {
        Ok(payload) => payload,
        Err(e) => error_payload(e, correlation_id, long_url, short_url),
    };

    respond(payload)
}

/// Converts an error raised before any work was spawned into a response.
pub fn reject(
    e: AppError,
    correlation_id: &CorrelationId,
    long_url: Option<String>,
    short_url: Option<String>,
) -> TinyUrlResponse {
    respond(error_payload(e, correlation_id, long_url, short_url))
}

fn error_payload(
    e: AppError,
    correlation_id: &CorrelationId,
    long_url: Option<String>,
    short_url: Option<String>,
) -> UrlMappingPayload {
    match e {
        AppError::InvalidLongUrl { long_url } => {
            warn!(%long_url, "Supplied longUrl is not a valid URL");
            UrlMappingPayload::invalid_long_url(Some(long_url))
        }
        AppError::NoMappingFound { short_code, id } => {
            warn!(%short_code, id, "No mapping found in store");
            UrlMappingPayload::not_found(short_code)
        }
        e => {
            error!(
                error = %e,
                details = ?e,
                status = e.status_code().as_u16(),
                retriable = e.is_retriable(),
                %correlation_id,
                "Unexpected failure handling request"
            );
            UrlMappingPayload::unexpected(correlation_id, long_url, short_url)
        }
    }
}
