//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use tracing::{Instrument, info, info_span, warn};

use crate::api::dto::url_mapping::{CreateMappingRequest, UrlMappingPayload};
use crate::api::handlers::guard::{TinyUrlResponse, respond, run_guarded};
use crate::state::AppState;
use crate::utils::correlation::CorrelationId;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /tinyurl`
///
/// # Request Flow
///
/// 1. Resolve the correlation id (`X-Correlation-Id` header or a new UUIDv4)
/// 2. Validate `longUrl`
/// 3. Store the mapping under a fresh id
/// 4. Encode the id and prefix it with the configured host
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "longUrl": "https://example.com/a",
///   "shortUrl": "http://localhost:9090/c",
///   "message": "success",
///   "httpStatusCode": 200
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is unreadable or `longUrl` is not a valid URL
/// - 500 Internal Server Error for anything else, quoting the correlation id
pub async fn create_tinyurl_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateMappingRequest>, JsonRejection>,
) -> TinyUrlResponse {
    let correlation_id = CorrelationId::from_headers(&headers);
    let span = info_span!("tinyurl", correlation_id = %correlation_id);

    async move {
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                let reason = rejection.body_text();
                info!(body = %reason, %correlation_id, "Create request received");
                warn!(%reason, "Unreadable request body");
                return respond(UrlMappingPayload::invalid_long_url(None));
            }
        };

        info!(body = ?request, %correlation_id, "Create request received");

        let Some(long_url) = request.long_url else {
            warn!("Request body has no longUrl");
            return respond(UrlMappingPayload::invalid_long_url(None));
        };

        let service = state.url_mapping_service.clone();
        let submitted = long_url.clone();
        let work = async move {
            let shortened = service.shorten(&long_url).await?;

            info!(
                id = shortened.mapping.id,
                short_url = %shortened.short_url,
                "Created mapping"
            );

            Ok(UrlMappingPayload::created(
                shortened.mapping.long_url,
                shortened.short_url,
            ))
        };

        run_guarded(work, &correlation_id, Some(submitted), None).await
    }
    .instrument(span)
    .await
}
