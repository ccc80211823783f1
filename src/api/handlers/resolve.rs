//! Handler for short code resolution.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::HeaderMap,
};
use tracing::{Instrument, info, info_span};

use crate::api::dto::url_mapping::UrlMappingPayload;
use crate::api::handlers::guard::{TinyUrlResponse, reject, run_guarded};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::correlation::CorrelationId;

/// Resolves a short code to its long URL.
///
/// # Endpoint
///
/// `GET /tinyurl/{shortUrl}`
///
/// `shortUrl` is the bare code (`c`), not the qualified URL returned on
/// creation; the response echoes the bare code too.
///
/// # Response
///
/// ```json
/// { "longUrl": "https://example.com/a", "shortUrl": "c" }
/// ```
///
/// # Errors
///
/// - 404 Not Found if no mapping exists for the code
/// - 500 Internal Server Error for anything else, including codes with
///   characters outside the alphabet or a path that is not valid UTF-8
pub async fn resolve_tinyurl_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    short_url: Result<Path<String>, PathRejection>,
) -> TinyUrlResponse {
    let correlation_id = CorrelationId::from_headers(&headers);
    let span = info_span!("tinyurl", correlation_id = %correlation_id);

    async move {
        let short_url = match short_url {
            Ok(Path(short_url)) => short_url,
            Err(rejection) => {
                let reason = rejection.body_text();
                info!(%reason, %correlation_id, "Resolve request received");
                return reject(
                    AppError::UnreadableShortCode(reason),
                    &correlation_id,
                    None,
                    None,
                );
            }
        };

        info!(%short_url, %correlation_id, "Resolve request received");

        let service = state.url_mapping_service.clone();
        let short_code = short_url.clone();
        let work = async move {
            let mapping = service.resolve(&short_code).await?;

            info!(id = mapping.id, long_url = %mapping.long_url, "Resolved mapping");

            Ok(UrlMappingPayload::resolved(mapping.long_url, short_code))
        };

        run_guarded(work, &correlation_id, None, Some(short_url)).await
    }
    .instrument(span)
    .await
}
