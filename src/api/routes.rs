//! API route configuration.

use crate::api::handlers::{create_tinyurl_handler, resolve_tinyurl_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes.
///
/// # Endpoints
///
/// - `POST /tinyurl`             - Create a short URL for a long URL
/// - `GET  /tinyurl/{shortUrl}`  - Resolve a short code to its long URL
pub fn tinyurl_routes() -> Router<AppState> {
    Router::new()
        .route("/tinyurl", post(create_tinyurl_handler))
        .route("/tinyurl/{shortUrl}", get(resolve_tinyurl_handler))
}
