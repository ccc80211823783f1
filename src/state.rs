//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlMappingService;
use crate::domain::repositories::UrlMappingRepository;

/// State shared by all request handlers.
///
/// Cloning is cheap; the service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub url_mapping_service: Arc<UrlMappingService>,
}

impl AppState {
    /// Builds the state from a mapping store and the public host used in
    /// qualified short URLs.
    pub fn new(repository: Arc<dyn UrlMappingRepository>, host: impl Into<String>) -> Self {
        Self {
            url_mapping_service: Arc::new(UrlMappingService::new(repository, host)),
        }
    }
}
