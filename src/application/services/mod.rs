//! Business logic services for the application layer.

pub mod url_mapping_service;

pub use url_mapping_service::{ShortenedUrl, UrlMappingService};
