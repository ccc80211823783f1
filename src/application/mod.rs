//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::url_mapping_service::UrlMappingService`] - Short URL creation and resolution

pub mod services;
