//! HTTP request handlers for API endpoints.

pub mod create;
pub mod guard;
pub mod health;
pub mod resolve;

pub use create::create_tinyurl_handler;
pub use health::health_handler;
pub use resolve::resolve_tinyurl_handler;
