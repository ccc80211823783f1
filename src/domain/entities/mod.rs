//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted id <-> long URL row
//! - [`NewUrlMapping`] - Insert payload; the store assigns the id

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
