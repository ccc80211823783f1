//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Testing
//!
//! See `tests/repository_url_mapping.rs` for the PostgreSQL implementation.

pub mod url_mapping_repository;

pub use url_mapping_repository::UrlMappingRepository;

#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
