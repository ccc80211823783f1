//! Repository trait for url mapping storage.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Store of `(id, long_url)` rows keyed by a server-allocated id.
///
/// Implementations must be safe for concurrent callers: all mutation goes
/// through [`UrlMappingRepository::save`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryUrlMappingRepository`] - process-local
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Persists a new mapping and returns it with its freshly allocated id.
    ///
    /// Ids are strictly positive, unique, and increase monotonically within a
    /// single process. The insert is atomic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on connectivity failures and
    /// [`AppError::StoreIntegrity`] on constraint violations.
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds the mapping stored under `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on connectivity failures.
    async fn find(&self, id: u64) -> Result<Option<UrlMapping>, AppError>;

    /// Verifies that the store is reachable.
    async fn health_check(&self) -> Result<(), AppError>;
}
