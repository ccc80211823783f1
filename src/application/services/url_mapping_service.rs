//! Short URL creation and resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::codec::{num_to_str, str_to_num};
use crate::utils::url_validator::is_valid_url;

/// Result of shortening a long URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub mapping: UrlMapping,
    /// Encoded id, without authority.
    pub short_code: String,
    /// `<host>/<short_code>`, the URL handed back to clients.
    pub short_url: String,
}

/// Service orchestrating validation, storage and the short code codec.
///
/// Every created mapping gets a fresh id from the store; the short code is the
/// id's bijective encoding, so codes never collide.
pub struct UrlMappingService {
    repository: Arc<dyn UrlMappingRepository>,
    host: String,
}

impl UrlMappingService {
    /// Creates a new service.
    ///
    /// `host` is the externally visible authority (scheme, host and port) used
    /// to build qualified short URLs. A trailing `/` is ignored.
    pub fn new(repository: Arc<dyn UrlMappingRepository>, host: impl Into<String>) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self { repository, host }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Stores `long_url` under a new id and returns its short code and URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLongUrl`] if the URL fails validation; the
    /// store is not touched in that case. Store failures are passed through.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        if !is_valid_url(long_url) {
            return Err(AppError::InvalidLongUrl {
                long_url: long_url.to_string(),
            });
        }

        let mapping = self.repository.save(NewUrlMapping::new(long_url)).await?;
        let short_code = num_to_str(mapping.id);
        let short_url = self.qualified_short_url(&short_code);

        debug!(id = mapping.id, %short_code, "Stored new mapping");

        Ok(ShortenedUrl {
            mapping,
            short_code,
            short_url,
        })
    }

    /// Looks up the mapping behind a short code.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidShortCode`] / [`AppError::ShortCodeOverflow`] if the
    ///   code cannot be decoded
    /// - [`AppError::NoMappingFound`] if no mapping exists for the decoded id
    /// - Store failures are passed through
    pub async fn resolve(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        let id = str_to_num(short_code)?;

        // Id 0 is never allocated.
        if id == 0 {
            return Err(AppError::NoMappingFound {
                short_code: short_code.to_string(),
                id,
            });
        }

        debug!(id, short_code, "Looking up mapping");

        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::NoMappingFound {
                short_code: short_code.to_string(),
                id,
            })
    }

    /// Builds the fully qualified short URL for a code.
    pub fn qualified_short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.host, short_code)
    }

    /// Checks that the underlying store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }
}
