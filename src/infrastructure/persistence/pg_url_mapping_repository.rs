//! PostgreSQL implementation of the url mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

/// PostgreSQL repository backed by the `url_mapping` table.
///
/// Ids come from the table's identity sequence, which keeps allocation atomic
/// and collision-free across concurrent inserts.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns the number of stored mappings and the highest id, if any.
    pub async fn summary(&self) -> Result<(i64, Option<u64>), AppError> {
        let (count, max_id): (i64, Option<i64>) =
            sqlx::query_as("SELECT COUNT(*), MAX(id) FROM url_mapping")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok((count, max_id.map(to_domain_id).transpose()?))
    }
}

fn to_domain_id(id: i64) -> Result<u64, AppError> {
    u64::try_from(id)
        .ok()
        .filter(|&id| id > 0)
        .ok_or_else(|| AppError::StoreIntegrity(format!("non-positive id {id} in url_mapping")))
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO url_mapping (long_url) VALUES ($1) RETURNING id")
            .bind(&new_mapping.long_url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(UrlMapping::new(to_domain_id(id)?, new_mapping.long_url))
    }

    async fn find(&self, id: u64) -> Result<Option<UrlMapping>, AppError> {
        // BIGINT keys cannot exceed i64::MAX.
        let Ok(db_id) = i64::try_from(id) else {
            return Ok(None);
        };

        let long_url: Option<String> =
            sqlx::query_scalar("SELECT long_url FROM url_mapping WHERE id = $1")
                .bind(db_id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url.map(|long_url| UrlMapping::new(id, long_url)))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_domain_id() {
        assert_eq!(to_domain_id(1).unwrap(), 1);
        assert_eq!(to_domain_id(i64::MAX).unwrap(), i64::MAX as u64);
        assert!(matches!(to_domain_id(0), Err(AppError::StoreIntegrity(_))));
        assert!(matches!(to_domain_id(-5), Err(AppError::StoreIntegrity(_))));
    }
}
