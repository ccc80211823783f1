//! In-process implementation of the url mapping repository.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

/// Mapping store kept in memory, lost on restart.
///
/// Ids come from an atomic counter starting at 1, so concurrent `save` calls
/// never share an id. `DashMap` shards its locks, letting lookups proceed
/// while other buckets are written.
#[derive(Debug)]
pub struct InMemoryUrlMappingRepository {
    next_id: AtomicU64,
    storage: DashMap<u64, String>,
}

impl InMemoryUrlMappingRepository {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a store whose first allocated id is `first_id` (at least 1).
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            next_id: AtomicU64::new(first_id.max(1)),
            storage: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryUrlMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlMappingRepository for InMemoryUrlMappingRepository {
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| AppError::StoreIntegrity("id sequence exhausted".to_string()))?;

        self.storage.insert(id, new_mapping.long_url.clone());

        Ok(UrlMapping::new(id, new_mapping.long_url))
    }

    async fn find(&self, id: u64) -> Result<Option<UrlMapping>, AppError> {
        Ok(self
            .storage
            .get(&id)
            .map(|entry| UrlMapping::new(id, entry.value().clone())))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
