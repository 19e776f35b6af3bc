//! Process-local mapping repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// In-memory repository backed by a `HashMap` behind a tokio `RwLock`.
///
/// Holding the write lock for the whole insert makes the uniqueness check
/// and the insert a single step, matching the PostgreSQL implementation.
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    storage: RwLock<HashMap<String, Mapping>>,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Mapping>, AppError> {
        Ok(self.storage.read().await.get(id).cloned())
    }

    async fn insert(&self, mapping: Mapping) -> Result<bool, AppError> {
        match self.storage.write().await.entry(mapping.id.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(mapping);
                Ok(true)
            }
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.storage.write().await.remove(id).is_some())
    }

    async fn delete_expired_before(&self, now_millis: i64) -> Result<u64, AppError> {
        let mut storage = self.storage.write().await;
        let before = storage.len();
        storage.retain(|_, mapping| !mapping.is_expired_at(now_millis));
        Ok((before - storage.len()) as u64)
    }

    async fn count_expired_before(&self, now_millis: i64) -> Result<i64, AppError> {
        let storage = self.storage.read().await;
        Ok(storage
            .values()
            .filter(|mapping| mapping.is_expired_at(now_millis))
            .count() as i64)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.storage.read().await.len() as i64)
    }
}
