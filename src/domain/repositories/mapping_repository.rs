//! Repository trait for mapping storage.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Row store holding [`Mapping`] records keyed by id.
///
/// Every operation is a single statement; implementations must make
/// [`insert`](Self::insert) atomic with respect to the uniqueness check.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by id, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Mapping>, AppError>;

    /// Inserts a mapping unless its id is already taken.
    ///
    /// Returns `Ok(false)` without touching the existing row when the id
    /// exists, including rows that are expired but not yet purged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn insert(&self, mapping: Mapping) -> Result<bool, AppError>;

    /// Deletes a mapping by id. Returns `Ok(false)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;

    /// Deletes every mapping whose derived expiry is at or before `now_millis`.
    ///
    /// Returns the number of deleted rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn delete_expired_before(&self, now_millis: i64) -> Result<u64, AppError>;

    /// Counts mappings whose derived expiry is at or before `now_millis`,
    /// using the same predicate as [`delete_expired_before`](Self::delete_expired_before).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn count_expired_before(&self, now_millis: i64) -> Result<i64, AppError>;

    /// Counts stored mappings, expired ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
