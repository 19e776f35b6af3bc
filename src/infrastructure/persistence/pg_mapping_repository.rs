//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Row shape of the `redirector` table.
///
/// `expires` is the TTL in seconds, not an absolute instant.
#[derive(Debug, FromRow)]
struct MappingRow {
    id: String,
    redirect_url: String,
    created_at: i64,
    expires: i64,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.id, row.redirect_url, row.created_at, row.expires)
    }
}

/// PostgreSQL repository for mapping storage.
///
/// Uses bound parameters for every query; each operation is one statement.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, redirect_url, created_at, expires
            FROM redirector
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn insert(&self, mapping: Mapping) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO redirector (id, redirect_url, created_at, expires)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&mapping.id)
        .bind(&mapping.target_url)
        .bind(mapping.created_at)
        .bind(mapping.ttl_seconds)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM redirector WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired_before(&self, now_millis: i64) -> Result<u64, AppError> {
        // created_at + expires * 1000 <= now, rearranged so huge TTLs cannot
        // overflow BIGINT.
        let result = sqlx::query(
            r#"
            DELETE FROM redirector
            WHERE created_at <= $1
              AND expires <= ($1 - created_at) / 1000
            "#,
        )
        .bind(now_millis)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn count_expired_before(&self, now_millis: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM redirector
            WHERE created_at <= $1
              AND expires <= ($1 - created_at) / 1000
            "#,
        )
        .bind(now_millis)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM redirector")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
