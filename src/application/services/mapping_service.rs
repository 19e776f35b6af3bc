//! Mapping creation, resolution and expiry sweeping.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::http_date::MAX_HTTP_DATE_MILLIS;
use crate::utils::id_generator::generate_id;
use crate::utils::target_url::parse_target_url;

/// Default time-to-live for new mappings: 3 days.
pub const DEFAULT_TTL_SECONDS: i64 = 60 * 60 * 24 * 3;

/// Upper bound on id generation attempts per creation.
pub const MAX_ID_ATTEMPTS: usize = 10;

/// Service implementing the redirector operations over a [`MappingRepository`].
///
/// Stateless apart from the repository handle, so a single instance is shared
/// by all request handlers and the sweep worker.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    default_ttl_seconds: i64,
}

impl MappingService {
    /// Creates a new mapping service using [`DEFAULT_TTL_SECONDS`].
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self {
            repository,
            default_ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }

    /// Overrides the TTL applied when `/add` has no `expires`.
    pub fn with_default_ttl(mut self, default_ttl_seconds: i64) -> Self {
        self.default_ttl_seconds = default_ttl_seconds;
        self
    }

    /// Creates a mapping for `target_url` living for `ttl` seconds.
    ///
    /// `ttl` falls back to the configured default when absent or empty.
    ///
    /// # Id Generation
    ///
    /// Each attempt draws a fresh 7-character id and performs an atomic
    /// insert-if-absent, so a colliding id never overwrites an existing row.
    /// Gives up after [`MAX_ID_ATTEMPTS`] rejected inserts.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `target_url` is missing or not an absolute URL
    /// - [`AppError::InvalidTtl`] if `ttl` is not a non-negative integer, or
    ///   expires past year 9999
    /// - [`AppError::IdSpaceExhausted`] if every attempt collided
    /// - [`AppError::Database`] on storage errors
    pub async fn create_mapping(
        &self,
        target_url: Option<&str>,
        ttl: Option<&str>,
    ) -> Result<Mapping, AppError> {
        let target_url = parse_target_url(target_url.unwrap_or_default()).map_err(|e| {
            debug!(error = %e, "Rejected target url");
            AppError::InvalidUrl {
                input: target_url.map(str::to_owned),
            }
        })?;

        let created_at = Utc::now().timestamp_millis();
        let ttl_seconds = parse_ttl(ttl, self.default_ttl_seconds, created_at)?;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let mapping = Mapping::new(generate_id(), target_url.clone(), created_at, ttl_seconds);

            if self.repository.insert(mapping.clone()).await? {
                info!(id = %mapping.id, ttl_seconds, "Created mapping");
                return Ok(mapping);
            }

            warn!(attempt, id = %mapping.id, "Generated id already taken");
        }

        Err(AppError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Looks up an active mapping by id.
    ///
    /// A mapping found expired is deleted before the error is returned.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingId`] if `id` is absent or empty
    /// - [`AppError::NotFound`] if no mapping has that id
    /// - [`AppError::Expired`] if the mapping has expired
    /// - [`AppError::Database`] on storage errors
    pub async fn resolve(&self, id: Option<&str>) -> Result<Mapping, AppError> {
        let id = id.filter(|id| !id.is_empty()).ok_or(AppError::MissingId)?;

        let mapping = self.repository.find_by_id(id).await?.ok_or_else(|| {
            debug!(id, "Mapping not found");
            AppError::NotFound { id: id.to_owned() }
        })?;

        if mapping.is_expired_at(Utc::now().timestamp_millis()) {
            debug!(id, "Mapping expired, deleting");
            self.repository.delete_by_id(id).await?;
            return Err(AppError::Expired { id: id.to_owned() });
        }

        Ok(mapping)
    }

    /// Deletes every expired mapping. Returns the number of purged rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn sweep(&self) -> Result<u64, AppError> {
        let purged = self
            .repository
            .delete_expired_before(Utc::now().timestamp_millis())
            .await?;

        info!(purged, "Swept expired mappings");
        Ok(purged)
    }

    /// Counts mappings that are expired but not yet purged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn count_expired(&self) -> Result<i64, AppError> {
        self.repository
            .count_expired_before(Utc::now().timestamp_millis())
            .await
    }

    /// Counts stored mappings. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Parses the `expires` parameter as a TTL in seconds.
///
/// Absent or blank input yields `default`. The resulting expiry, counted from
/// `created_at`, must still render as an HTTP date.
fn parse_ttl(input: Option<&str>, default: i64, created_at: i64) -> Result<i64, AppError> {
    let raw = match input.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    let expiry = |ttl: i64| ttl.checked_mul(1000).and_then(|ms| ms.checked_add(created_at));

    match raw.parse::<i64>() {
        Ok(ttl) if ttl >= 0 && expiry(ttl).is_some_and(|at| at <= MAX_HTTP_DATE_MILLIS) => {
            Ok(ttl)
        }
        _ => {
            debug!(input = raw, "Rejected ttl");
            Err(AppError::InvalidTtl {
                input: raw.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingRepository;

    fn service(repo: MockMappingRepository) -> MappingService {
        MappingService::new(Arc::new(repo))
    }

    fn stored(id: &str, created_at: i64, ttl_seconds: i64) -> Mapping {
        Mapping::new(
            id.to_string(),
            "https://example.com/page".to_string(),
            created_at,
            ttl_seconds,
        )
    }

    const NOW: i64 = 1_704_067_200_000;

    #[test]
    fn test_parse_ttl_defaults() {
        assert_eq!(parse_ttl(None, 42, NOW).unwrap(), 42);
        assert_eq!(parse_ttl(Some(""), 42, NOW).unwrap(), 42);
        assert_eq!(parse_ttl(Some("  "), 42, NOW).unwrap(), 42);
    }

    #[test]
    fn test_parse_ttl_values() {
        assert_eq!(parse_ttl(Some("0"), 42, NOW).unwrap(), 0);
        assert_eq!(parse_ttl(Some("100"), 42, NOW).unwrap(), 100);
        assert_eq!(parse_ttl(Some(" 7 "), 42, NOW).unwrap(), 7);
    }

    #[test]
    fn test_parse_ttl_rejects_invalid() {
        for input in ["-1", "abc", "1.5", "1e3", "99999999999999999999"] {
            assert!(
                matches!(parse_ttl(Some(input), 42, NOW), Err(AppError::InvalidTtl { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_ttl_expiry_must_fit_http_date() {
        let last = (MAX_HTTP_DATE_MILLIS - NOW) / 1000;

        assert_eq!(parse_ttl(Some(&last.to_string()), 42, NOW).unwrap(), last);

        for input in [(last + 1).to_string(), i64::MAX.to_string()] {
            assert!(
                matches!(parse_ttl(Some(&input), 42, NOW), Err(AppError::InvalidTtl { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_create_mapping_success() {
        let mut repo = MockMappingRepository::new();
        repo.expect_insert()
            .withf(|m| {
                m.id.len() == 7
                    && m.id.chars().all(|c| c.is_ascii_alphanumeric())
                    && m.target_url == "https://example.com/page"
                    && m.ttl_seconds == 100
            })
            .times(1)
            .returning(|_| Ok(true));

        let mapping = service(repo)
            .create_mapping(Some("https://example.com/page"), Some("100"))
            .await
            .unwrap();

        assert_eq!(mapping.id.len(), 7);
        assert_eq!(mapping.target_url, "https://example.com/page");
        assert_eq!(mapping.ttl_seconds, 100);
    }

    #[tokio::test]
    async fn test_create_mapping_uses_default_ttl() {
        let mut repo = MockMappingRepository::new();
        repo.expect_insert()
            .withf(|m| m.ttl_seconds == 259_200)
            .times(1)
            .returning(|_| Ok(true));

        let mapping = service(repo)
            .create_mapping(Some("https://example.com"), None)
            .await
            .unwrap();

        assert_eq!(mapping.ttl_seconds, DEFAULT_TTL_SECONDS);
        assert_eq!(mapping.target_url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_create_mapping_invalid_url_performs_no_insert() {
        let mut repo = MockMappingRepository::new();
        repo.expect_insert().times(0);

        let svc = service(repo);

        let result = svc.create_mapping(Some("not a url"), None).await;
        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));

        let result = svc.create_mapping(None, None).await;
        assert!(matches!(result, Err(AppError::InvalidUrl { input: None })));
    }

    #[tokio::test]
    async fn test_create_mapping_invalid_ttl_performs_no_insert() {
        let mut repo = MockMappingRepository::new();
        repo.expect_insert().times(0);

        let result = service(repo)
            .create_mapping(Some("https://example.com"), Some("-5"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidTtl { .. })));
    }

    #[tokio::test]
    async fn test_create_mapping_retries_on_collision() {
        let mut repo = MockMappingRepository::new();
        let mut calls = 0;
        repo.expect_insert().times(3).returning(move |_| {
            calls += 1;
            Ok(calls == 3)
        });

        let result = service(repo)
            .create_mapping(Some("https://example.com"), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_mapping_gives_up_after_max_attempts() {
        let mut repo = MockMappingRepository::new();
        repo.expect_insert()
            .times(MAX_ID_ATTEMPTS)
            .returning(|_| Ok(false));

        let result = service(repo)
            .create_mapping(Some("https://example.com"), None)
            .await;

        assert!(matches!(
            result,
            Err(AppError::IdSpaceExhausted { attempts: 10 })
        ));
    }

    #[tokio::test]
    async fn test_create_mapping_propagates_store_errors() {
        let mut repo = MockMappingRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let result = service(repo)
            .create_mapping(Some("https://example.com"), None)
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_resolve_missing_id() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_id().times(0);
        let svc = service(repo);

        assert!(matches!(svc.resolve(None).await, Err(AppError::MissingId)));
        assert!(matches!(svc.resolve(Some("")).await, Err(AppError::MissingId)));
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "nothere")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_delete_by_id().times(0);

        let result = service(repo).resolve(Some("nothere")).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_active_mapping() {
        let created_at = Utc::now().timestamp_millis();
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "abc1234")
            .times(1)
            .returning(move |_| Ok(Some(stored("abc1234", created_at, 100))));
        repo.expect_delete_by_id().times(0);

        let mapping = service(repo).resolve(Some("abc1234")).await.unwrap();

        assert_eq!(mapping.target_url, "https://example.com/page");
        assert_eq!(mapping.expires_at_millis(), created_at + 100_000);
    }

    #[tokio::test]
    async fn test_resolve_expired_mapping_is_deleted() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored("old1234", 1_000, 0))));
        repo.expect_delete_by_id()
            .withf(|id| id == "old1234")
            .times(1)
            .returning(|_| Ok(true));

        let result = service(repo).resolve(Some("old1234")).await;

        assert!(matches!(result, Err(AppError::Expired { .. })));
    }

    #[tokio::test]
    async fn test_sweep_delegates_with_current_time() {
        let before = Utc::now().timestamp_millis();
        let mut repo = MockMappingRepository::new();
        repo.expect_delete_expired_before()
            .withf(move |now| *now >= before)
            .times(1)
            .returning(|_| Ok(3));

        assert_eq!(service(repo).sweep().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_count_expired_delegates_with_current_time() {
        let before = Utc::now().timestamp_millis();
        let mut repo = MockMappingRepository::new();
        repo.expect_count_expired_before()
            .withf(move |now| *now >= before)
            .times(1)
            .returning(|_| Ok(2));

        assert_eq!(service(repo).count_expired().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_with_default_ttl_overrides_default() {
        let mut repo = MockMappingRepository::new();
        repo.expect_insert()
            .withf(|m| m.ttl_seconds == 60)
            .times(1)
            .returning(|_| Ok(true));

        let mapping = service(repo)
            .with_default_ttl(60)
            .create_mapping(Some("https://example.com"), None)
            .await
            .unwrap();

        assert_eq!(mapping.ttl_seconds, 60);
    }
}
