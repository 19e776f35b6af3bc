//! Mapping entity: a short id pointing at a target URL until it expires.

use chrono::{DateTime, Utc};

/// Lifecycle state of a stored mapping at a given instant.
///
/// `Purged` is not represented: a purged mapping no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingStatus {
    Active,
    Expired,
}

/// A persisted redirect.
///
/// Only the creation time and the time-to-live are stored. The absolute
/// expiry is recomputed from them on every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: String,
    pub target_url: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub ttl_seconds: i64,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: String, target_url: String, created_at: i64, ttl_seconds: i64) -> Self {
        Self {
            id,
            target_url,
            created_at,
            ttl_seconds,
        }
    }

    /// Absolute expiry in epoch milliseconds: `created_at + ttl_seconds * 1000`.
    pub fn expires_at_millis(&self) -> i64 {
        self.created_at
            .saturating_add(self.ttl_seconds.saturating_mul(1000))
    }

    /// Absolute expiry as a UTC instant.
    ///
    /// Saturates to the latest representable instant for TTLs beyond chrono's range.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.expires_at_millis()).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn status_at(&self, now_millis: i64) -> MappingStatus {
        if now_millis >= self.expires_at_millis() {
            MappingStatus::Expired
        } else {
            MappingStatus::Active
        }
    }

    /// Returns true if the mapping has expired at `now_millis`.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        self.status_at(now_millis) == MappingStatus::Expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(created_at: i64, ttl_seconds: i64) -> Mapping {
        Mapping::new(
            "abc1234".to_string(),
            "https://example.com/".to_string(),
            created_at,
            ttl_seconds,
        )
    }

    #[test]
    fn test_mapping_creation() {
        let m = mapping(1_000, 60);

        assert_eq!(m.id, "abc1234");
        assert_eq!(m.target_url, "https://example.com/");
        assert_eq!(m.created_at, 1_000);
        assert_eq!(m.ttl_seconds, 60);
    }

    #[test]
    fn test_expiry_is_derived_from_created_at_and_ttl() {
        let m = mapping(1_000, 100);
        assert_eq!(m.expires_at_millis(), 101_000);
        assert_eq!(m.expires_at().timestamp_millis(), 101_000);
    }

    #[test]
    fn test_status_boundary_is_inclusive() {
        let m = mapping(1_000, 1);

        assert_eq!(m.status_at(1_999), MappingStatus::Active);
        assert_eq!(m.status_at(2_000), MappingStatus::Expired);
        assert_eq!(m.status_at(2_001), MappingStatus::Expired);
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let m = mapping(5_000, 0);
        assert!(m.is_expired_at(5_000));
    }

    #[test]
    fn test_fresh_mapping_is_not_expired() {
        let now = Utc::now().timestamp_millis();
        assert!(!mapping(now, 3600).is_expired_at(now));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let m = mapping(1_000, i64::MAX);
        assert_eq!(m.expires_at_millis(), i64::MAX);
        assert_eq!(m.expires_at(), DateTime::<Utc>::MAX_UTC);
        assert!(!m.is_expired_at(Utc::now().timestamp_millis()));
    }
}
