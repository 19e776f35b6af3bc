//! DTOs for the create, resolve and redirect endpoints.

use serde::Serialize;

use crate::domain::entities::Mapping;
use crate::utils::http_date::format_iso_millis;

/// Raw query string as decoded key/value pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Returns the first value bound to `key`; later repeats are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query parameters accepted by `/add`.
///
/// Kept as raw text; validation happens in
/// [`crate::application::services::MappingService`] so that missing and
/// malformed values produce the same errors.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CreateMappingParams {
    /// Target URL.
    pub url: Option<String>,

    /// TTL in seconds.
    pub expires: Option<String>,
}

impl From<QueryPairs> for CreateMappingParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            url: first_value(&pairs, "url"),
            expires: first_value(&pairs, "expires"),
        }
    }
}

/// Query parameters accepted by `/get`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResolveParams {
    /// Mapping id.
    pub id: Option<String>,
}

impl From<QueryPairs> for ResolveParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            id: first_value(&pairs, "id"),
        }
    }
}

/// Response for `/add`.
#[derive(Debug, Serialize)]
pub struct CreateMappingResponse {
    pub id: String,
    pub url: String,
    /// TTL in seconds.
    pub expires: i64,
}

impl From<Mapping> for CreateMappingResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            id: mapping.id,
            url: mapping.target_url,
            expires: mapping.ttl_seconds,
        }
    }
}

/// Response for `/get`.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub url: String,
    /// Absolute expiry as an ISO-8601 timestamp.
    pub expires: String,
}

impl From<Mapping> for ResolveResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            expires: format_iso_millis(mapping.expires_at()),
            url: mapping.target_url,
        }
    }
}
