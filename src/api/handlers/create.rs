//! Handler for mapping creation.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::mapping::{CreateMappingParams, CreateMappingResponse, QueryPairs};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping from the `url` and `expires` query parameters.
///
/// # Endpoint
///
/// `GET /add?url=<absolute url>&expires=<ttl seconds>`
///
/// `expires` is optional and defaults to 3 days. A repeated key keeps its
/// first value.
///
/// # Response
///
/// ```json
/// { "id": "aZ3kQ9x", "url": "https://example.com/page", "expires": 100 }
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": ...}` for an unparsable URL or a negative or
/// non-integer TTL.
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<CreateMappingResponse>, AppError> {
    let params = CreateMappingParams::from(pairs);
    let mapping = state
        .mapping_service
        .create_mapping(params.url.as_deref(), params.expires.as_deref())
        .await?;

    Ok(Json(mapping.into()))
}
