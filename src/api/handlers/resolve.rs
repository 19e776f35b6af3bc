//! Handler for JSON mapping lookup.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::mapping::{QueryPairs, ResolveParams, ResolveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the target URL and absolute expiry of a mapping.
///
/// # Endpoint
///
/// `GET /get?id=<id>`
///
/// Other keys are ignored; a repeated `id` keeps its first value.
///
/// # Response
///
/// ```json
/// { "url": "https://example.com/page", "expires": "2024-01-01T00:01:40.000Z" }
/// ```
///
/// # Errors
///
/// Returns 400 when the id is missing, unknown or expired. An expired mapping
/// is deleted before responding.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<ResolveResponse>, AppError> {
    let params = ResolveParams::from(pairs);
    let mapping = state.mapping_service.resolve(params.id.as_deref()).await?;

    Ok(Json(mapping.into()))
}
