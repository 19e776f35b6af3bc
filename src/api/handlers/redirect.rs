//! Handler for id redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::http_date::format_http_date;

/// Redirects an id to its target URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Response
///
/// `302 Found` with an empty body and two headers:
///
/// - `Location` - the target URL
/// - `Expires` - the mapping's expiry as an HTTP date
///
/// # Errors
///
/// Same contract as [`super::resolve_handler`]: a JSON body with status 400,
/// never a redirect.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let mapping = state.mapping_service.resolve(Some(&id)).await?;
    let expires = format_http_date(mapping.expires_at());

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, mapping.target_url),
            (header::EXPIRES, expires),
        ],
    )
        .into_response())
}
