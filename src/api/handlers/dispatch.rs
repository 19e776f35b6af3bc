//! Path-based dispatch implementing the routing contract.

use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::Uri,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::dto::mapping::QueryPairs;
use crate::api::handlers::{create_mapping_handler, redirect_handler, resolve_handler};
use crate::api::routes::{RouteKind, classify};
use crate::error::AppError;
use crate::state::AppState;

/// Routes every request not claimed by an explicit route.
///
/// See [`classify`] for the path rules. The request method is not inspected.
pub async fn dispatch_handler(
    state: State<AppState>,
    uri: Uri,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let path = uri.path();

    match classify(path) {
        RouteKind::Create => match query {
            Ok(query) => create_mapping_handler(state, query).await.into_response(),
            Err(rejection) => AppError::from(rejection).into_response(),
        },
        RouteKind::Resolve => match query {
            Ok(query) => resolve_handler(state, query).await.into_response(),
            Err(rejection) => AppError::from(rejection).into_response(),
        },
        RouteKind::Redirect(id) => redirect_handler(state, Path(id.to_owned()))
            .await
            .into_response(),
        RouteKind::Invalid => {
            debug!(path, "Invalid path");
            AppError::InvalidPath {
                path: path.to_owned(),
            }
            .into_response()
        }
    }
}
