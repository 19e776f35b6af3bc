//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check (storage)
//! - everything else - [`crate::api::routes::public_routes`]: `/add`, `/get`, `/{id}`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing slashes are significant (`/abc/` is an invalid path), so no path
//! normalization layer is installed.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::public_routes()
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
