//! Application error type and its HTTP representation.
//!
//! Every client-facing failure is rendered as `{"error": "<message>"}`. The
//! error kind is not exposed beyond the message string.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors produced while handling a redirector request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted target could not be parsed as an absolute URL.
    #[error("unparsable url")]
    InvalidUrl { input: Option<String> },

    /// The `expires` parameter is not a non-negative integer.
    #[error("Expires must be a non-negative integer")]
    InvalidTtl { input: String },

    #[error("No id")]
    MissingId,

    #[error("Not found")]
    NotFound { id: String },

    #[error("Expired")]
    Expired { id: String },

    #[error("Invalid path")]
    InvalidPath { path: String },

    /// The query string could not be decoded into request parameters.
    #[error("Invalid query string")]
    InvalidQuery(#[from] QueryRejection),

    /// Every generated id collided with an existing row.
    #[error("Failed to generate unique id")]
    IdSpaceExhausted { attempts: usize },

    /// Store failure. The source is logged, never returned to the client.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    /// HTTP status for this error.
    ///
    /// Validation and lookup failures are all 400; only store-side problems
    /// map to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::IdSpaceExhausted { .. } | Self::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Database(source) => tracing::error!(error = %source, "Store operation failed"),
            Self::IdSpaceExhausted { attempts } => {
                tracing::error!(attempts, "Gave up generating a unique id")
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
