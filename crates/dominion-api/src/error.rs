//! Error types for the governance API layer.
//!
//! [`ApiError`] carries the failure taxonomy the boundary promises its
//! callers: "you gave bad input" (400), "that name is taken" (409),
//! "absent" (404), and "something went wrong" (500) are always
//! distinguishable. Each variant converts into an Axum HTTP response via
//! its [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dominion_db::DbError;

/// Errors that can occur in the governance API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field was empty or invalid. The caller's fault; no
    /// store call was made.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A uniqueness rule rejected the request (e.g. the nation slug is
    /// taken). The caller must choose a different name.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The persistent store failed unexpectedly. Not retried; surfaced
    /// as a generic failure with the detail kept in the server log.
    #[error("store error: {0}")]
    Store(DbError),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Conflict(msg) => Self::Conflict(msg),
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Store(err) => {
                tracing::error!(error = %err, "Store failure surfaced to caller");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("something went wrong, try again"),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
