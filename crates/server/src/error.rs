//! Maps engine errors to structured HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use strata_core::Error;
use thiserror::Error as ThisError;

/// Request-level error type; everything a handler can fail with.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] Error),

    /// Request was malformed before it ever reached the store.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Task join failures and other server-side surprises.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(err) => match err {
                Error::NotFound(_) => StatusCode::NOT_FOUND,
                Error::PathEscape(_) | Error::InvalidArchive(_) => StatusCode::BAD_REQUEST,
                Error::PermissionDenied(_) => StatusCode::FORBIDDEN,
                Error::CorruptHead(_)
                | Error::AllocationConflict(_)
                | Error::NotInitialized(_)
                | Error::AlreadyInitialized(_)
                | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
