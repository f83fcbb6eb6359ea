//! Route handlers
//!
//! Engine calls block on filesystem I/O for their full duration, so every
//! handler runs them on the blocking thread pool.

pub mod fs;
pub mod revisions;

use crate::ApiError;
use axum::http::StatusCode;

/// Liveness probe.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "healthy")
}

/// Run a store operation on the blocking pool and fold both failure layers
/// into [`ApiError`].
pub(crate) async fn blocking<T, F>(op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> strata_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?
        .map_err(ApiError::from)
}
