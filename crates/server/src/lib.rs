//! Strata Server - HTTP request layer for the strata file store
//!
//! Thin glue over `strata-core`: handlers decode JSON/query parameters,
//! delegate to [`strata_core::Store`], and map engine errors to HTTP
//! statuses through one [`ApiError`] type. No business logic lives here.
//!
//! ## Routes
//!
//! - `GET  /api/health`: liveness probe
//! - `GET  /api/fs/list`: ordered node tree for a path
//! - `GET  /api/fs/read`: full file content
//! - `POST /api/fs/save`, `/api/fs/write`: create/overwrite a file
//! - `POST /api/fs/rename`: move a file or directory
//! - `POST /api/fs/delete`: remove a file or directory tree
//! - `POST /api/fs/mkdir`: create a directory
//! - `GET  /api/fs/search`: name/content search under a path
//! - `POST /api/fs/snapshot`: duplicate the current revision
//! - `GET  /api/revisions`: HEAD plus the revision list
//! - `POST /api/revisions`: import a base64 ZIP as a new revision
//! - `GET  /api/revisions/file`: raw bytes of one revision-scoped file

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Request bodies (archive uploads in particular) are capped at 16 MiB.
const BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        // file service
        .route("/api/fs/list", get(routes::fs::list))
        .route("/api/fs/read", get(routes::fs::read))
        .route("/api/fs/save", post(routes::fs::write))
        .route("/api/fs/write", post(routes::fs::write))
        .route("/api/fs/rename", post(routes::fs::rename))
        .route("/api/fs/delete", post(routes::fs::delete))
        .route("/api/fs/mkdir", post(routes::fs::mkdir))
        .route("/api/fs/search", get(routes::fs::search))
        .route("/api/fs/snapshot", post(routes::revisions::snapshot))
        // revisions
        .route(
            "/api/revisions",
            get(routes::revisions::list).post(routes::revisions::create),
        )
        .route("/api/revisions/file", get(routes::revisions::file))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
