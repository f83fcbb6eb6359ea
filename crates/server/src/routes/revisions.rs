//! Revision handlers: snapshot, listing, archive import, scoped fetch

use super::blocking;
use crate::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct NewRevision {
    pub id: u64,
}

#[derive(Serialize)]
pub struct RevisionList {
    pub latest: u64,
    pub list: Vec<u64>,
}

#[derive(Deserialize)]
pub struct ImportBody {
    pub zip_b64: String,
}

#[derive(Deserialize)]
pub struct RevisionFileQuery {
    pub rev: u64,
    pub path: String,
}

pub async fn snapshot(State(state): State<AppState>) -> Result<Json<NewRevision>, ApiError> {
    let store = state.store.clone();
    let id = blocking(move || store.snapshot()).await?;
    Ok(Json(NewRevision { id }))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<RevisionList>, ApiError> {
    let store = state.store.clone();
    let (latest, list) = blocking(move || {
        let latest = store.current_revision()?;
        let list = store.list_revisions()?;
        Ok((latest, list))
    })
    .await?;
    Ok(Json(RevisionList { latest, list }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ImportBody>,
) -> Result<Json<NewRevision>, ApiError> {
    let store = state.store.clone();
    let id = blocking(move || store.import_archive(&body.zip_b64)).await?;
    Ok(Json(NewRevision { id }))
}

pub async fn file(
    State(state): State<AppState>,
    Query(query): Query<RevisionFileQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let bytes = blocking(move || store.read_revision_file(query.rev, &query.path)).await?;
    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        bytes,
    ))
}
