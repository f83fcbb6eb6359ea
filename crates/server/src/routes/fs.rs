//! File-service handlers: listing, reading, mutation, search

use super::blocking;
use crate::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::{Node, SearchHit};

#[derive(Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub path: String,
}

#[derive(Deserialize)]
pub struct PathContent {
    pub path: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

#[derive(Deserialize)]
pub struct PathBody {
    pub path: String,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub path: String,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<Vec<Node>>, ApiError> {
    let store = state.store.clone();
    let nodes = blocking(move || store.list(&query.path)).await?;
    Ok(Json(nodes))
}

pub async fn read(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<String>, ApiError> {
    let store = state.store.clone();
    let content = blocking(move || store.read(&query.path)).await?;
    Ok(Json(content))
}

pub async fn write(
    State(state): State<AppState>,
    Json(body): Json<PathContent>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.clone();
    blocking(move || store.write(&body.path, &body.content)).await?;
    Ok(StatusCode::CREATED)
}

pub async fn rename(
    State(state): State<AppState>,
    Json(body): Json<Rename>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.clone();
    blocking(move || store.rename(&body.from, &body.to)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Json(body): Json<PathBody>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.clone();
    blocking(move || store.delete(&body.path)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn mkdir(
    State(state): State<AppState>,
    Json(body): Json<PathBody>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.clone();
    blocking(move || store.mkdir(&body.path)).await?;
    Ok(StatusCode::CREATED)
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    if query.q.is_empty() {
        return Err(ApiError::BadRequest("missing ?q=".to_string()));
    }

    let store = state.store.clone();
    let hits = blocking(move || store.search(&query.path, &query.q)).await?;
    Ok(Json(hits))
}
