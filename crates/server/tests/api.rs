//! HTTP contract tests for the strata server

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::io::{Cursor, Write};
use std::sync::Arc;
use strata_core::Store;
use strata_server::{router, AppState};
use tempfile::TempDir;
use tower::ServiceExt;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn test_app() -> (TempDir, Router) {
    let temp = TempDir::new().unwrap();
    let store = Store::init(&temp.path().join("storage")).unwrap();
    let app = router(AppState::new(Arc::new(store)));
    (temp, app)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn zip_payload(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut writer = ZipWriter::new(Cursor::new(&mut buf));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    buf
}

#[tokio::test]
async fn test_health() {
    let (_temp, app) = test_app();

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_write_then_read_roundtrip() {
    let (_temp, app) = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/fs/write",
            json!({"path": "0/notes/a.txt", "content": "hello"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(get("/api/fs/read?path=0/notes/a.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("hello"));
}

#[tokio::test]
async fn test_list_tree_shape_and_order() {
    let (_temp, app) = test_app();

    for (path, content) in [("0/b.txt", "b"), ("0/A.txt", "a"), ("0/dir/x.txt", "x")] {
        app.clone()
            .oneshot(post_json(
                "/api/fs/write",
                json!({"path": path, "content": content}),
            ))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/api/fs/list?path=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let nodes = body_json(response).await;
    // Directory first, then files case-insensitively
    assert_eq!(nodes[0]["name"], "dir");
    assert_eq!(nodes[0]["isDirectory"], true);
    assert_eq!(nodes[0]["children"][0]["path"], "0/dir/x.txt");
    assert_eq!(nodes[1]["name"], "A.txt");
    assert_eq!(nodes[2]["name"], "b.txt");
}

#[tokio::test]
async fn test_list_missing_is_404() {
    let (_temp, app) = test_app();

    let response = app.oneshot(get("/api/fs/list?path=0/nowhere")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_read_traversal_is_400() {
    let (_temp, app) = test_app();

    let response = app
        .oneshot(get("/api/fs/read?path=../../etc/passwd"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_and_delete_status_codes() {
    let (_temp, app) = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/fs/write",
            json!({"path": "0/old.txt", "content": "c"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/fs/rename",
            json!({"from": "0/old.txt", "to": "0/new.txt"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(post_json("/api/fs/delete", json!({"path": "0/new.txt"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/api/fs/read?path=0/new.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_missing_source_is_404() {
    let (_temp, app) = test_app();

    let response = app
        .oneshot(post_json(
            "/api/fs/rename",
            json!({"from": "0/ghost.txt", "to": "0/x.txt"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_snapshot_and_revision_list() {
    let (_temp, app) = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/fs/snapshot")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 1}));

    let response = app.oneshot(get("/api/revisions")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({"latest": 1, "list": [0, 1]})
    );
}

#[tokio::test]
async fn test_archive_import_then_fetch_file() {
    let (_temp, app) = test_app();

    let payload = zip_payload(&[("X.txt", "archive says hi")]);
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/revisions",
            json!({"zip_b64": STANDARD.encode(&payload)}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 1}));

    let response = app
        .oneshot(get("/api/revisions/file?rev=1&path=X.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/octet-stream"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"archive says hi");
}

#[tokio::test]
async fn test_archive_import_bad_payload_is_400() {
    let (_temp, app) = test_app();

    let response = app
        .oneshot(post_json("/api/revisions", json!({"zip_b64": "@@@"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_revision_file_missing_is_404() {
    let (_temp, app) = test_app();

    let response = app
        .oneshot(get("/api/revisions/file?rev=0&path=absent.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_requires_query() {
    let (_temp, app) = test_app();

    let response = app
        .clone()
        .oneshot(get("/api/fs/search?path=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_finds_name_and_content() {
    let (_temp, app) = test_app();

    for (path, content) in [
        ("0/needle.txt", "plain"),
        ("0/other.txt", "a needle in a haystack"),
    ] {
        app.clone()
            .oneshot(post_json(
                "/api/fs/write",
                json!({"path": path, "content": content}),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(get("/api/fs/search?path=0&q=needle"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let hits = body_json(response).await;
    let matched: Vec<(&str, &str)> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| (h["path"].as_str().unwrap(), h["matched"].as_str().unwrap()))
        .collect();
    assert!(matched.contains(&("0/needle.txt", "name")));
    assert!(matched.contains(&("0/other.txt", "content")));
}

#[tokio::test]
async fn test_mkdir_then_list() {
    let (_temp, app) = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/fs/mkdir", json!({"path": "0/fresh/dir"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/fs/list?path=0/fresh")).await.unwrap();
    let nodes = body_json(response).await;
    assert_eq!(nodes[0]["name"], "dir");
    assert_eq!(nodes[0]["isDirectory"], true);
}
