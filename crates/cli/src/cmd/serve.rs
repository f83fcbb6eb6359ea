//! Run the HTTP server

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use std::sync::Arc;
use strata_core::Store;
use strata_server::{router, AppState};
use tower_http::cors::CorsLayer;

pub async fn run(root: &Path, host: &str, port: u16) -> Result<()> {
    // 1. Open the store, creating it on first startup
    let store = Store::open_or_init(root)
        .with_context(|| format!("failed to open store at {}", root.display()))?;

    // 2. Assemble the router
    let mut app = router(AppState::new(Arc::new(store)));
    if std::env::var("STRATA_CORS_PERMISSIVE").is_ok() {
        app = app.layer(CorsLayer::permissive());
    }

    // 3. Bind and serve
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    println!(
        "{} {} on http://{}",
        "Serving".green().bold(),
        root.display().to_string().cyan(),
        listener.local_addr()?
    );
    tracing::info!(root = %root.display(), addr = %addr, "server started");

    axum::serve(listener, app).await.context("server error")
}
