use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, response::Html, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::config::AppConfig;
use crate::search::CastleSearchService;

pub async fn run(config: AppConfig) -> Result<()> {
    let service = Arc::new(CastleSearchService::new(&config)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .nest("/api", api::router(service))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.port);
    axum::serve(listener, app)
        .await
        .with_context(|| "Server stopped unexpectedly")?;
    Ok(())
}

/// Serve the single-page UI
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
