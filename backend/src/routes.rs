use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::ServerError;

async fn health_check() -> &'static str {
    "OK"
}

/// Health probe plus the built site. Paths with no file behind them get
/// `index.html` so the client router can resolve them.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let index = config.dist_dir.join("index.html");
    if !index.is_file() {
        return Err(ServerError::MissingIndex(config.dist_dir.clone()));
    }

    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Ok(Router::new()
        .route("/api/health", get(health_check))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        ))
}
