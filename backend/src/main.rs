use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nirmaan_server::{app, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().context("reading server configuration")?;
    let app = app(&config)?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.bind_addr, source })?;
    info!("Serving {} on http://{}", config.dist_dir.display(), config.bind_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)?;
    Ok(())
}
