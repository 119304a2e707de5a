pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use anyhow::Context;
use axum::Router;
use money_map_core::storage::json_store::JsonStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::ServerConfig;
use state::AppState;

/// REST routes plus the static web UI.
pub fn app(state: Arc<AppState>, public_dir: impl AsRef<std::path::Path>) -> Router {
    routes::router()
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}

/// Open the data directory and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = JsonStore::open(&config.data_dir)
        .await
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;
    let state = Arc::new(AppState::new(Arc::new(store), &config.settings()));
    if !state.spot_prices.has_provider() {
        info!("No goldapi key configured, spot prices will come from the cache");
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Money Map running at http://localhost:{}", config.port);

    axum::serve(listener, app(state, &config.public_dir))
        .await
        .context("Server error")
}
