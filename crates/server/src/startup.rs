use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire stores, verifier and router from a loaded configuration.
pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(ServerState::from_config(cfg), build_cors())
}

/// Resolves once Ctrl+C is received.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => error!(event = "shutdown_signal", error = %e, "failed to listen for Ctrl+C"),
    }
}

/// Load configuration (file or env) and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::Config(e.to_string()))?;
    run_with(cfg, shutdown_signal()).await
}

/// Serve with an explicit configuration until `shutdown` resolves.
pub async fn run_with<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg);
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    info!(
        %addr,
        seed = cfg.seed.enabled,
        auth_project = ?cfg.auth.project_id,
        "seller api mock listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(%addr, "server stopped");
    Ok(())
}
