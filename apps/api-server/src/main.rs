//! # DevOps API Server
//!
//! HTTP entry point.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env (HOST, PORT, SERVICE_NAME) ──► ServerConfig                        │
//! │                                         │                               │
//! │  Store::seeded() ──────────────────► AppState ──► Router ──► axum::serve│
//! │                                                               │         │
//! │                                       Ctrl+C / SIGTERM ───────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use devops_api_server::{build_router, AppState, ServerConfig};
use devops_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting DevOps API server...");

    let config = ServerConfig::load().context("loading server configuration")?;
    let addr = config.socket_addr();
    info!(%addr, service = %config.service_name, "Configuration loaded");

    let state = AppState::new(Store::seeded(), config);
    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber, honoring `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,devops_api_server=debug,devops_store=debug,tower_http=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
