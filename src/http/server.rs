//! HTTP server lifecycle.

use tokio::net::TcpListener;
use tracing::info;

use super::routes::router;
use crate::config::ServerConfig;
use crate::error::{BellsError, Result};
use crate::playback::Dispatcher;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Schedules cues on the host audio output.
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Creates new app state.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| BellsError::bind_failed(addr, e))?;

    serve(listener, state).await
}

/// Serves on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let local_addr = listener.local_addr().map_err(BellsError::server_failed)?;
    info!(
        addr = %local_addr,
        bells_file = %state.dispatcher.bells_file().display(),
        "HTTP server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(BellsError::server_failed)?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
