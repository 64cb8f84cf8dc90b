//! HTTP server for photon-gateway
//!
//! Exposes the gateway operations as a REST API.

pub mod middleware;
pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::gateway::Gateway;
use crate::geo::photon::PhotonBackend;
use crate::geo::GeoBackend;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server against the configured Photon backend
///
/// Returns once the server shuts down (Ctrl-C).
pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address: {}", e)))?;

    let backend = PhotonBackend::new(&config.backend)?;
    info!(
        backend = %backend.base_url(),
        timeout_secs = config.backend.timeout_secs,
        "Using geocoding backend"
    );

    let state = Arc::new(AppState::new(Gateway::new(backend)));
    serve(addr, state).await
}

/// Serve the API for any backend on `addr`
pub async fn serve<B: GeoBackend + 'static>(addr: SocketAddr, state: Arc<AppState<B>>) -> Result<()> {
    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
