//! Serve command handler
//!
//! Starts the HTTP server in foreground mode.

use crate::error::Result;
use crate::server;
use clap::Args;
use std::path::Path;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Base URL of the Photon backend
    #[arg(long)]
    pub backend_url: Option<String>,
}

/// Run the serve command
pub async fn run(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    super::init_logging("info");

    // Load and optionally override config
    let mut config = super::load_config(config_path)?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.backend_url {
        config.backend.url = url;
    }
    config.validate()?;

    info!(
        "Starting photon-gateway v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    server::run(config).await
}
