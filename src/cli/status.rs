//! Status command handler
//!
//! Shows whether a gateway is running and whether the backend answers.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::gateway::{Gateway, SearchRequest};
use crate::geo::photon::PhotonBackend;
use crate::server::routes::HealthResponse;
use clap::Args;
use reqwest::StatusCode;
use std::path::Path;
use std::time::{Duration, Instant};

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Also send one test search to the backend
    #[arg(long, short = 'b')]
    pub backend: bool,

    /// Query used for the backend test search
    #[arg(long, default_value = "Berlin")]
    pub query: String,
}

/// What the health endpoint answered
#[derive(Debug)]
pub enum ServerStatus {
    /// Health endpoint answered 2xx; body is absent if it didn't parse
    Running(Option<HealthResponse>),
    /// Health endpoint answered with a non-success status
    Error(StatusCode),
    /// Connection failed or timed out
    NotRunning,
}

/// Run the status command
pub async fn run(args: StatusArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;

    println!("photon-gateway v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let addr = config.server_addr();
    match server_status(&addr, config.backend.timeout()).await? {
        ServerStatus::Running(health) => {
            println!("Server: RUNNING on {}", addr);
            if let Some(health) = health {
                println!("  Status: {}", health.status);
                println!("  Version: {}", health.version);
                println!("  Uptime: {}s", health.uptime_secs);
            }
        }
        ServerStatus::Error(status) => println!("Server: ERROR (status {})", status),
        ServerStatus::NotRunning => println!("Server: NOT RUNNING on {}", addr),
    }
    println!();

    if args.backend {
        check_backend_status(&config, &args.query).await?;
    }

    Ok(())
}

/// Ask the gateway at `addr` ("host:port") for its health
pub async fn server_status(addr: &str, timeout: Duration) -> Result<ServerStatus> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

    let url = format!("http://{}/health", addr);
    let status = match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            ServerStatus::Running(response.json::<HealthResponse>().await.ok())
        }
        Ok(response) => ServerStatus::Error(response.status()),
        Err(_) => ServerStatus::NotRunning,
    };
    Ok(status)
}

/// Send one search to the backend and report the outcome
async fn check_backend_status(config: &Config, query: &str) -> Result<()> {
    let gateway = Gateway::new(PhotonBackend::new(&config.backend)?);
    let req = SearchRequest {
        limit: Some(1),
        ..SearchRequest::new(query)
    };

    println!("Backend: {}", config.backend.url);
    let start = Instant::now();
    match gateway.search(&req).await {
        Ok(places) => println!(
            "  OK: {} result(s) in {}ms",
            places.len(),
            start.elapsed().as_millis()
        ),
        Err(e) => println!("  FAILED: {}", e),
    }

    Ok(())
}
