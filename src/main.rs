//! photon-gateway CLI entry point
//!
//! HTTP gateway for the Photon geocoding service

use photon_gateway::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
