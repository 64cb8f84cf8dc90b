//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod reverse;
pub mod search;
pub mod serve;
pub mod status;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{get_formatter, OutputFormatter};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// HTTP gateway for the Photon geocoding service
#[derive(Parser)]
#[command(name = "photon-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (foreground)
    Serve(serve::ServeArgs),

    /// Search for places by name
    Search(search::SearchArgs),

    /// Look up the place at a coordinate pair
    Reverse(reverse::ReverseArgs),

    /// Check a running server and the backend
    Status(status::StatusArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path.as_deref();

    match cli.command {
        Commands::Serve(args) => serve::run(args, config_path).await,
        Commands::Search(args) => search::run(args, config_path).await,
        Commands::Reverse(args) => reverse::run(args, config_path).await,
        Commands::Status(args) => status::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path),
    }
}

/// Load config from `--config` or the default location
fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_from(&Config::resolve_path(path)?)
}

/// Initialize logging; `RUST_LOG` overrides `default_level`
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve an output formatter by name
fn formatter(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| Error::Config(format!("Unknown format: {}", name)))
}
