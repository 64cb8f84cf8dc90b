//! Search command handler
//!
//! Runs a place search directly against the backend, no server needed.

use crate::config::defaults::DEFAULT_FORMAT;
use crate::error::Result;
use crate::format::Lookup;
use crate::gateway::{Gateway, LocationSearchRequest, SearchRequest};
use crate::geo::photon::PhotonBackend;
use clap::Args;
use std::path::Path;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Place name to search for
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Language code for result names
    #[arg(long)]
    pub lang: Option<String>,

    /// Latitude to bias results towards
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude to bias results towards
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Output format (json, text)
    #[arg(long, short = 'f', default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Base URL of the Photon backend
    #[arg(long)]
    pub backend_url: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs, config_path: Option<&Path>) -> Result<()> {
    super::init_logging("warn");

    let mut config = super::load_config(config_path)?;
    if let Some(url) = args.backend_url {
        config.backend.url = url;
    }
    config.validate()?;

    let formatter = super::formatter(&args.format)?;
    let gateway = Gateway::new(PhotonBackend::new(&config.backend)?);

    let places = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => {
            let req = LocationSearchRequest {
                limit: args.limit,
                lang: args.lang,
                ..LocationSearchRequest::new(args.query, lat, lon)
            };
            gateway.search_with_location(&req).await?
        }
        _ => {
            let req = SearchRequest {
                query: args.query,
                limit: args.limit,
                lang: args.lang,
            };
            gateway.search(&req).await?
        }
    };

    println!("{}", formatter.format(Lookup::Many(&places))?);
    Ok(())
}
