//! Reverse command handler

use crate::config::defaults::DEFAULT_FORMAT;
use crate::error::Result;
use crate::format::Lookup;
use crate::gateway::{Gateway, ReverseRequest};
use crate::geo::photon::PhotonBackend;
use clap::Args;
use std::path::Path;

/// Reverse command arguments
#[derive(Args)]
pub struct ReverseArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Language code for result names
    #[arg(long)]
    pub lang: Option<String>,

    /// Output format (json, text)
    #[arg(long, short = 'f', default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Base URL of the Photon backend
    #[arg(long)]
    pub backend_url: Option<String>,
}

/// Run the reverse command
pub async fn run(args: ReverseArgs, config_path: Option<&Path>) -> Result<()> {
    super::init_logging("warn");

    let mut config = super::load_config(config_path)?;
    if let Some(url) = args.backend_url {
        config.backend.url = url;
    }
    config.validate()?;

    let formatter = super::formatter(&args.format)?;
    let gateway = Gateway::new(PhotonBackend::new(&config.backend)?);

    let req = ReverseRequest {
        lat: args.lat,
        lon: args.lon,
        lang: args.lang,
    };
    let place = gateway.reverse(&req).await?;

    println!("{}", formatter.format(Lookup::One(&place))?);
    Ok(())
}
