//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::path::Path;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "backend.url")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;

    if args.path {
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save_to(&path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_from(&path)?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            print!("{}", render_config(&config));
        }

        // Key only: show that value
        (Some(key), None) => match config.get(key) {
            Some(value) => println!("{}", value),
            None => {
                let keys = Config::available_keys().join("\n  ");
                return Err(Error::Config(format!(
                    "Unknown config key: {}\n\nAvailable keys:\n  {}",
                    key, keys
                )));
            }
        },

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config(
                "Must specify a key to set a value".to_string(),
            ));
        }
    }

    Ok(())
}

/// Render all configuration values in TOML-like form
fn render_config(config: &Config) -> String {
    let mut out = String::new();

    out.push_str("[server]\n");
    out.push_str(&format!("host = \"{}\"\n", config.server.host));
    out.push_str(&format!("port = {}\n", config.server.port));
    out.push('\n');

    out.push_str("[backend]\n");
    out.push_str(&format!("url = \"{}\"\n", config.backend.url));
    out.push_str(&format!("timeout_secs = {}\n", config.backend.timeout_secs));
    out.push_str(&format!("user_agent = \"{}\"\n", config.backend.user_agent));

    out
}
