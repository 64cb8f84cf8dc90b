//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::PHOTON_URL;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8000;

/// Default geocoding backend base URL
pub const DEFAULT_BACKEND_URL: &str = PHOTON_URL;

/// Default timeout for one backend request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default CLI output format
pub const DEFAULT_FORMAT: &str = "json";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "photon-gateway";

/// User-Agent sent to the backend
pub fn default_user_agent() -> String {
    format!("photon-gateway/{}", env!("CARGO_PKG_VERSION"))
}
