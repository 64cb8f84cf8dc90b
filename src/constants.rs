//! Centralized constants for the photon-gateway crate
//!
//! Values shared between the HTTP layer, the backend client and the CLI.

/// Service identity
pub mod service {
    /// Name reported by the health endpoint
    pub const NAME: &str = "photon-gateway";

    /// Message reported by the root endpoint
    pub const MESSAGE: &str = "Geocoding API";
}

/// External API endpoints
pub mod api {
    /// Public Photon instance operated by komoot
    pub const PHOTON_URL: &str = "https://photon.komoot.io";

    /// Photon forward search path
    pub const SEARCH_PATH: &str = "/api/";

    /// Photon reverse geocoding path
    pub const REVERSE_PATH: &str = "/reverse";
}

/// Gateway HTTP routes
pub mod routes {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const SEARCH: &str = "/search";
    pub const SEARCH_LOCATION: &str = "/search/location";
    pub const REVERSE: &str = "/reverse";
}

/// Geographic constants
pub mod geo {
    /// Valid latitude range in degrees
    pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

    /// Valid longitude range in degrees
    pub const LON_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
}
