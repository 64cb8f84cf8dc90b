//! photon-gateway: HTTP gateway for the Photon geocoding service
//!
//! Forwards place search, location-biased search and reverse geocoding to a
//! Photon backend and reshapes its GeoJSON answers into a small, stable
//! `PlaceResult` schema.
//!
//! ## Features
//!
//! - `GET`/`POST` `/search`, `/search/location`, `/reverse`
//! - One backend call per request, bounded by a timeout
//! - Stable error codes: 400 invalid input, 404 no result, 502 upstream failure
//! - CLI for serving, one-off lookups and config management
//!
//! ## Quick Start
//!
//! ```no_run
//! use photon_gateway::config::Config;
//! use photon_gateway::gateway::{Gateway, SearchRequest};
//! use photon_gateway::geo::photon::PhotonBackend;
//!
//! # async fn demo() -> photon_gateway::Result<()> {
//! let config = Config::default();
//! let gateway = Gateway::new(PhotonBackend::new(&config.backend)?);
//!
//! let req = SearchRequest { limit: Some(2), ..SearchRequest::new("Berlin") };
//! for place in gateway.search(&req).await? {
//!     println!("{:?} at {:?}", place.name, place.coordinates);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod gateway;
pub mod geo;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use gateway::Gateway;
pub use geo::{GeoBackend, PlaceResult};
