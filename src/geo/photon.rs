//! Photon geocoding backend (komoot)
//!
//! Talks to a Photon-compatible service: `/api/` for forward search and
//! `/reverse` for reverse lookups. Both return a GeoJSON FeatureCollection.

use crate::config::BackendConfig;
use crate::constants::api::{REVERSE_PATH, SEARCH_PATH};
use crate::error::{Error, Result};
use crate::geo::{FeatureCollection, GeoBackend, ReverseParams, SearchParams};
use std::time::Duration;
use tracing::{debug, warn};

/// Photon geocoding backend
#[derive(Debug, Clone)]
pub struct PhotonBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PhotonBackend {
    /// Create a backend from config
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Self::with_timeout(&config.url, &config.user_agent, config.timeout())
    }

    /// Create a backend with an explicit request timeout
    pub fn with_timeout(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the forward search URL
    ///
    /// `limit` and `lang` are only sent when set; the backend applies its
    /// own defaults otherwise.
    pub fn search_url(&self, params: &SearchParams) -> String {
        let mut url = format!(
            "{}{}?q={}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(&params.query)
        );
        if let Some(limit) = params.limit {
            url.push_str(&format!("&limit={}", limit));
        }
        if let Some(lang) = &params.lang {
            url.push_str(&format!("&lang={}", urlencoding::encode(lang)));
        }
        if let Some(bias) = params.bias {
            url.push_str(&format!("&lat={}&lon={}", bias.lat, bias.lon));
        }
        url
    }

    /// Build the reverse lookup URL
    pub fn reverse_url(&self, params: &ReverseParams) -> String {
        let mut url = format!(
            "{}{}?lat={}&lon={}",
            self.base_url, REVERSE_PATH, params.coords.lat, params.coords.lon
        );
        if let Some(lang) = &params.lang {
            url.push_str(&format!("&lang={}", urlencoding::encode(lang)));
        }
        url
    }

    /// Issue one GET and decode the feature collection
    async fn fetch(&self, url: &str) -> Result<FeatureCollection> {
        debug!(url = %url, "Calling Photon");

        let response = self.client.get(url).send().await.map_err(|e| {
            let err = self.request_error(&e);
            warn!(url = %url, error = %err, "Photon request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status.as_u16(), "Photon returned an error status");
            return Err(Error::Upstream(format!("Photon returned status: {}", status)));
        }

        response.json::<FeatureCollection>().await.map_err(|e| {
            let err = if e.is_timeout() {
                self.request_error(&e)
            } else {
                Error::Upstream(format!("Failed to parse Photon response: {}", e))
            };
            warn!(url = %url, error = %err, "Photon response unusable");
            err
        })
    }

    fn request_error(&self, e: &reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Upstream(format!("Photon request timed out after {:?}", self.timeout))
        } else {
            Error::Upstream(format!("Photon request failed: {}", e))
        }
    }
}

impl GeoBackend for PhotonBackend {
    async fn search(&self, params: &SearchParams) -> Result<FeatureCollection> {
        self.fetch(&self.search_url(params)).await
    }

    async fn reverse(&self, params: &ReverseParams) -> Result<FeatureCollection> {
        self.fetch(&self.reverse_url(params)).await
    }
}
