//! Inbound request types and their validation
//!
//! The same structs are read from a query string (GET) or a JSON body
//! (POST), so both variants validate identically.

use crate::error::{Error, Result};
use crate::geo::{Coordinates, ReverseParams, SearchParams};
use serde::{Deserialize, Serialize};

/// Place search by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search query (place name)
    pub query: String,
    /// Maximum number of results
    #[serde(default)]
    pub limit: Option<u32>,
    /// Language code
    #[serde(default)]
    pub lang: Option<String>,
}

/// Place search biased towards a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSearchRequest {
    pub query: String,
    /// Latitude for location priority
    pub lat: f64,
    /// Longitude for location priority
    pub lon: f64,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Reverse geocoding of a coordinate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseRequest {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub lang: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            lang: None,
        }
    }

    /// Validate and convert to backend parameters
    pub fn to_params(&self) -> Result<SearchParams> {
        Ok(SearchParams {
            query: validate_query(&self.query)?,
            limit: validate_limit(self.limit)?,
            lang: normalize_lang(self.lang.as_deref()),
            bias: None,
        })
    }
}

impl LocationSearchRequest {
    pub fn new(query: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            query: query.into(),
            lat,
            lon,
            limit: None,
            lang: None,
        }
    }

    pub fn to_params(&self) -> Result<SearchParams> {
        let query = validate_query(&self.query)?;
        let bias = Coordinates::new(self.lat, self.lon);
        bias.validate()?;

        Ok(SearchParams {
            query,
            limit: validate_limit(self.limit)?,
            lang: normalize_lang(self.lang.as_deref()),
            bias: Some(bias),
        })
    }
}

impl ReverseRequest {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            lang: None,
        }
    }

    pub fn to_params(&self) -> Result<ReverseParams> {
        let coords = Coordinates::new(self.lat, self.lon);
        coords.validate()?;

        Ok(ReverseParams {
            coords,
            lang: normalize_lang(self.lang.as_deref()),
        })
    }
}

fn validate_query(query: &str) -> Result<String> {
    if query.trim().is_empty() {
        return Err(Error::InvalidInput("query must not be empty".to_string()));
    }
    Ok(query.to_string())
}

fn validate_limit(limit: Option<u32>) -> Result<Option<u32>> {
    match limit {
        Some(0) => Err(Error::InvalidInput(
            "limit must be a positive integer".to_string(),
        )),
        other => Ok(other),
    }
}

// Empty language codes are treated as unset
fn normalize_lang(lang: Option<&str>) -> Option<String> {
    lang.map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}
