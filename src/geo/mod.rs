//! Geocoding module
//!
//! Backend wire types (GeoJSON feature collections), the simplified
//! `PlaceResult` shape served to clients, and the `GeoBackend` trait.

#[cfg(test)]
pub(crate) mod fake;
pub mod photon;

use crate::constants::geo::{LAT_RANGE, LON_RANGE};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    /// NaN is rejected by both checks.
    pub fn validate(&self) -> Result<()> {
        if !LAT_RANGE.contains(&self.lat) {
            return Err(Error::InvalidInput(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !LON_RANGE.contains(&self.lon) {
            return Err(Error::InvalidInput(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }
}

/// Validated parameters for a forward search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub limit: Option<u32>,
    pub lang: Option<String>,
    /// Location bias; results near this point rank higher
    pub bias: Option<Coordinates>,
}

/// Validated parameters for a reverse lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseParams {
    pub coords: Coordinates,
    pub lang: Option<String>,
}

/// Backend response: a GeoJSON feature collection
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// One backend place record
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: PlaceProperties,
}

/// Point geometry, `[longitude, latitude]`
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}

/// Backend-supplied place properties
///
/// The well-known fields are typed; anything else the backend sends is
/// kept in `extra` and passed through unchanged. A known field whose value
/// has an unexpected type also stays in `extra` instead of failing the
/// whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct PlaceProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    /// Bounding box `[west, south, east, north]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<[f64; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countrycode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for PlaceProperties {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            name: take_typed(&mut map, "name"),
            country: take_typed(&mut map, "country"),
            city: take_typed(&mut map, "city"),
            state: take_typed(&mut map, "state"),
            postcode: take_typed(&mut map, "postcode"),
            osm_id: take_typed(&mut map, "osm_id"),
            osm_type: take_typed(&mut map, "osm_type"),
            extent: take_typed(&mut map, "extent"),
            countrycode: take_typed(&mut map, "countrycode"),
            extra: map,
        }
    }
}

/// Remove `key` from `map` if its value decodes as `T`
///
/// Nulls are dropped; values of any other type are left in place.
fn take_typed<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    match map.get(key) {
        None => None,
        Some(Value::Null) => {
            map.remove(key);
            None
        }
        Some(value) => {
            let typed = T::deserialize(value).ok()?;
            map.remove(key);
            Some(typed)
        }
    }
}

/// Simplified place shape returned to gateway clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub name: Option<String>,
    pub country: Option<String>,
    /// `[longitude, latitude]`, copied verbatim from the backend geometry
    pub coordinates: [f64; 2],
    pub properties: PlaceProperties,
}

impl From<Feature> for PlaceResult {
    fn from(feature: Feature) -> Self {
        Self {
            name: feature.properties.name.clone(),
            country: feature.properties.country.clone(),
            coordinates: feature.geometry.coordinates,
            properties: feature.properties,
        }
    }
}

impl PlaceResult {
    /// Longitude component of `coordinates`
    pub fn lon(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude component of `coordinates`
    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Map every feature to a `PlaceResult`, keeping backend order
pub fn into_places(collection: FeatureCollection) -> Vec<PlaceResult> {
    collection.features.into_iter().map(PlaceResult::from).collect()
}

/// Trait for geocoding backends
///
/// Each call performs exactly one request against the backend.
pub trait GeoBackend: Send + Sync {
    /// Forward search, optionally biased towards a location
    fn search(
        &self,
        params: &SearchParams,
    ) -> impl std::future::Future<Output = Result<FeatureCollection>> + Send;

    /// Reverse lookup of a coordinate pair
    fn reverse(
        &self,
        params: &ReverseParams,
    ) -> impl std::future::Future<Output = Result<FeatureCollection>> + Send;
}
