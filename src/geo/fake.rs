//! In-memory geocoding backend for tests

use crate::error::{Error, Result};
use crate::geo::{Feature, FeatureCollection, GeoBackend, ReverseParams, SearchParams};
use serde_json::json;
use std::sync::Mutex;

/// A request the fake backend received
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FakeCall {
    Search(SearchParams),
    Reverse(ReverseParams),
}

/// Backend that answers from a fixed feature list and records calls
pub(crate) struct FakeBackend {
    features: Vec<Feature>,
    failure: Option<String>,
    calls: Mutex<Vec<FakeCall>>,
}

impl FakeBackend {
    /// Answer every call with `features` (search honors `limit`)
    pub(crate) fn with_features(features: Vec<Feature>) -> Self {
        Self {
            features,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with an upstream error
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            features: Vec::new(),
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: FakeCall, limit: Option<u32>) -> Result<FeatureCollection> {
        self.calls.lock().unwrap().push(call);
        if let Some(message) = &self.failure {
            return Err(Error::Upstream(message.clone()));
        }
        let mut features = self.features.clone();
        if let Some(limit) = limit {
            features.truncate(limit as usize);
        }
        Ok(FeatureCollection { features })
    }
}

impl GeoBackend for FakeBackend {
    async fn search(&self, params: &SearchParams) -> Result<FeatureCollection> {
        self.respond(FakeCall::Search(params.clone()), params.limit)
    }

    async fn reverse(&self, params: &ReverseParams) -> Result<FeatureCollection> {
        self.respond(FakeCall::Reverse(params.clone()), None)
    }
}

/// Build a backend feature the way Photon shapes it
pub(crate) fn feature(name: &str, country: &str, lon: f64, lat: f64) -> Feature {
    serde_json::from_value(json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [lon, lat] },
        "properties": {
            "name": name,
            "country": country,
            "osm_id": 62422,
            "osm_type": "R",
            "osm_key": "place"
        }
    }))
    .unwrap()
}

/// Three features named "Berlin" in backend ranking order
pub(crate) fn berlin_features() -> Vec<Feature> {
    vec![
        feature("Berlin", "Germany", 13.3888599, 52.5170365),
        feature("Berlin", "United States", -71.7098, 44.4687),
        feature("Berlin", "United States", -89.0390, 43.9680),
    ]
}
