//! Geocode gateway
//!
//! Validates a request, makes exactly one backend call and reshapes the
//! answer into `PlaceResult` values. No retries, no caching.

pub mod request;

use crate::error::{Error, Result};
use crate::geo::{into_places, GeoBackend, PlaceResult};
pub use request::{LocationSearchRequest, ReverseRequest, SearchRequest};
use tracing::debug;

/// The gateway over one geocoding backend
#[derive(Debug, Clone)]
pub struct Gateway<B> {
    backend: B,
}

impl<B: GeoBackend> Gateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The wrapped backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Search for places by name
    ///
    /// An empty result list is a valid answer, not an error.
    pub async fn search(&self, req: &SearchRequest) -> Result<Vec<PlaceResult>> {
        let params = req.to_params()?;
        let collection = self.backend.search(&params).await?;
        debug!(query = %params.query, results = collection.features.len(), "search");
        Ok(into_places(collection))
    }

    /// Search for places, ranking those near `lat`/`lon` higher
    pub async fn search_with_location(
        &self,
        req: &LocationSearchRequest,
    ) -> Result<Vec<PlaceResult>> {
        let params = req.to_params()?;
        let collection = self.backend.search(&params).await?;
        debug!(
            query = %params.query,
            lat = req.lat,
            lon = req.lon,
            results = collection.features.len(),
            "location search"
        );
        Ok(into_places(collection))
    }

    /// Reverse geocode to the single best match
    pub async fn reverse(&self, req: &ReverseRequest) -> Result<PlaceResult> {
        let params = req.to_params()?;
        let collection = self.backend.reverse(&params).await?;
        debug!(lat = req.lat, lon = req.lon, results = collection.features.len(), "reverse");

        collection
            .features
            .into_iter()
            .next()
            .map(PlaceResult::from)
            .ok_or_else(|| {
                Error::NotFound("No location found for the given coordinates".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::fake::{berlin_features, feature, FakeBackend, FakeCall};
    use crate::geo::Coordinates;
    use approx::assert_relative_eq;

    #[tokio::test]
    async fn test_search_respects_limit_and_order() {
        let gateway = Gateway::new(FakeBackend::with_features(berlin_features()));
        let req = SearchRequest {
            limit: Some(2),
            ..SearchRequest::new("Berlin")
        };

        let places = gateway.search(&req).await.unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].country.as_deref(), Some("Germany"));
        assert_eq!(places[1].country.as_deref(), Some("United States"));
        // [lon, lat], exactly as the backend sent it
        assert_relative_eq!(places[0].coordinates[0], 13.3888599);
        assert_relative_eq!(places[0].coordinates[1], 52.5170365);
        assert_relative_eq!(places[1].coordinates[0], -71.7098);
    }

    #[tokio::test]
    async fn test_search_empty_result_is_ok() {
        let gateway = Gateway::new(FakeBackend::with_features(vec![]));
        let places = gateway.search(&SearchRequest::new("Nowhere")).await.unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_search_makes_no_backend_call() {
        let gateway = Gateway::new(FakeBackend::with_features(berlin_features()));
        let err = gateway.search(&SearchRequest::new("")).await.unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(gateway.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_makes_one_backend_call() {
        let gateway = Gateway::new(FakeBackend::with_features(berlin_features()));
        gateway.search(&SearchRequest::new("Berlin")).await.unwrap();
        assert_eq!(gateway.backend().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_location_search_passes_bias() {
        let gateway = Gateway::new(FakeBackend::with_features(berlin_features()));
        let req = LocationSearchRequest::new("Berlin", 52.3879, 13.0582);

        let places = gateway.search_with_location(&req).await.unwrap();
        assert_eq!(places.len(), 3);

        match &gateway.backend().calls()[..] {
            [FakeCall::Search(params)] => {
                assert_eq!(params.bias, Some(Coordinates::new(52.3879, 13.0582)));
                assert_eq!(params.query, "Berlin");
            }
            other => panic!("unexpected calls: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_location_search_out_of_range() {
        let gateway = Gateway::new(FakeBackend::with_features(berlin_features()));
        let req = LocationSearchRequest::new("Berlin", -91.0, 13.0);

        let err = gateway.search_with_location(&req).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(gateway.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_reverse_returns_first_feature() {
        let gateway = Gateway::new(FakeBackend::with_features(vec![
            feature("Friedrichshain", "Germany", 13.438596, 52.519854),
            feature("Berlin", "Germany", 13.3888599, 52.5170365),
        ]));

        let place = gateway.reverse(&ReverseRequest::new(52.519854, 13.438596)).await.unwrap();
        assert_eq!(place.name.as_deref(), Some("Friedrichshain"));
        assert_eq!(place.coordinates, [13.438596, 52.519854]);
    }

    #[tokio::test]
    async fn test_reverse_no_features_is_not_found() {
        let gateway = Gateway::new(FakeBackend::with_features(vec![]));
        let err = gateway.reverse(&ReverseRequest::new(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reverse_out_of_range() {
        let gateway = Gateway::new(FakeBackend::with_features(berlin_features()));
        let err = gateway.reverse(&ReverseRequest::new(200.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(gateway.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let gateway = Gateway::new(FakeBackend::failing("connection refused"));

        let err = gateway.search(&SearchRequest::new("Berlin")).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));

        let err = gateway.reverse(&ReverseRequest::new(1.0, 1.0)).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
    }
}
