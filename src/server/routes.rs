//! HTTP API routes
//!
//! Defines all REST API endpoints for the server. Every geocoding endpoint
//! accepts GET with a query string or POST with a JSON body carrying the
//! same fields.

use crate::constants::routes as paths;
use crate::constants::service;
use crate::error::Error;
use crate::gateway::{LocationSearchRequest, ReverseRequest, SearchRequest};
use crate::geo::{GeoBackend, PlaceResult};
use crate::server::middleware::log_request;
use crate::server::state::AppState;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router<B: GeoBackend + 'static>(state: Arc<AppState<B>>) -> Router {
    Router::new()
        .route(paths::ROOT, get(root_handler))
        .route(paths::HEALTH, get(health_handler::<B>))
        .route(paths::SEARCH, get(search_get::<B>).post(search_post::<B>))
        .route(
            paths::SEARCH_LOCATION,
            get(location_search_get::<B>).post(location_search_post::<B>),
        )
        .route(paths::REVERSE, get(reverse_get::<B>).post(reverse_post::<B>))
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(log_request))
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub status: u16,
}

impl ApiError {
    fn invalid_input(message: String) -> Self {
        Error::InvalidInput(message).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError {
            error: err.to_string(),
            code: err.code().to_string(),
            status: err.status_code().as_u16(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid_input(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_input(rejection.body_text())
    }
}

/// Service metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointsInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointsInfo {
    pub search: String,
    pub search_with_location: String,
    pub reverse_geocode: String,
}

/// Root endpoint with API information
///
/// GET /
async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: service::MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointsInfo {
            search: paths::SEARCH.to_string(),
            search_with_location: paths::SEARCH_LOCATION.to_string(),
            reverse_geocode: paths::REVERSE.to_string(),
        },
    })
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Health check endpoint
///
/// GET /health
async fn health_handler<B: GeoBackend + 'static>(
    State(state): State<Arc<AppState<B>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: service::NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
    })
}

/// Search for places by name
///
/// GET /search?query=..&limit=..&lang=..
async fn search_get<B: GeoBackend + 'static>(
    State(state): State<Arc<AppState<B>>>,
    query: Result<Query<SearchRequest>, QueryRejection>,
) -> Result<Json<Vec<PlaceResult>>, ApiError> {
    let Query(req) = query?;
    Ok(Json(state.gateway.search(&req).await?))
}

/// POST /search
async fn search_post<B: GeoBackend + 'static>(
    State(state): State<Arc<AppState<B>>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<PlaceResult>>, ApiError> {
    let Json(req) = body?;
    Ok(Json(state.gateway.search(&req).await?))
}

/// Search with location priority
///
/// GET /search/location?query=..&lat=..&lon=..
async fn location_search_get<B: GeoBackend + 'static>(
    State(state): State<Arc<AppState<B>>>,
    query: Result<Query<LocationSearchRequest>, QueryRejection>,
) -> Result<Json<Vec<PlaceResult>>, ApiError> {
    let Query(req) = query?;
    Ok(Json(state.gateway.search_with_location(&req).await?))
}

/// POST /search/location
async fn location_search_post<B: GeoBackend + 'static>(
    State(state): State<Arc<AppState<B>>>,
    body: Result<Json<LocationSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<PlaceResult>>, ApiError> {
    let Json(req) = body?;
    Ok(Json(state.gateway.search_with_location(&req).await?))
}

/// Reverse geocoding
///
/// GET /reverse?lat=..&lon=..
async fn reverse_get<B: GeoBackend + 'static>(
    State(state): State<Arc<AppState<B>>>,
    query: Result<Query<ReverseRequest>, QueryRejection>,
) -> Result<Json<PlaceResult>, ApiError> {
    let Query(req) = query?;
    Ok(Json(state.gateway.reverse(&req).await?))
}

/// POST /reverse
async fn reverse_post<B: GeoBackend + 'static>(
    State(state): State<Arc<AppState<B>>>,
    body: Result<Json<ReverseRequest>, JsonRejection>,
) -> Result<Json<PlaceResult>, ApiError> {
    let Json(req) = body?;
    Ok(Json(state.gateway.reverse(&req).await?))
}

async fn fallback_handler(uri: Uri) -> ApiError {
    ApiError {
        error: format!("No route for {}", uri.path()),
        code: "NOT_FOUND".to_string(),
        status: StatusCode::NOT_FOUND.as_u16(),
    }
}
