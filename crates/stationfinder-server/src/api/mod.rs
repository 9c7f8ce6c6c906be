mod areas;
mod search;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use stationfinder_core::AreaCatalog;
use stationfinder_osm::{NominatimClient, OverpassClient};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};
use crate::page;

/// Shared, read-only state. Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<AreaCatalog>,
    pub geocoder: Arc<NominatimClient>,
    pub amenities: Arc<OverpassClient>,
}

impl AppState {
    pub fn new(catalog: AreaCatalog, geocoder: NominatimClient, amenities: OverpassClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
            geocoder: Arc::new(geocoder),
            amenities: Arc::new(amenities),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, request_id: String) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "unknown_city" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/v1/health", get(health))
        .route("/api/v1/cities", get(areas::list_cities))
        .route("/api/v1/cities/{city}/areas", get(areas::list_areas))
        .route("/api/v1/search", get(search::search))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse::new(HealthData { status: "ok" }, req_id.0))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
