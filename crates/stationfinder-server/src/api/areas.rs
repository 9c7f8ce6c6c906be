use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct CityAreasItem {
    pub city: String,
    pub areas: Vec<String>,
}

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let data = state
        .catalog
        .list_cities()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn list_areas(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<CityAreasItem>>, ApiError> {
    let areas = state
        .catalog
        .list_areas(&city)
        .map_err(|e| ApiError::new(req_id.0.clone(), "unknown_city", e.to_string()))?;

    Ok(Json(ApiResponse::new(
        CityAreasItem {
            city,
            areas: areas.to_vec(),
        },
        req_id.0,
    )))
}
