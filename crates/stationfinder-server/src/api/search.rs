use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use stationfinder_core::AreaSelection;
use stationfinder_osm::DEFAULT_RADIUS_METERS;

use crate::middleware::RequestId;
use crate::search::{run_search, SearchOutcome};

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub city: Option<String>,
    pub area: Option<String>,
}

/// Runs one search. Upstream failures are part of the outcome, so the only
/// error response is for a selection outside the catalog.
pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchOutcome>>, ApiError> {
    let (Some(city), Some(area)) = (params.city, params.area) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "both city and area are required",
        ));
    };

    let selection = AreaSelection::new(&state.catalog, &city, &area).map_err(|e| {
        tracing::debug!(city = %city, area = %area, error = %e, "rejected selection outside catalog");
        ApiError::new(req_id.0.clone(), "validation_error", e.to_string())
    })?;

    let outcome = run_search(
        state.geocoder.as_ref(),
        state.amenities.as_ref(),
        &selection,
        DEFAULT_RADIUS_METERS,
    )
    .await;

    Ok(Json(ApiResponse::new(outcome, req_id.0)))
}
