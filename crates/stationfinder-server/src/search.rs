//! The locate → fetch → classify → render pipeline behind the search button.
//!
//! [`run_search`] never fails: every error path ends in a [`SearchOutcome`]
//! variant carrying the message the page shows.

use serde::Serialize;
use stationfinder_core::{
    classify_all, render, AreaSelection, MapView, RenderError, SearchResult,
};
use stationfinder_osm::{AmenitySource, Geocoder};

pub const NO_RESULTS_WARNING: &str =
    "⚠️ No parking or fuel stations found, but here’s the map of the area.";
pub const AREA_NOT_FOUND: &str = "❌ Could not find the selected area. Try another one.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// The geocoder answered but had no match.
    NoMatch,
    /// The geocoder could not be reached or answered with garbage.
    ServiceError,
}

/// What the page renders for one search. Exactly one of these is shown.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A centered map with at least one marker.
    Found { map: MapView },
    /// A centered map with no markers and a warning. `fetch_error` is set when
    /// the amenity query itself failed.
    Empty {
        map: MapView,
        warning: &'static str,
        fetch_error: Option<String>,
    },
    /// No map; only an error message.
    Unresolved {
        reason: UnresolvedReason,
        message: String,
    },
}

/// Run one search for `selection`.
///
/// The amenity source is only queried once the geocoder has produced a
/// coordinate.
pub async fn run_search<G, A>(
    geocoder: &G,
    amenities: &A,
    selection: &AreaSelection,
    radius_meters: u32,
) -> SearchOutcome
where
    G: Geocoder,
    A: AmenitySource,
{
    let city = selection.city();
    let area = selection.area();

    let center = match geocoder.resolve(area, city).await {
        Ok(Some(center)) => center,
        Ok(None) => {
            tracing::info!(city, area, "area could not be geocoded");
            return SearchOutcome::Unresolved {
                reason: UnresolvedReason::NoMatch,
                message: AREA_NOT_FOUND.to_string(),
            };
        }
        Err(e) => {
            tracing::warn!(city, area, error = %e, "geocoding request failed");
            return SearchOutcome::Unresolved {
                reason: UnresolvedReason::ServiceError,
                message: format!("❌ Geocoding service unavailable: {e}"),
            };
        }
    };

    let (points, fetch_error) = match amenities.fetch_nearby(center, radius_meters).await {
        Ok(points) => (points, None),
        Err(e) => {
            tracing::warn!(city, area, %center, error = %e, "amenity query failed");
            (Vec::new(), Some(format!("Error fetching data: {e}")))
        }
    };

    let result = SearchResult {
        center: Some(center),
        points: classify_all(points),
    };
    tracing::info!(city, area, %center, count = result.points.len(), "search complete");

    present(&result, fetch_error)
}

/// Map a finished search onto the single state the page displays.
pub fn present(result: &SearchResult, fetch_error: Option<String>) -> SearchOutcome {
    match render(result.center, &result.points) {
        Err(RenderError::CenterUnresolved) => SearchOutcome::Unresolved {
            reason: UnresolvedReason::NoMatch,
            message: AREA_NOT_FOUND.to_string(),
        },
        Ok(map) if map.is_empty() => SearchOutcome::Empty {
            map,
            warning: NO_RESULTS_WARNING,
            fetch_error,
        },
        Ok(map) => SearchOutcome::Found { map },
    }
}
