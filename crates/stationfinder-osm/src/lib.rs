//! Clients for the two OpenStreetMap services the finder depends on.
//!
//! [`NominatimClient`] resolves `"<area>, <city>"` to a coordinate and
//! [`OverpassClient`] lists parking and fuel nodes around it. Both make a
//! single attempt per call with a fixed timeout; callers decide how failures
//! surface to the user.

pub mod error;
pub mod nominatim;
pub mod overpass;

use std::future::Future;

use stationfinder_core::{AmenityPoint, Coordinate};

pub use error::{AmenityFetchError, GeocodingError};
pub use nominatim::NominatimClient;
pub use overpass::{build_query, OverpassClient, DEFAULT_RADIUS_METERS};

/// Resolves a catalog area to a coordinate.
pub trait Geocoder: Send + Sync {
    /// Returns `Ok(None)` when the service has no match for the area.
    fn resolve(
        &self,
        area: &str,
        city: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, GeocodingError>> + Send;
}

/// Lists parking and fuel amenities around a coordinate.
pub trait AmenitySource: Send + Sync {
    fn fetch_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
    ) -> impl Future<Output = Result<Vec<AmenityPoint>, AmenityFetchError>> + Send;
}

