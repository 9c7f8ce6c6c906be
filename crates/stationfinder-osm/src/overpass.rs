//! HTTP client for the Overpass interpreter.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use stationfinder_core::{AmenityPoint, Coordinate};

use crate::error::AmenityFetchError;
use crate::AmenitySource;

/// Search radius around the resolved area, in meters.
pub const DEFAULT_RADIUS_METERS: u32 = 5000;

/// Tag predicates the query filters on, as `(key, value)`.
const AMENITY_FILTERS: &[(&str, &str)] = &[("amenity", "parking"), ("amenity", "fuel")];

/// Remark prefix Overpass uses when it aborts a query but still answers 200.
const RUNTIME_ERROR_PREFIX: &str = "runtime error";

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
    /// Set by Overpass when the query ran out of time or memory server-side.
    #[serde(default)]
    remark: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    tags: BTreeMap<String, serde_json::Value>,
}

impl OverpassElement {
    fn into_point(self) -> Option<AmenityPoint> {
        let (Some(latitude), Some(longitude)) = (self.lat, self.lon) else {
            tracing::debug!(id = ?self.id, "skipping overpass element without coordinates");
            return None;
        };
        let tags = self
            .tags
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect();
        Some(AmenityPoint {
            latitude,
            longitude,
            tags,
        })
    }
}

/// Builds the Overpass QL query for parking and fuel nodes within
/// `radius_meters` of `center`.
#[must_use]
pub fn build_query(center: Coordinate, radius_meters: u32) -> String {
    let lat = center.latitude;
    let lon = center.longitude;
    let nodes: String = AMENITY_FILTERS
        .iter()
        .map(|(key, value)| {
            format!("node[\"{key}\"=\"{value}\"](around:{radius_meters},{lat},{lon});")
        })
        .collect();
    format!("[out:json];({nodes});out;")
}

/// Client for an Overpass API interpreter endpoint.
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
}

impl OverpassClient {
    /// `endpoint` is the full interpreter URL, e.g.
    /// `https://overpass-api.de/api/interpreter`.
    ///
    /// # Errors
    ///
    /// Returns [`AmenityFetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AmenityFetchError::InvalidBaseUrl`] if
    /// `endpoint` is not a valid URL.
    pub fn new(endpoint: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, AmenityFetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        let endpoint = Url::parse(endpoint).map_err(|e| {
            AmenityFetchError::InvalidBaseUrl(format!("invalid endpoint URL '{endpoint}': {e}"))
        })?;
        Ok(Self { client, endpoint })
    }

    /// Fetches parking and fuel nodes around `center` in a single request.
    ///
    /// Zero matches is an empty vector, not an error. Elements without a
    /// position are dropped, and non-string tag values are ignored.
    ///
    /// # Errors
    ///
    /// - [`AmenityFetchError::Http`] on network failure or timeout.
    /// - [`AmenityFetchError::UnexpectedStatus`] on a non-2xx status.
    /// - [`AmenityFetchError::Deserialize`] if the body is not the expected JSON.
    /// - [`AmenityFetchError::Remote`] if Overpass reports a runtime error remark.
    pub async fn fetch(
        &self,
        center: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<AmenityPoint>, AmenityFetchError> {
        let query = build_query(center, radius_meters);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AmenityFetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| AmenityFetchError::Deserialize {
                context: format!("overpass(around:{radius_meters},{center})"),
                source: e,
            })?;

        if let Some(remark) = parsed.remark {
            if remark.starts_with(RUNTIME_ERROR_PREFIX) {
                return Err(AmenityFetchError::Remote { remark });
            }
            tracing::warn!(remark = %remark, "overpass returned a remark; results may be partial");
        }

        let total = parsed.elements.len();
        let points: Vec<AmenityPoint> = parsed
            .elements
            .into_iter()
            .filter_map(OverpassElement::into_point)
            .collect();
        tracing::debug!(%center, radius_meters, total, kept = points.len(), "overpass query complete");
        Ok(points)
    }
}

impl AmenitySource for OverpassClient {
    async fn fetch_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<AmenityPoint>, AmenityFetchError> {
        self.fetch(center, radius_meters).await
    }
}
