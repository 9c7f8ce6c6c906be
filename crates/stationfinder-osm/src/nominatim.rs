//! HTTP client for the Nominatim `/search` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use stationfinder_core::Coordinate;

use crate::error::GeocodingError;
use crate::Geocoder;

/// One entry of the `format=jsonv2` search response. Nominatim encodes
/// coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Client for a Nominatim instance.
///
/// Use [`NominatimClient::new`] with the public instance URL in production, or
/// a mock server URI in tests.
pub struct NominatimClient {
    client: Client,
    search_url: Url,
}

impl NominatimClient {
    /// # Errors
    ///
    /// Returns [`GeocodingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodingError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so `join` appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| GeocodingError::InvalidBaseUrl(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, search_url })
    }

    /// Builds the search URL for the free-text query `"<area>, <city>"`.
    fn build_url(&self, area: &str, city: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("{area}, {city}"))
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        url
    }

    /// Resolves `"<area>, <city>"` to the best-matching coordinate.
    ///
    /// # Errors
    ///
    /// - [`GeocodingError::Http`] on network failure or timeout.
    /// - [`GeocodingError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GeocodingError::Deserialize`] if the body is not the expected JSON.
    /// - [`GeocodingError::InvalidCoordinate`] if the match has non-numeric
    ///   coordinates.
    pub async fn geocode(&self, area: &str, city: &str) -> Result<Option<Coordinate>, GeocodingError> {
        let url = self.build_url(area, city);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodingError::Deserialize {
                context: format!("search(q={area}, {city})"),
                source: e,
            })?;

        let Some(place) = places.into_iter().next() else {
            tracing::info!(area, city, "geocoder found no match");
            return Ok(None);
        };

        let coordinate = parse_coordinate(&place.lat, &place.lon)?;
        tracing::debug!(
            area,
            city,
            %coordinate,
            display_name = place.display_name.as_deref().unwrap_or(""),
            "geocoded area"
        );
        Ok(Some(coordinate))
    }
}

impl Geocoder for NominatimClient {
    async fn resolve(&self, area: &str, city: &str) -> Result<Option<Coordinate>, GeocodingError> {
        self.geocode(area, city).await
    }
}

fn parse_coordinate(lat: &str, lon: &str) -> Result<Coordinate, GeocodingError> {
    match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
        (Ok(latitude), Ok(longitude)) if latitude.is_finite() && longitude.is_finite() => {
            Ok(Coordinate::new(latitude, longitude))
        }
        _ => Err(GeocodingError::InvalidCoordinate {
            lat: lat.to_string(),
            lon: lon.to_string(),
        }),
    }
}
