use thiserror::Error;

/// Failures while resolving an area to a coordinate.
///
/// A service that answers but has no match is not an error; see
/// [`crate::Geocoder::resolve`].
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from geocoder")]
    UnexpectedStatus { status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service returned a match whose `lat`/`lon` are not numbers.
    #[error("geocoder returned an unparseable coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: String, lon: String },

    #[error("{0}")]
    InvalidBaseUrl(String),
}

/// Failures while querying nearby amenities.
#[derive(Debug, Error)]
pub enum AmenityFetchError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from amenity service")]
    UnexpectedStatus { status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Overpass answered 200 but aborted the query server-side.
    #[error("amenity service aborted the query: {remark}")]
    Remote { remark: String },

    #[error("{0}")]
    InvalidBaseUrl(String),
}
