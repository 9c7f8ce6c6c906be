//! Domain types and pure logic for the parking & fuel station finder.
//!
//! Nothing in this crate performs network I/O. The HTTP clients live in
//! `stationfinder-osm`; the pipeline and web surface live in
//! `stationfinder-server`.

pub mod app_config;
pub mod areas;
pub mod classify;
pub mod config;
pub mod render;
pub mod types;

use thiserror::Error;

pub use app_config::AppConfig;
pub use areas::{load_area_catalog, AreaCatalog, AreaSelection, CatalogError, CityAreas};
pub use classify::{classify, classify_all};
pub use config::{load_app_config, load_app_config_from_env};
pub use render::{render, MapView, Marker, RenderError, TileLayer, DEFAULT_ZOOM};
pub use types::{AmenityPoint, Category, ClassifiedPoint, Coordinate, MarkerStyle, SearchResult};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read areas file {path}: {source}")]
    AreasFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse areas file: {0}")]
    AreasFileParse(#[source] serde_yaml::Error),

    #[error("areas config validation failed: {0}")]
    Validation(String),
}
