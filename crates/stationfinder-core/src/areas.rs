use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ConfigError;

/// The table the finder has always shipped with.
const BUILTIN_AREAS: &[(&str, &[&str])] = &[
    ("Kolkata", &["Salt Lake", "Park Street", "Dumdum", "New Town"]),
    ("Bengaluru", &["MG Road", "Whitefield", "Koramangala", "Indiranagar"]),
    ("Mumbai", &["Bandra", "Andheri", "Juhu", "Colaba"]),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("unknown area '{area}' for city '{city}'")]
    UnknownArea { city: String, area: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityAreas {
    pub name: String,
    pub areas: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AreasFile {
    pub cities: Vec<CityAreas>,
}

/// Immutable city → ordered areas mapping.
///
/// Built once at startup, either from [`AreaCatalog::builtin`] or from a YAML
/// file via [`load_area_catalog`], and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCatalog {
    cities: Vec<CityAreas>,
}

impl AreaCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        let cities = BUILTIN_AREAS
            .iter()
            .map(|(name, areas)| CityAreas {
                name: (*name).to_string(),
                areas: areas.iter().map(|a| (*a).to_string()).collect(),
            })
            .collect();
        Self { cities }
    }

    /// Builds a catalog from already-parsed city entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for empty names, empty area lists,
    /// or duplicates.
    pub fn from_cities(cities: Vec<CityAreas>) -> Result<Self, ConfigError> {
        validate_cities(&cities)?;
        Ok(Self { cities })
    }

    /// City names in configured order.
    #[must_use]
    pub fn list_cities(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    /// Areas for `city` in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCity`] if the city is not in the catalog.
    pub fn list_areas(&self, city: &str) -> Result<&[String], CatalogError> {
        self.find(city)
            .map(|c| c.areas.as_slice())
            .ok_or_else(|| CatalogError::UnknownCity(city.to_string()))
    }

    #[must_use]
    pub fn contains(&self, city: &str, area: &str) -> bool {
        self.find(city)
            .is_some_and(|c| c.areas.iter().any(|a| a == area))
    }

    fn find(&self, city: &str) -> Option<&CityAreas> {
        self.cities.iter().find(|c| c.name == city)
    }
}

impl Default for AreaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A validated `(city, area)` pair taken from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSelection {
    city: String,
    area: String,
}

impl AreaSelection {
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCity`] or [`CatalogError::UnknownArea`]
    /// when the pair is not in `catalog`.
    pub fn new(catalog: &AreaCatalog, city: &str, area: &str) -> Result<Self, CatalogError> {
        let areas = catalog.list_areas(city)?;
        if !areas.iter().any(|a| a == area) {
            return Err(CatalogError::UnknownArea {
                city: city.to_string(),
                area: area.to_string(),
            });
        }
        Ok(Self {
            city: city.to_string(),
            area: area.to_string(),
        })
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }
}

/// Load and validate the area catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_area_catalog(path: &Path) -> Result<AreaCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AreasFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_area_catalog(&content)
}

/// Parse and validate an area catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_area_catalog(yaml: &str) -> Result<AreaCatalog, ConfigError> {
    let file: AreasFile = serde_yaml::from_str(yaml).map_err(ConfigError::AreasFileParse)?;
    AreaCatalog::from_cities(file.cities)
}

fn validate_cities(cities: &[CityAreas]) -> Result<(), ConfigError> {
    if cities.is_empty() {
        return Err(ConfigError::Validation(
            "at least one city must be configured".to_string(),
        ));
    }

    let mut seen_cities = HashSet::new();

    for city in cities {
        if city.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "city name must be non-empty".to_string(),
            ));
        }

        if !seen_cities.insert(city.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate city: '{}'",
                city.name
            )));
        }

        if city.areas.is_empty() {
            return Err(ConfigError::Validation(format!(
                "city '{}' has no areas",
                city.name
            )));
        }

        let mut seen_areas = HashSet::new();
        for area in &city.areas {
            if area.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "city '{}' has an empty area name",
                    city.name
                )));
            }
            if !seen_areas.insert(area.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate area '{}' in city '{}'",
                    area, city.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "areas_test.rs"]
mod tests;
