use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A WGS84 position. Range validity is owned by whoever produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// A raw point of interest as returned by the amenity query. `tags` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Parking,
    Fuel,
    Unknown,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Parking => "Parking Station",
            Category::Fuel => "Fuel Station",
            Category::Unknown => "Unknown Station",
        }
    }

    #[must_use]
    pub fn style(self) -> MarkerStyle {
        match self {
            Category::Parking => MarkerStyle::Green,
            Category::Fuel => MarkerStyle::Red,
            Category::Unknown => MarkerStyle::Blue,
        }
    }

    /// Decorative prefix shown in marker popups.
    #[must_use]
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Category::Parking => Some("🅿️"),
            Category::Fuel => Some("⛽"),
            Category::Unknown => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Parking => write!(f, "parking"),
            Category::Fuel => write!(f, "fuel"),
            Category::Unknown => write!(f, "unknown"),
        }
    }
}

/// Marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    Green,
    Red,
    Blue,
}

impl MarkerStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerStyle::Green => "green",
            MarkerStyle::Red => "red",
            MarkerStyle::Blue => "blue",
        }
    }
}

impl std::fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedPoint {
    #[serde(flatten)]
    pub point: AmenityPoint,
    pub category: Category,
    pub label: &'static str,
    pub style: MarkerStyle,
}

/// Everything one search produced. Never outlives the request that built it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub center: Option<Coordinate>,
    pub points: Vec<ClassifiedPoint>,
}
