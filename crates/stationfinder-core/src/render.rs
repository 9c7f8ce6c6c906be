//! Builds the map description the browser draws.
//!
//! The output is plain data; the page script turns it into Leaflet layers.

use serde::Serialize;
use thiserror::Error;

use crate::types::{ClassifiedPoint, Coordinate, MarkerStyle};

pub const DEFAULT_ZOOM: u8 = 14;

const DARK_TILES_NAME: &str = "cartodbdark_matter";
const DARK_TILES_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
const DARK_TILES_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("map center could not be resolved")]
    CenterUnresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
}

impl TileLayer {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: DARK_TILES_NAME,
            url: DARK_TILES_URL,
            attribution: DARK_TILES_ATTRIBUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: MarkerStyle,
    pub label: &'static str,
    pub glyph: Option<&'static str>,
}

impl From<&ClassifiedPoint> for Marker {
    fn from(point: &ClassifiedPoint) -> Self {
        Self {
            latitude: point.point.latitude,
            longitude: point.point.longitude,
            color: point.style,
            label: point.label,
            glyph: point.category.glyph(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub markers: Vec<Marker>,
}

impl MapView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Produce a map centered on `center` with one marker per point, in order.
///
/// An empty `points` slice yields a map without markers; that is a valid
/// result, not an error.
///
/// # Errors
///
/// Returns [`RenderError::CenterUnresolved`] when `center` is `None`.
pub fn render(
    center: Option<Coordinate>,
    points: &[ClassifiedPoint],
) -> Result<MapView, RenderError> {
    let center = center.ok_or(RenderError::CenterUnresolved)?;
    Ok(MapView {
        center,
        zoom: DEFAULT_ZOOM,
        tiles: TileLayer::dark(),
        markers: points.iter().map(Marker::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::types::AmenityPoint;

    fn classified(lat: f64, lon: f64, value: &str) -> ClassifiedPoint {
        classify(AmenityPoint {
            latitude: lat,
            longitude: lon,
            tags: [("amenity".to_string(), value.to_string())].into(),
        })
    }

    #[test]
    fn missing_center_is_an_error() {
        let points = vec![classified(1.0, 2.0, "fuel")];
        assert_eq!(render(None, &points), Err(RenderError::CenterUnresolved));
    }

    #[test]
    fn empty_points_still_render_centered_map() {
        let center = Coordinate::new(22.58, 88.42);
        let view = render(Some(center), &[]).expect("map should render");
        assert_eq!(view.center, center);
        assert_eq!(view.zoom, 14);
        assert!(view.is_empty());
    }

    #[test]
    fn uses_dark_basemap() {
        let view = render(Some(Coordinate::new(0.0, 0.0)), &[]).unwrap();
        assert_eq!(view.tiles.name, "cartodbdark_matter");
        assert!(view.tiles.url.contains("dark_all"));
    }

    #[test]
    fn one_marker_per_point_in_order() {
        let points = vec![
            classified(19.05, 72.83, "fuel"),
            classified(19.06, 72.84, "parking"),
            classified(19.07, 72.85, "bench"),
        ];
        let view = render(Some(Coordinate::new(19.06, 72.83)), &points).unwrap();

        assert_eq!(view.markers.len(), 3);
        let summary: Vec<_> = view
            .markers
            .iter()
            .map(|m| (m.latitude, m.longitude, m.color, m.label))
            .collect();
        assert_eq!(
            summary,
            vec![
                (19.05, 72.83, MarkerStyle::Red, "Fuel Station"),
                (19.06, 72.84, MarkerStyle::Green, "Parking Station"),
                (19.07, 72.85, MarkerStyle::Blue, "Unknown Station"),
            ]
        );
        assert_eq!(view.markers[2].glyph, None);
    }

    #[test]
    fn map_view_serializes_colors_as_lowercase() {
        let points = vec![classified(1.0, 2.0, "parking")];
        let view = render(Some(Coordinate::new(1.0, 2.0)), &points).unwrap();
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["markers"][0]["color"], "green");
        assert_eq!(json["markers"][0]["label"], "Parking Station");
        assert_eq!(json["center"]["latitude"], 1.0);
    }
}
