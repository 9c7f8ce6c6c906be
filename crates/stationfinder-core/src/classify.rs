//! Tag-based classification of amenity points.
//!
//! Rules match on tag *values* regardless of key, so a point tagged
//! `name=parking` classifies as parking just like `amenity=parking`. Callers
//! that need key-aware matching should filter tags first.

use crate::types::{AmenityPoint, Category, ClassifiedPoint};

/// Ordered rules: the first value found in a point's tags wins.
const RULES: &[(&str, Category)] = &[("parking", Category::Parking), ("fuel", Category::Fuel)];

/// Determine the category of a point from its tag values.
#[must_use]
pub fn category_for(point: &AmenityPoint) -> Category {
    RULES
        .iter()
        .find(|(value, _)| point.tags.values().any(|v| v == value))
        .map_or(Category::Unknown, |&(_, category)| category)
}

/// Classify a single point. Deterministic, no side effects.
#[must_use]
pub fn classify(point: AmenityPoint) -> ClassifiedPoint {
    let category = category_for(&point);
    ClassifiedPoint {
        point,
        category,
        label: category.label(),
        style: category.style(),
    }
}

/// Classify a batch of points, preserving order.
#[must_use]
pub fn classify_all(points: Vec<AmenityPoint>) -> Vec<ClassifiedPoint> {
    points.into_iter().map(classify).collect()
}
