//! GeoJSON person-at-place features and their time filtering
//!
//! Each feature places a person at a location with an optional date range.
//! The map keeps the features whose range overlaps the active
//! [`TimeWindow`]; undated features are never shown.

use crate::temporal::{filter_in_window, Dated, TimeWindow};
use serde::{Deserialize, Serialize};

/// Marker color of a dated feature
pub const DATED_MARKER_COLOR: &str = "#e74c3c";

/// Marker color of an undated feature
pub const UNDATED_MARKER_COLOR: &str = "#95a5a6";

/// A `Point` geometry, coordinates in `[lon, lat]` order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
}

impl Geometry {
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point {
            coordinates: [lon, lat],
        }
    }
}

/// Feature properties as delivered by the geojson endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub person_id: String,
    #[serde(default)]
    pub person_label: String,
    #[serde(default)]
    pub place_label: String,
    /// Place type, `"Unknown"` when the backend has none
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,
    #[serde(default)]
    pub start: Option<i32>,
    #[serde(default)]
    pub end: Option<i32>,
}

impl Dated for FeatureProperties {
    fn start_year(&self) -> Option<i32> {
        self.start
    }

    fn end_year(&self) -> Option<i32> {
        self.end
    }
}

/// A single map feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn new(lon: f64, lat: f64, properties: FeatureProperties) -> Self {
        Feature {
            geometry: Geometry::point(lon, lat),
            properties,
        }
    }

    pub fn lon(&self) -> f64 {
        match self.geometry {
            Geometry::Point { coordinates } => coordinates[0],
        }
    }

    pub fn lat(&self) -> f64 {
        match self.geometry {
            Geometry::Point { coordinates } => coordinates[1],
        }
    }

    pub fn marker_color(&self) -> &'static str {
        marker_color(&self.properties)
    }

    /// Popup text: person, place, and the year range when known
    pub fn summary(&self) -> String {
        let p = &self.properties;
        match (p.start, p.end) {
            (None, None) => format!("{} at {}", p.person_label, p.place_label),
            (start, end) => format!(
                "{} at {} ({} - {})",
                p.person_label,
                p.place_label,
                start.map(|y| y.to_string()).unwrap_or_else(|| "?".to_string()),
                end.map(|y| y.to_string()).unwrap_or_else(|| "?".to_string())
            ),
        }
    }
}

impl Dated for Feature {
    fn start_year(&self) -> Option<i32> {
        self.properties.start
    }

    fn end_year(&self) -> Option<i32> {
        self.properties.end
    }
}

/// A GeoJSON feature collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Marker color for a dated or undated entity
pub fn marker_color<D: Dated + ?Sized>(entity: &D) -> &'static str {
    if entity.is_dated() {
        DATED_MARKER_COLOR
    } else {
        UNDATED_MARKER_COLOR
    }
}

/// Features of `collection` that overlap `window`, in collection order
pub fn features_in_window<'a>(collection: &'a FeatureCollection, window: &TimeWindow) -> Vec<&'a Feature> {
    filter_in_window(&collection.features, window)
}
