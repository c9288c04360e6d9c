//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the wine map domain.
//! They have no external dependencies beyond serde and contain only business logic.

use crate::domain::value_objects::{is_valid_coordinate, wrap_longitude, LocationCategory};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A labeled point on the map (a country or a wine region).
///
/// Points are loaded once by a repository and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    /// Display name, unique within its dataset
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Free-text description shown in popups
    #[serde(default)]
    pub info: String,
}

impl LocationPoint {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            info: info.into(),
        }
    }
}

/// Coordinate of a user click on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickQuery {
    pub latitude: f64,
    pub longitude: f64,
}

impl ClickQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether the coordinate is finite and within the valid lat/lon ranges.
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.latitude, self.longitude)
    }

    /// Same click with the longitude wrapped into [-180, 180].
    ///
    /// Clicks on the repeated world copies of a zoomed-out map carry
    /// longitudes such as 364; they name the same place as 4.
    pub fn wrapped(self) -> Self {
        Self {
            latitude: self.latitude,
            longitude: wrap_longitude(self.longitude),
        }
    }
}

/// Resolved answer for a click.
///
/// Serialized as `{ "type": "Country" | "Region", "name": ..., "info": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickResult {
    #[serde(rename = "type")]
    pub category: LocationCategory,
    pub name: String,
    pub info: String,
}

impl ClickResult {
    /// Build a result by copying name and info from the winning point.
    pub fn from_point(category: LocationCategory, point: &LocationPoint) -> Self {
        Self {
            category,
            name: point.name.clone(),
            info: point.info.clone(),
        }
    }
}

/// Consistent view of both datasets at one moment.
///
/// Repositories hand out `Arc<LocationSnapshot>` and replace the whole
/// snapshot on reload, never individual points.
#[derive(Debug, Clone, Default)]
pub struct LocationSnapshot {
    pub countries: Vec<LocationPoint>,
    pub regions: Vec<LocationPoint>,
    /// Monotonic load counter (0 = never loaded)
    pub version: u64,
}

impl LocationSnapshot {
    pub fn new(countries: Vec<LocationPoint>, regions: Vec<LocationPoint>, version: u64) -> Self {
        Self {
            countries,
            regions,
            version,
        }
    }

    /// Empty snapshot used before the first successful load.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Points of one dataset.
    pub fn points(&self, category: LocationCategory) -> &[LocationPoint] {
        match category {
            LocationCategory::Country => &self.countries,
            LocationCategory::Region => &self.regions,
        }
    }
}

/// One row of the grape variety catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrapeVariety {
    /// Grape variety name
    pub name: String,
    /// Country of origin (not derivable from region data, left empty)
    pub origin_country: String,
    /// Number of regions whose grape list mentions this variety
    pub region_count: usize,
    /// Names of those regions, in dataset order
    pub regions: Vec<String>,
    /// Colour/tonality notes (not derivable from region data, left empty)
    pub tonalities: String,
}
