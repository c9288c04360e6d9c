//! Map Service - Main application use case
//!
//! Orchestrates click resolution and marker listing on top of the location
//! repository. This is the primary interface for the inbound HTTP adapter.

use crate::domain::entities::{ClickQuery, ClickResult, LocationPoint};
use crate::domain::errors::ResolveError;
use crate::domain::ports::LocationRepository;
use crate::domain::services::NearestResolver;
use crate::domain::value_objects::LocationCategory;
use maud::html;
use serde::Serialize;
use std::sync::Arc;

/// A marker to draw on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    #[serde(rename = "type")]
    pub category: LocationCategory,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Text shown on hover
    pub tooltip: String,
    /// HTML shown when the marker is opened
    pub popup: String,
}

impl MapMarker {
    fn from_point(category: LocationCategory, point: &LocationPoint) -> Self {
        Self {
            category,
            name: point.name.clone(),
            latitude: point.latitude,
            longitude: point.longitude,
            tooltip: point.name.clone(),
            popup: html! { b { (point.name) } br; (point.info) }.into_string(),
        }
    }
}

/// All markers of one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarkers {
    pub version: u64,
    pub countries: Vec<MapMarker>,
    pub regions: Vec<MapMarker>,
}

/// Map service - main application use case.
///
/// This service:
/// 1. Wraps click longitudes and validates coordinates (when strict)
/// 2. Resolves clicks against one consistent snapshot of the datasets
/// 3. Lists markers for the map page
pub struct MapService {
    repo: Arc<dyn LocationRepository>,
    strict_coordinates: bool,
}

impl MapService {
    /// Create a new map service.
    pub fn new(repo: Arc<dyn LocationRepository>, strict_coordinates: bool) -> Self {
        Self {
            repo,
            strict_coordinates,
        }
    }

    /// Resolve a click to the nearest country or region.
    ///
    /// The longitude is wrapped into [-180, 180] first, so clicks on a
    /// repeated world copy resolve like clicks on the main one.
    ///
    /// # Errors
    /// - `InvalidCoordinate` when strict validation is on and the query is out of range
    /// - `EmptyCollection` when either dataset has no points
    pub async fn click(&self, query: ClickQuery) -> Result<ClickResult, ResolveError> {
        let query = query.wrapped();
        if self.strict_coordinates && !query.is_valid() {
            tracing::warn!(
                "rejected click at invalid coordinate ({}, {})",
                query.latitude,
                query.longitude
            );
            return Err(ResolveError::InvalidCoordinate {
                latitude: query.latitude,
                longitude: query.longitude,
            });
        }

        let snapshot = self.repo.snapshot().await;
        let result = NearestResolver::process_click(&query, &snapshot.countries, &snapshot.regions);

        match &result {
            Ok(answer) => tracing::debug!(
                "click ({}, {}) -> {} {} (data version={})",
                query.latitude,
                query.longitude,
                answer.category,
                answer.name,
                snapshot.version
            ),
            Err(e) => tracing::warn!("click ({}, {}) failed: {}", query.latitude, query.longitude, e),
        }

        result
    }

    /// List every marker of the current snapshot.
    pub async fn markers(&self) -> MapMarkers {
        let snapshot = self.repo.snapshot().await;
        let markers = |category: LocationCategory| -> Vec<MapMarker> {
            snapshot
                .points(category)
                .iter()
                .map(|point| MapMarker::from_point(category, point))
                .collect()
        };

        MapMarkers {
            version: snapshot.version,
            countries: markers(LocationCategory::Country),
            regions: markers(LocationCategory::Region),
        }
    }

    /// Number of loaded countries and regions.
    pub async fn dataset_sizes(&self) -> (usize, usize) {
        let snapshot = self.repo.snapshot().await;
        (snapshot.countries.len(), snapshot.regions.len())
    }

    /// Version of the currently loaded datasets.
    pub async fn data_version(&self) -> u64 {
        self.repo.version().await
    }

    /// Whether clicks are validated before resolution.
    pub fn strict_coordinates(&self) -> bool {
        self.strict_coordinates
    }
}
