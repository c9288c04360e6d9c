//! CSV Location Repository
//!
//! Implements LocationRepository by reading the countries and regions CSV files.
//! Supports periodic reloading so the files can be edited while serving.

use crate::domain::entities::{LocationPoint, LocationSnapshot};
use crate::domain::ports::LocationRepository;
use crate::domain::value_objects::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::infrastructure::shutdown::ShutdownController;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::time::Duration;

/// Errors raised while loading a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path:?} row {row}: empty name")]
    EmptyName { path: PathBuf, row: usize },
    #[error("{path:?} row {row}: coordinate out of range ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        path: PathBuf,
        row: usize,
        latitude: f64,
        longitude: f64,
    },
}

/// One CSV row. Columns are matched by header name; extra columns are ignored.
#[derive(Debug, Deserialize)]
struct LocationRow {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    info: Option<String>,
}

/// CSV-backed location repository.
///
/// Both files are parsed into a fresh snapshot before it replaces the
/// current one, so a reload never exposes a half-loaded pair of datasets.
pub struct CsvLocationRepository {
    countries_path: PathBuf,
    regions_path: PathBuf,
    snapshot: Arc<RwLock<Arc<LocationSnapshot>>>,
}

impl CsvLocationRepository {
    /// Create a repository (empty until `load` or `start_sync` runs).
    pub fn new(countries_path: impl Into<PathBuf>, regions_path: impl Into<PathBuf>) -> Self {
        Self {
            countries_path: countries_path.into(),
            regions_path: regions_path.into(),
            snapshot: Arc::new(RwLock::new(LocationSnapshot::empty())),
        }
    }

    /// Load both files and swap in the new snapshot.
    ///
    /// Returns the new version. On error the current snapshot is kept.
    pub fn load(&self) -> Result<u64, LoadError> {
        Self::reload(&self.countries_path, &self.regions_path, &self.snapshot)
    }

    /// Start the background reload task.
    ///
    /// Spawns a Tokio task that reloads both files every `interval_secs`
    /// until `shutdown` fires.
    pub fn start_sync(&self, interval_secs: u64, shutdown: ShutdownController) {
        let countries_path = self.countries_path.clone();
        let regions_path = self.regions_path.clone();
        let snapshot = self.snapshot.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            // First tick completes immediately; the initial load is done by the caller
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {}
                    _ = shutdown.wait() => {
                        tracing::debug!("location reload task stopped");
                        return;
                    }
                }

                let countries_path = countries_path.clone();
                let regions_path = regions_path.clone();
                let snapshot = snapshot.clone();
                match tokio::task::spawn_blocking(move || {
                    Self::reload(&countries_path, &regions_path, &snapshot)
                })
                .await
                {
                    Ok(Ok(_)) => {}
                    Ok(Err(e)) => tracing::error!("error reloading locations: {}", e),
                    Err(e) => tracing::error!("spawn_blocking error: {:?}", e),
                }
            }
        });
    }

    fn reload(
        countries_path: &Path,
        regions_path: &Path,
        snapshot: &RwLock<Arc<LocationSnapshot>>,
    ) -> Result<u64, LoadError> {
        let countries = Self::load_points(countries_path)?;
        let regions = Self::load_points(regions_path)?;
        let (country_count, region_count) = (countries.len(), regions.len());

        let version = {
            let mut guard = snapshot.write();
            let version = guard.version + 1;
            *guard = Arc::new(LocationSnapshot::new(countries, regions, version));
            version
        };

        tracing::info!(
            "locations reload ok, version={} countries={} regions={}",
            version,
            country_count,
            region_count
        );
        Ok(version)
    }

    /// Parse one CSV file into location points.
    ///
    /// Rows are numbered from 1 (the first data row after the header).
    pub fn load_points(path: &Path) -> Result<Vec<LocationPoint>, LoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let mut points = Vec::new();
        for (index, result) in reader.deserialize::<LocationRow>().enumerate() {
            let row = index + 1;
            let record = result.map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

            let name = record.name.trim();
            if name.is_empty() {
                return Err(LoadError::EmptyName {
                    path: path.to_path_buf(),
                    row,
                });
            }
            if !LATITUDE_RANGE.contains(&record.latitude)
                || !LONGITUDE_RANGE.contains(&record.longitude)
            {
                return Err(LoadError::CoordinateOutOfRange {
                    path: path.to_path_buf(),
                    row,
                    latitude: record.latitude,
                    longitude: record.longitude,
                });
            }

            points.push(LocationPoint::new(
                name,
                record.latitude,
                record.longitude,
                record.info.unwrap_or_default(),
            ));
        }

        Ok(points)
    }
}

#[async_trait]
impl LocationRepository for CsvLocationRepository {
    async fn snapshot(&self) -> Arc<LocationSnapshot> {
        self.snapshot.read().clone()
    }

    async fn version(&self) -> u64 {
        self.snapshot.read().version
    }
}
