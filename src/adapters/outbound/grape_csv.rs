//! Grape Catalogue CSV Files
//!
//! Reads region grape lists from the regions CSV and writes the grape
//! variety catalogue produced by `GrapeCatalog`.

use crate::domain::entities::GrapeVariety;
use crate::domain::services::{RegionGrapes, GRAPE_SEPARATOR};
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// Header of the catalogue file, in column order.
pub const CATALOG_HEADERS: [&str; 5] = [
    "varietats",
    "pais_origen",
    "regions_utilitzen",
    "regions_noms",
    "tonalitats",
];

/// Read `(region, grape list)` pairs from a regions CSV.
///
/// Empty grape cells become `None`.
pub fn read_region_grapes(
    path: &Path,
    region_column: &str,
    grape_column: &str,
) -> Result<Vec<RegionGrapes>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open regions CSV: {:?}", path))?;
    let headers = reader.headers()?.clone();

    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("Column '{}' not found in {:?}", name, path))
    };
    let region_idx = column_index(region_column)?;
    let grape_idx = column_index(grape_column)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("Failed to parse {:?}", path))?;
        let region = record.get(region_idx).unwrap_or("").to_string();
        let grapes = record
            .get(grape_idx)
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string);
        rows.push(RegionGrapes::new(region, grapes));
    }

    Ok(rows)
}

/// Write the grape variety catalogue as CSV (UTF-8, header first).
pub fn write_catalog(path: &Path, catalog: &[GrapeVariety]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create catalogue file: {:?}", path))?;

    writer.write_record(CATALOG_HEADERS)?;
    for variety in catalog {
        let region_count = variety.region_count.to_string();
        let regions = variety.regions.join(GRAPE_SEPARATOR);
        writer.write_record([
            variety.name.as_str(),
            variety.origin_country.as_str(),
            region_count.as_str(),
            regions.as_str(),
            variety.tonalities.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
