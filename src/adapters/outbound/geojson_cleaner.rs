//! GeoJSON Property Stripper
//!
//! Shrinks boundary files served to the map by dropping every feature's
//! properties and writing compact JSON.

use anyhow::{anyhow, Context, Result};
use geojson::{GeoJson, JsonObject};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Replace the properties of every feature with an empty object.
///
/// Null or missing properties become `{}` too. Returns the number of
/// features written. `input` and `output` may be the same path.
pub fn strip_properties(input: &Path, output: &Path) -> Result<usize> {
    let file = File::open(input).with_context(|| format!("Failed to open GeoJSON file: {:?}", input))?;
    let geojson = GeoJson::from_reader(BufReader::new(file)).context("Failed to parse GeoJSON")?;

    let mut collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(anyhow!("GeoJSON must be a FeatureCollection")),
    };

    for feature in collection.features.iter_mut() {
        feature.properties = Some(JsonObject::new());
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create GeoJSON file: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &collection)?;
    writer.flush()?;

    tracing::info!(
        "stripped properties from {} features -> {:?}",
        collection.features.len(),
        output
    );
    Ok(collection.features.len())
}
