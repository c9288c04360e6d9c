//! Grape Variety Catalogue
//!
//! Builds the list of grape varieties used across wine regions, with the
//! regions that grow each one.

use crate::domain::entities::GrapeVariety;
use std::collections::BTreeSet;

/// Separator between varieties in a region's grape list.
pub const GRAPE_SEPARATOR: &str = ", ";

/// A region row as seen by the catalogue: its name and raw grape list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGrapes {
    pub region: String,
    /// `None` when the region has no value in the grape column
    pub grapes: Option<String>,
}

impl RegionGrapes {
    pub fn new(region: impl Into<String>, grapes: Option<String>) -> Self {
        Self {
            region: region.into(),
            grapes,
        }
    }
}

/// Grape catalogue builder.
pub struct GrapeCatalog;

impl GrapeCatalog {
    /// Summarize the grape varieties mentioned by `rows`.
    ///
    /// Varieties are the unique entries of every list split on `", "`,
    /// sorted ascending. A region counts for a variety when its raw list
    /// contains the variety name as a substring, so "Pinot" also matches a
    /// region listing only "Pinot Noir".
    pub fn summarize(rows: &[RegionGrapes]) -> Vec<GrapeVariety> {
        let varieties: BTreeSet<&str> = rows
            .iter()
            .filter_map(|row| row.grapes.as_deref())
            .flat_map(|list| list.split(GRAPE_SEPARATOR))
            .filter(|grape| !grape.is_empty())
            .collect();

        varieties
            .into_iter()
            .map(|variety| {
                let regions: Vec<String> = rows
                    .iter()
                    .filter(|row| {
                        row.grapes
                            .as_deref()
                            .is_some_and(|list| list.contains(variety))
                    })
                    .map(|row| row.region.clone())
                    .collect();

                GrapeVariety {
                    name: variety.to_string(),
                    origin_country: String::new(),
                    region_count: regions.len(),
                    regions,
                    tonalities: String::new(),
                }
            })
            .collect()
    }
}
