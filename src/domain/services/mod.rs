mod grape_catalog;
mod nearest_resolver;

pub use grape_catalog::{GrapeCatalog, RegionGrapes, GRAPE_SEPARATOR};
pub use nearest_resolver::NearestResolver;
