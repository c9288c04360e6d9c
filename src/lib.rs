//! winemap Library
//!
//! Interactive wine map service: resolves map clicks to the nearest country
//! or wine region and serves the map, plus offline data tools.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::ApiServer;
pub use adapters::outbound::{CsvLocationRepository, InMemoryLocationRepository};
pub use application::MapService;
pub use config::load_config;
pub use domain::entities::{ClickQuery, ClickResult, LocationPoint, LocationSnapshot};
pub use domain::errors::ResolveError;
pub use domain::ports::LocationRepository;
pub use domain::services::{GrapeCatalog, NearestResolver};
pub use domain::value_objects::LocationCategory;
