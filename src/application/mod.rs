//! Application layer: use cases orchestrating domain services and ports.

mod map_service;

pub use map_service::{MapMarker, MapMarkers, MapService};
