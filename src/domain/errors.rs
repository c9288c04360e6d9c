//! Domain Errors

use crate::domain::value_objects::LocationCategory;

/// Errors raised while resolving a click.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("no {} loaded, cannot resolve click", .dataset.dataset())]
    EmptyCollection { dataset: LocationCategory },
    #[error("invalid coordinate: latitude={latitude} longitude={longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_message() {
        let err = ResolveError::EmptyCollection {
            dataset: LocationCategory::Region,
        };
        assert_eq!(err.to_string(), "no regions loaded, cannot resolve click");
    }

    #[test]
    fn test_invalid_coordinate_message() {
        let err = ResolveError::InvalidCoordinate {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(err.to_string().contains("latitude=91"));
    }
}
