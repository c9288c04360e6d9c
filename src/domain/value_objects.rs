//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Dataset a map location belongs to.
///
/// Clicks are resolved against both datasets and the answer is tagged
/// with the category of the winning point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationCategory {
    /// Country-level marker (one per wine producing country)
    Country,
    /// Region-level marker (appellations, wine regions)
    Region,
}

impl LocationCategory {
    /// Convert to the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Region => "Region",
        }
    }

    /// Lowercase dataset name, used in logs and error messages.
    pub fn dataset(&self) -> &'static str {
        match self {
            Self::Country => "countries",
            Self::Region => "regions",
        }
    }
}

impl std::fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Check that a latitude/longitude pair is finite and within range.
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude)
}

/// Bring a longitude from a repeated world copy back into [-180, 180].
///
/// In-range and non-finite values are returned unchanged.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() || LONGITUDE_RANGE.contains(&longitude) {
        return longitude;
    }
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(LocationCategory::Country.as_str(), "Country");
        assert_eq!(LocationCategory::Region.as_str(), "Region");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", LocationCategory::Country), "Country");
        assert_eq!(format!("{}", LocationCategory::Region), "Region");
    }

    #[test]
    fn test_category_dataset() {
        assert_eq!(LocationCategory::Country.dataset(), "countries");
        assert_eq!(LocationCategory::Region.dataset(), "regions");
    }

    #[test]
    fn test_category_serializes_as_variant_name() {
        let json = serde_json::to_string(&LocationCategory::Region).unwrap();
        assert_eq!(json, "\"Region\"");

        let parsed: LocationCategory = serde_json::from_str("\"Country\"").unwrap();
        assert_eq!(parsed, LocationCategory::Country);
    }

    #[test]
    fn test_valid_coordinates() {
        let tests = vec![
            (0.0, 0.0),
            (90.0, 180.0),
            (-90.0, -180.0),
            (48.8566, 2.3522),
        ];

        for (lat, lon) in tests {
            assert!(is_valid_coordinate(lat, lon), "Failed for ({}, {})", lat, lon);
        }
    }

    #[test]
    fn test_invalid_coordinates() {
        let tests = vec![
            (90.1, 0.0),
            (-91.0, 0.0),
            (0.0, 180.5),
            (0.0, -200.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ];

        for (lat, lon) in tests {
            assert!(!is_valid_coordinate(lat, lon), "Accepted ({}, {})", lat, lon);
        }
    }

    #[test]
    fn test_wrap_longitude() {
        let tests = vec![
            (364.0, 4.0),
            (-356.0, 4.0),
            (190.0, -170.0),
            (-190.0, 170.0),
            (180.0, 180.0),
            (-180.0, -180.0),
            (2.3522, 2.3522),
        ];

        for (input, expected) in tests {
            assert_eq!(wrap_longitude(input), expected, "Failed for {}", input);
        }
        assert!(wrap_longitude(f64::NAN).is_nan());
        assert_eq!(wrap_longitude(f64::INFINITY), f64::INFINITY);
    }
}
