//! Nearest-Location Resolver
//!
//! Pure domain logic for resolving a map click to the closest labeled point.
//! Both datasets are small, so every click is a linear scan over all points.

use crate::domain::entities::{ClickQuery, ClickResult, LocationPoint};
use crate::domain::errors::ResolveError;
use crate::domain::value_objects::LocationCategory;
use geo::{GeodesicDistance, Point};

/// Resolver for map clicks.
///
/// Distances are geodesic (WGS84 ellipsoid) in kilometres. Ties are broken
/// deterministically:
/// 1. Within a dataset, the earliest point wins
/// 2. Between datasets, the country wins
pub struct NearestResolver;

impl NearestResolver {
    /// Geodesic distance in kilometres between a query and a point.
    ///
    /// Returns NaN when any input is not finite.
    pub fn distance_km(query: &ClickQuery, point: &LocationPoint) -> f64 {
        let inputs = [query.latitude, query.longitude, point.latitude, point.longitude];
        if inputs.iter().any(|v| !v.is_finite()) {
            return f64::NAN;
        }

        // geo points are (x = longitude, y = latitude)
        let from = Point::new(query.longitude, query.latitude);
        let to = Point::new(point.longitude, point.latitude);
        from.geodesic_distance(&to) / 1000.0
    }

    /// Find the point of `points` closest to `query`.
    ///
    /// The best candidate is only replaced on a strict improvement, so on
    /// exact ties the point appearing first wins.
    ///
    /// # Errors
    /// `ResolveError::EmptyCollection` if `points` is empty.
    pub fn find_closest<'a>(
        query: &ClickQuery,
        points: &'a [LocationPoint],
        dataset: LocationCategory,
    ) -> Result<(&'a LocationPoint, f64), ResolveError> {
        let mut best: Option<(&LocationPoint, f64)> = None;

        for point in points {
            let distance = Self::distance_km(query, point);

            match &best {
                Some((_, best_distance)) if distance < *best_distance => {
                    best = Some((point, distance));
                }
                None => {
                    best = Some((point, distance));
                }
                _ => {}
            }
        }

        best.ok_or(ResolveError::EmptyCollection { dataset })
    }

    /// Resolve a click against the country and region datasets.
    ///
    /// A region is returned only when it is strictly closer than the closest
    /// country; equal distances resolve to the country.
    ///
    /// # Example
    /// ```
    /// use winemap::domain::entities::{ClickQuery, LocationPoint};
    /// use winemap::domain::services::NearestResolver;
    /// use winemap::domain::value_objects::LocationCategory;
    ///
    /// let countries = vec![LocationPoint::new("France", 48.8566, 2.3522, "France info")];
    /// let regions = vec![LocationPoint::new("Champagne", 49.05, 4.0, "Champagne info")];
    ///
    /// let result = NearestResolver::process_click(&ClickQuery::new(49.0, 4.0), &countries, &regions).unwrap();
    /// assert_eq!(result.category, LocationCategory::Region);
    /// assert_eq!(result.name, "Champagne");
    /// ```
    pub fn process_click(
        query: &ClickQuery,
        countries: &[LocationPoint],
        regions: &[LocationPoint],
    ) -> Result<ClickResult, ResolveError> {
        let (country, country_distance) =
            Self::find_closest(query, countries, LocationCategory::Country)?;
        let (region, region_distance) =
            Self::find_closest(query, regions, LocationCategory::Region)?;

        tracing::trace!(
            "closest country={} ({:.3} km), region={} ({:.3} km)",
            country.name,
            country_distance,
            region.name,
            region_distance
        );

        if region_distance < country_distance {
            Ok(ClickResult::from_point(LocationCategory::Region, region))
        } else {
            Ok(ClickResult::from_point(LocationCategory::Country, country))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Test Helpers =====

    fn point(name: &str, latitude: f64, longitude: f64) -> LocationPoint {
        LocationPoint::new(name, latitude, longitude, format!("{} info", name))
    }

    fn france() -> Vec<LocationPoint> {
        vec![point("France", 48.8566, 2.3522)]
    }

    fn champagne() -> Vec<LocationPoint> {
        vec![point("Champagne", 49.05, 4.0)]
    }

    // ===== Distance Tests =====

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = point("France", 48.8566, 2.3522);
        let q = ClickQuery::new(48.8566, 2.3522);

        assert_eq!(NearestResolver::distance_km(&q, &p), 0.0);
    }

    #[test]
    fn test_distance_is_geodesic_kilometres() {
        // Paris to London is about 344 km
        let london = point("London", 51.5074, -0.1278);
        let paris = ClickQuery::new(48.8566, 2.3522);

        let d = NearestResolver::distance_km(&paris, &london);
        assert!((d - 344.0).abs() < 5.0, "unexpected distance {}", d);
    }

    #[test]
    fn test_distance_one_degree_at_equator() {
        let p = point("A", 0.0, 1.0);
        let q = ClickQuery::new(0.0, 0.0);

        let d = NearestResolver::distance_km(&q, &p);
        assert!((d - 111.32).abs() < 0.1, "unexpected distance {}", d);
    }

    #[test]
    fn test_distance_across_antimeridian() {
        // 179.5E to 179.5W is one degree apart, not 359
        let p = point("A", 0.0, -179.5);
        let q = ClickQuery::new(0.0, 179.5);

        let d = NearestResolver::distance_km(&q, &p);
        assert!(d < 112.0, "unexpected distance {}", d);
    }

    #[test]
    fn test_distance_nan_for_non_finite_input() {
        let p = point("A", 0.0, 0.0);
        let q = ClickQuery::new(f64::NAN, 0.0);

        assert!(NearestResolver::distance_km(&q, &p).is_nan());
    }

    // ===== find_closest Tests =====

    #[test]
    fn test_find_closest_empty_collection() {
        let result =
            NearestResolver::find_closest(&ClickQuery::new(0.0, 0.0), &[], LocationCategory::Region);

        assert_eq!(
            result.unwrap_err(),
            ResolveError::EmptyCollection {
                dataset: LocationCategory::Region
            }
        );
    }

    #[test]
    fn test_find_closest_single_point() {
        let points = france();
        let (closest, distance) = NearestResolver::find_closest(
            &ClickQuery::new(0.0, 0.0),
            &points,
            LocationCategory::Country,
        )
        .unwrap();

        assert_eq!(closest.name, "France");
        assert!(distance > 5000.0);
    }

    #[test]
    fn test_find_closest_picks_minimum() {
        let points = vec![
            point("Bordeaux", 44.8378, -0.5792),
            point("Champagne", 49.05, 4.0),
            point("Rioja", 42.4627, -2.4449),
            point("Mosel", 49.9, 6.9),
        ];
        let query = ClickQuery::new(49.5, 6.0);

        let (closest, distance) =
            NearestResolver::find_closest(&query, &points, LocationCategory::Region).unwrap();

        assert_eq!(closest.name, "Mosel");
        for other in &points {
            assert!(distance <= NearestResolver::distance_km(&query, other));
        }
    }

    #[test]
    fn test_find_closest_first_wins_on_tie() {
        // Same coordinate under two names: both equidistant from the query
        let points = vec![point("First", 0.0, 1.0), point("Second", 0.0, 1.0)];

        let (closest, _) = NearestResolver::find_closest(
            &ClickQuery::new(0.0, 0.0),
            &points,
            LocationCategory::Region,
        )
        .unwrap();
        assert_eq!(closest.name, "First");

        let reversed = vec![point("Second", 0.0, 1.0), point("First", 0.0, 1.0)];
        let (closest, _) = NearestResolver::find_closest(
            &ClickQuery::new(0.0, 0.0),
            &reversed,
            LocationCategory::Region,
        )
        .unwrap();
        assert_eq!(closest.name, "Second");
    }

    #[test]
    fn test_find_closest_later_strictly_closer_point_wins() {
        let points = vec![point("Far", 0.0, 2.0), point("Tie", 0.0, 1.0), point("Near", 0.0, 0.5)];

        let (closest, _) = NearestResolver::find_closest(
            &ClickQuery::new(0.0, 0.0),
            &points,
            LocationCategory::Region,
        )
        .unwrap();
        assert_eq!(closest.name, "Near");
    }

    #[test]
    fn test_find_closest_duplicate_coordinates() {
        let points = vec![point("First", 10.0, 10.0), point("Second", 10.0, 10.0)];

        let (closest, distance) = NearestResolver::find_closest(
            &ClickQuery::new(10.0, 10.0),
            &points,
            LocationCategory::Country,
        )
        .unwrap();

        assert_eq!(closest.name, "First");
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_find_closest_nan_query_returns_first() {
        let points = vec![point("First", 10.0, 10.0), point("Second", 0.0, 0.0)];

        let (closest, distance) = NearestResolver::find_closest(
            &ClickQuery::new(f64::NAN, 0.0),
            &points,
            LocationCategory::Country,
        )
        .unwrap();

        assert_eq!(closest.name, "First");
        assert!(distance.is_nan());
    }

    // ===== process_click Tests =====

    #[test]
    fn test_process_click_region_closer() {
        let result = NearestResolver::process_click(
            &ClickQuery::new(49.0, 4.0),
            &france(),
            &champagne(),
        )
        .unwrap();

        assert_eq!(result.category, LocationCategory::Region);
        assert_eq!(result.name, "Champagne");
        assert_eq!(result.info, "Champagne info");
    }

    #[test]
    fn test_process_click_exact_country_coordinate() {
        let result = NearestResolver::process_click(
            &ClickQuery::new(48.8566, 2.3522),
            &france(),
            &champagne(),
        )
        .unwrap();

        assert_eq!(result.category, LocationCategory::Country);
        assert_eq!(result.name, "France");
        assert_eq!(result.info, "France info");
    }

    #[test]
    fn test_process_click_country_wins_tie() {
        let countries = vec![LocationPoint::new("A", 0.0, 0.0, "a")];
        let regions = vec![LocationPoint::new("B", 0.0, 0.0, "b")];

        let result =
            NearestResolver::process_click(&ClickQuery::new(0.0, 0.0), &countries, &regions)
                .unwrap();

        assert_eq!(
            result,
            ClickResult {
                category: LocationCategory::Country,
                name: "A".to_string(),
                info: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_process_click_country_wins_tie_away_from_points() {
        let countries = vec![point("Country", 1.0, 0.0)];
        let regions = vec![point("Region", 1.0, 0.0)];

        let result =
            NearestResolver::process_click(&ClickQuery::new(0.0, 0.0), &countries, &regions)
                .unwrap();

        assert_eq!(result.category, LocationCategory::Country);
        assert_eq!(result.name, "Country");
    }

    #[test]
    fn test_process_click_far_away_still_answers() {
        // Middle of the Pacific, thousands of km from everything
        let result = NearestResolver::process_click(
            &ClickQuery::new(-30.0, -140.0),
            &france(),
            &champagne(),
        )
        .unwrap();

        assert!(!result.name.is_empty());
    }

    #[test]
    fn test_process_click_empty_countries() {
        let result =
            NearestResolver::process_click(&ClickQuery::new(0.0, 0.0), &[], &champagne());

        assert_eq!(
            result.unwrap_err(),
            ResolveError::EmptyCollection {
                dataset: LocationCategory::Country
            }
        );
    }

    #[test]
    fn test_process_click_empty_regions() {
        let result = NearestResolver::process_click(&ClickQuery::new(0.0, 0.0), &france(), &[]);

        assert_eq!(
            result.unwrap_err(),
            ResolveError::EmptyCollection {
                dataset: LocationCategory::Region
            }
        );
    }

    #[test]
    fn test_process_click_deterministic() {
        let countries = vec![point("France", 48.8566, 2.3522), point("Spain", 40.4168, -3.7038)];
        let regions = vec![point("Champagne", 49.05, 4.0), point("Rioja", 42.4627, -2.4449)];
        let query = ClickQuery::new(45.0, 0.0);

        let first = NearestResolver::process_click(&query, &countries, &regions).unwrap();
        for _ in 0..100 {
            let again = NearestResolver::process_click(&query, &countries, &regions).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_process_click_does_not_mutate_inputs() {
        let countries = france();
        let regions = champagne();
        let before = (countries.clone(), regions.clone());

        let _ = NearestResolver::process_click(&ClickQuery::new(49.0, 4.0), &countries, &regions);

        assert_eq!(before, (countries, regions));
    }
}
