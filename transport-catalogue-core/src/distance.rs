//! Great-circle distance between stop coordinates.

use geo::{Distance, HaversineMeasure, Point};

use crate::Meters;

/// Earth radius used by the geodesic fallback, meters
pub const EARTH_RADIUS: Meters = 6_371_000.0;

/// Haversine distance between two points given as (lon, lat) degrees.
///
/// Identical points yield exactly zero.
pub fn geodesic_distance(from: Point<f64>, to: Point<f64>) -> Meters {
    if from == to {
        return 0.0;
    }
    HaversineMeasure::new(EARTH_RADIUS).distance(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn same_point_is_zero() {
        let p = Point::new(37.6, 55.7);
        assert_eq!(geodesic_distance(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = geodesic_distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_relative_eq!(d, EARTH_RADIUS * std::f64::consts::PI / 180.0, max_relative = 1e-9);
    }

    #[test]
    fn agrees_with_geo_haversine() {
        let a = Point::new(37.6517, 55.574371);
        let b = Point::new(37.603938, 55.611717);
        assert_relative_eq!(
            geodesic_distance(a, b),
            HaversineMeasure::new(EARTH_RADIUS).distance(a, b)
        );
    }

    #[test]
    fn symmetric() {
        let a = Point::new(37.20829, 55.611087);
        let b = Point::new(37.209755, 55.595884);
        assert_relative_eq!(geodesic_distance(a, b), geodesic_distance(b, a));
        // Roughly 1.69 km apart
        assert!((1600.0..1800.0).contains(&geodesic_distance(a, b)));
    }
}
