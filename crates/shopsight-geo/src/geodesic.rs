//! Great-circle distance math for the geodesic fallback strategy.

use std::f64::consts::PI;

use shopsight_core::GeoPoint;

/// Mean Earth radius in kilometers (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometers.
///
/// Ignores the road network; the routing strategy exists for callers that
/// need walkable distance.
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude * PI / 180.0;
    let lat_b = b.latitude * PI / 180.0;
    let d_lat = (b.latitude - a.latitude) * PI / 180.0;
    let d_lon = (b.longitude - a.longitude) * PI / 180.0;

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINNIPEG: GeoPoint = GeoPoint {
        latitude: 49.8951,
        longitude: -97.1384,
    };

    #[test]
    fn haversine_zero_for_identical_points() {
        assert!(haversine_km(WINNIPEG, WINNIPEG).abs() < 1e-9);
    }

    #[test]
    fn haversine_is_symmetric() {
        let calgary = GeoPoint {
            latitude: 51.0447,
            longitude: -114.0719,
        };
        let ab = haversine_km(WINNIPEG, calgary);
        let ba = haversine_km(calgary, WINNIPEG);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn haversine_winnipeg_to_calgary_is_about_1190_km() {
        let calgary = GeoPoint {
            latitude: 51.0447,
            longitude: -114.0719,
        };
        let km = haversine_km(WINNIPEG, calgary);
        assert!((1100.0..1300.0).contains(&km), "got {km} km");
    }

    #[test]
    fn haversine_short_hop_is_sub_kilometer() {
        let nearby = GeoPoint {
            latitude: 49.8991,
            longitude: -97.1384,
        };
        let km = haversine_km(WINNIPEG, nearby);
        assert!(km > 0.3 && km < 0.6, "got {km} km");
    }
}
