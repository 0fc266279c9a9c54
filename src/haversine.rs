//! Haversine distance provider.
//!
//! Uses great-circle distance on a spherical earth. Good enough for stop
//! spacing along a line; ignores ellipsoid flattening.

use crate::traits::{Coordinate, DistanceProvider};

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance provider.
#[derive(Debug, Clone)]
pub struct Haversine {
    /// Sphere radius in kilometers.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Calculate haversine distance between two (lat, lng) points in kilometers.
    fn haversine_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        self.radius_km * c
    }
}

impl DistanceProvider for Haversine {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        self.haversine_km(from.lat_lng(), to.lat_lng())
    }
}
