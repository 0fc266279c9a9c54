//! Core geometry types and the seams for external geometry helpers.
//!
//! Distance computation and polyline encoding are pure functions supplied by
//! the host. The crate ships default implementations (`Haversine`,
//! `PolylineEncoding`) but accepts any implementation of these traits.

use serde::{Deserialize, Serialize};

use crate::polyline::Polyline;

/// A WGS84 position, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// (latitude, longitude) tuple, the order used by polylines.
    pub fn lat_lng(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Linear interpolation on both axes. `fraction` 0 yields `self`, 1 yields `to`.
    pub fn interpolate(&self, to: Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            lon: self.lon + (to.lon - self.lon) * fraction,
            lat: self.lat + (to.lat - self.lat) * fraction,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Builds a coordinate from a `(lon, lat)` pair.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// Provides great-circle distance between two coordinates.
pub trait DistanceProvider {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;
}

/// Encodes a polyline into its compact string form.
pub trait PolylineEncoder {
    fn encode(&self, polyline: &Polyline) -> String;
}
