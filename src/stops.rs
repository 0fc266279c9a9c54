//! Stop placement along a line geometry.
//!
//! Walks the line once, inserting an interpolated stop every `spacing`
//! meters of travelled distance. Original vertices are kept so the emitted
//! geometry still follows the drawn line, but only the first and last
//! vertices are stops.

use tracing::warn;

use crate::error::ScenarioError;
use crate::traits::{Coordinate, DistanceProvider};

/// Overshoot below this many kilometers is treated as floating-point noise.
const DISTANCE_EPSILON_KM: f64 = 1e-9;
/// Smallest accepted stop spacing. Anything finer would emit a stop per
/// millimeter of line and exhaust memory on real geometries.
pub const MIN_STOP_SPACING_M: f64 = 1.0;

/// Discretized line: vertices, a stop flag per vertex, and distances between stops.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPattern {
    pub geometry: Vec<Coordinate>,
    pub is_stop: Vec<bool>,
    pub hop_distances_m: Vec<f64>,
}

impl StopPattern {
    pub fn stop_count(&self) -> usize {
        self.is_stop.iter().filter(|stop| **stop).count()
    }

    /// Same line travelled in the opposite direction.
    pub fn reversed(mut self) -> Self {
        self.geometry.reverse();
        self.is_stop.reverse();
        self.hop_distances_m.reverse();
        self
    }
}

/// Place stops along `geometry` every `spacing_m` meters.
///
/// The first and last vertices are always stops. The final hop holds whatever
/// distance is left after the last full spacing, so hop distances always sum
/// to the line length.
pub fn discretize<D>(
    geometry: &[Coordinate],
    spacing_m: f64,
    distance: &D,
) -> Result<StopPattern, ScenarioError>
where
    D: DistanceProvider + ?Sized,
{
    if geometry.len() < 2 {
        return Err(ScenarioError::GeometryTooShort(geometry.len()));
    }
    if !(spacing_m.is_finite() && spacing_m >= MIN_STOP_SPACING_M) {
        return Err(ScenarioError::InvalidStopSpacing(spacing_m));
    }

    let spacing_km = spacing_m / 1000.0;
    let last_segment = geometry.len() - 2;

    let mut points = Vec::with_capacity(geometry.len());
    let mut is_stop = Vec::with_capacity(geometry.len());
    let mut hop_distances_m = Vec::new();

    points.push(geometry[0]);
    is_stop.push(true);

    let mut travelled_km = 0.0;
    let mut next_stop_km = spacing_km;

    for (index, pair) in geometry.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let segment_km = distance.distance_km(from, to);

        if segment_km > 0.0 {
            travelled_km += segment_km;
            while travelled_km - next_stop_km > DISTANCE_EPSILON_KM {
                let fraction = (segment_km - (travelled_km - next_stop_km)) / segment_km;
                points.push(from.interpolate(to, fraction));
                is_stop.push(true);
                hop_distances_m.push(spacing_m);
                next_stop_km += spacing_km;
            }
        } else {
            warn!(index, lon = from.lon, lat = from.lat, "zero-length segment in line geometry");
        }

        points.push(to);
        is_stop.push(index == last_segment);
    }

    hop_distances_m.push((travelled_km - (next_stop_km - spacing_km)) * 1000.0);

    Ok(StopPattern {
        geometry: points,
        is_stop,
        hop_distances_m,
    })
}
