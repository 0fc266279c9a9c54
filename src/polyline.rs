//! Polyline representation for line geometries.
//!
//! `Polyline` holds decoded (latitude, longitude) points. `PolylineEncoding`
//! converts to and from the compact encoded polyline string used on the wire.

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::traits::{Coordinate, PolylineEncoder};

/// Default number of decimal digits kept by the encoding.
pub const DEFAULT_PRECISION: u32 = 5;
/// Highest precision accepted. Beyond this, scaled coordinates stop fitting
/// comfortably in an `i64`.
pub const MAX_PRECISION: u32 = 10;

/// A polyline representing a line geometry as decoded coordinates.
///
/// Each point is a (latitude, longitude) tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Creates a polyline from longitude-first coordinates.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        Self {
            points: coordinates.iter().map(Coordinate::lat_lng).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Google encoded polyline algorithm at a fixed decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolylineEncoding {
    precision: u32,
}

impl Default for PolylineEncoding {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PolylineEncoding {
    pub fn new(precision: u32) -> Result<Self, ScenarioError> {
        if precision > MAX_PRECISION {
            return Err(ScenarioError::InvalidPrecision(precision));
        }
        Ok(Self { precision })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    fn factor(&self) -> f64 {
        10f64.powi(self.precision as i32)
    }

    /// Decode an encoded polyline string back into points.
    pub fn decode(&self, encoded: &str) -> Result<Polyline, ScenarioError> {
        let factor = self.factor();
        let mut bytes = encoded.bytes().enumerate().peekable();
        let mut points = Vec::new();
        let (mut lat, mut lng) = (0i64, 0i64);

        while let Some(&(position, _)) = bytes.peek() {
            lat = lat
                .checked_add(decode_value(&mut bytes)?)
                .ok_or_else(|| coordinate_overflow(position))?;
            if bytes.peek().is_none() {
                return Err(ScenarioError::InvalidPolyline(
                    "latitude without matching longitude".to_string(),
                ));
            }
            lng = lng
                .checked_add(decode_value(&mut bytes)?)
                .ok_or_else(|| coordinate_overflow(position))?;
            points.push((lat as f64 / factor, lng as f64 / factor));
        }

        Ok(Polyline::new(points))
    }
}

impl PolylineEncoder for PolylineEncoding {
    fn encode(&self, polyline: &Polyline) -> String {
        let factor = self.factor();
        let mut encoded = String::new();
        let (mut prev_lat, mut prev_lng) = (0i64, 0i64);

        for &(lat, lng) in polyline.points() {
            let lat = (lat * factor).round() as i64;
            let lng = (lng * factor).round() as i64;
            encode_value(lat, prev_lat, &mut encoded);
            encode_value(lng, prev_lng, &mut encoded);
            prev_lat = lat;
            prev_lng = lng;
        }

        encoded
    }
}

/// Zigzag-encodes `current - previous` in 5-bit chunks.
///
/// Non-finite or huge coordinates saturate when scaled to `i64`, so the
/// difference is taken in `i128` where it cannot overflow.
fn encode_value(current: i64, previous: i64, out: &mut String) {
    let delta = current as i128 - previous as i128;
    let zigzag = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = zigzag as u128;
    while value >= 0x20 {
        out.push((((value & 0x1f) | 0x20) as u8 + 63) as char);
        value >>= 5;
    }
    out.push((value as u8 + 63) as char);
}

fn coordinate_overflow(position: usize) -> ScenarioError {
    ScenarioError::InvalidPolyline(format!("coordinate overflow at {}", position))
}

fn decode_value<I>(bytes: &mut I) -> Result<i64, ScenarioError>
where
    I: Iterator<Item = (usize, u8)>,
{
    let mut result = 0i64;
    let mut shift = 0;

    loop {
        let (position, byte) = bytes.next().ok_or_else(|| {
            ScenarioError::InvalidPolyline("truncated value".to_string())
        })?;
        if !(63..=126).contains(&byte) {
            return Err(ScenarioError::InvalidPolyline(format!(
                "unexpected character {:?} at {}",
                byte as char, position
            )));
        }
        if shift > 60 {
            return Err(ScenarioError::InvalidPolyline(format!(
                "value overflow at {}",
                position
            )));
        }
        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 { !(result >> 1) } else { result >> 1 })
}
