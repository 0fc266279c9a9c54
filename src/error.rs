//! Errors raised while building or finalizing scenario modifications.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("start time must be within one GTFS day (0..=86400), got {0}")]
    StartTimeOutOfRange(i32),
    #[error("end time must be within two GTFS days (0..=172800), got {0}")]
    EndTimeOutOfRange(i32),
    #[error("trip pattern has no geometry")]
    MissingGeometry,
    #[error("trip pattern geometry needs at least 2 points, got {0}")]
    GeometryTooShort(usize),
    #[error("stop spacing must be at least 1 meter, got {0}")]
    InvalidStopSpacing(f64),
    #[error("speed must be a positive number of km/h, got {0}")]
    InvalidSpeed(f64),
    #[error("headway must be greater than zero seconds")]
    InvalidHeadway,
    #[error("polyline precision must be at most 10 decimal digits, got {0}")]
    InvalidPrecision(u32),
    #[error("earth radius must be a positive number of kilometers, got {0}")]
    InvalidEarthRadius(f64),
    #[error("invalid encoded polyline: {0}")]
    InvalidPolyline(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
