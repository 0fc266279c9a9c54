//! scenario-builder
//!
//! Builders for declarative transit scenario modifications: new trip
//! patterns, trip removals, headway adjustments and frequency conversions.

pub mod traits;
pub mod error;
pub mod config;
pub mod haversine;
pub mod polyline;
pub mod service_period;
pub mod stops;
pub mod timetable;
pub mod trip_pattern;
pub mod remove_trip;
pub mod adjust_headway;
pub mod convert_to_frequency;
pub mod modification;
