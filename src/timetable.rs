//! Frequency-based timetables derived from a stop pattern and a service period.

use serde::Serialize;

use crate::service_period::ServicePeriod;

/// One frequency entry of an added trip pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub start_time: i32,
    pub end_time: i32,
    pub headway_secs: u32,
    /// Always true: entries are headway based, not exact departures.
    pub frequency: bool,
    /// One entry per stop.
    pub dwell_times: Vec<u32>,
    /// Seconds per hop, one entry per pair of consecutive stops.
    pub hop_times: Vec<f64>,
    /// Monday first.
    pub days: [bool; 7],
}

/// Build the timetable for `period` over a pattern with `stop_count` stops.
///
/// Travel time is distance over constant speed; no acceleration or rounding.
pub fn build_timetable(
    stop_count: usize,
    hop_distances_m: &[f64],
    period: &ServicePeriod,
) -> Timetable {
    let speed_kmh = period.speed_kmh();

    Timetable {
        start_time: period.start_time(),
        end_time: period.end_time(),
        headway_secs: period.headway(),
        frequency: true,
        dwell_times: vec![period.dwell(); stop_count],
        hop_times: hop_distances_m
            .iter()
            .map(|meters| meters / 1000.0 / speed_kmh * 3600.0)
            .collect(),
        days: period.days(),
    }
}
