//! Operating window of a trip pattern: when it runs and how often.

use chrono::Weekday;
use tracing::warn;

use crate::error::ScenarioError;

/// Latest allowed start, one GTFS day after midnight.
pub const MAX_START_SECONDS: i32 = 86_400;
/// Latest allowed end. Service may run past midnight into the next GTFS day.
pub const MAX_END_SECONDS: i32 = 172_800;
/// Headways shorter than this are almost always minutes entered as seconds.
pub const MIN_SENSIBLE_HEADWAY_SECONDS: u32 = 120;

const DEFAULT_END_SECONDS: i32 = 86_399;
const DEFAULT_HEADWAY_SECONDS: u32 = 600;
const DEFAULT_SPEED_KMH: f64 = 15.0;

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];
const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Headway, dwell, speed and active window for one operating period of a line.
///
/// Setters return `&mut Self` so calls can be chained. Time bounds are
/// validated on assignment and an out-of-range value is never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePeriod {
    start_seconds: i32,
    end_seconds: i32,
    headway_seconds: u32,
    dwell_seconds: u32,
    speed_kmh: f64,
    /// Monday first.
    days: [bool; 7],
}

impl Default for ServicePeriod {
    fn default() -> Self {
        Self {
            start_seconds: 0,
            end_seconds: DEFAULT_END_SECONDS,
            headway_seconds: DEFAULT_HEADWAY_SECONDS,
            dwell_seconds: 0,
            speed_kmh: DEFAULT_SPEED_KMH,
            days: [true; 7],
        }
    }
}

impl ServicePeriod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds after GTFS midnight at which the period starts.
    pub fn start_time(&self) -> i32 {
        self.start_seconds
    }

    pub fn with_start_time(&mut self, seconds: i32) -> Result<&mut Self, ScenarioError> {
        if !(0..=MAX_START_SECONDS).contains(&seconds) {
            return Err(ScenarioError::StartTimeOutOfRange(seconds));
        }
        self.start_seconds = seconds;
        Ok(self)
    }

    /// Seconds after GTFS midnight at which the period ends.
    pub fn end_time(&self) -> i32 {
        self.end_seconds
    }

    pub fn with_end_time(&mut self, seconds: i32) -> Result<&mut Self, ScenarioError> {
        if !(0..=MAX_END_SECONDS).contains(&seconds) {
            return Err(ScenarioError::EndTimeOutOfRange(seconds));
        }
        self.end_seconds = seconds;
        Ok(self)
    }

    pub fn headway(&self) -> u32 {
        self.headway_seconds
    }

    /// Sets the headway in seconds. Short headways are stored but logged.
    pub fn with_headway(&mut self, seconds: u32) -> &mut Self {
        warn_if_short_headway(seconds);
        self.headway_seconds = seconds;
        self
    }

    pub fn dwell(&self) -> u32 {
        self.dwell_seconds
    }

    pub fn with_dwell(&mut self, seconds: u32) -> &mut Self {
        self.dwell_seconds = seconds;
        self
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn with_speed_kmh(&mut self, speed_kmh: f64) -> &mut Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Active flags, Monday through Sunday.
    pub fn days(&self) -> [bool; 7] {
        self.days
    }

    pub fn with_days(&mut self, days: [bool; 7]) -> &mut Self {
        self.days = days;
        self
    }

    pub fn is_active_on(&self, day: Weekday) -> bool {
        self.days[day.num_days_from_monday() as usize]
    }

    pub fn with_day(&mut self, day: Weekday, active: bool) -> &mut Self {
        self.days[day.num_days_from_monday() as usize] = active;
        self
    }

    /// True only when every day Monday through Friday is active.
    pub fn weekday(&self) -> bool {
        WEEKDAYS.iter().all(|day| self.is_active_on(*day))
    }

    pub fn with_weekday(&mut self, active: bool) -> &mut Self {
        for day in WEEKDAYS {
            self.with_day(day, active);
        }
        self
    }

    /// True only when both Saturday and Sunday are active.
    pub fn weekend(&self) -> bool {
        WEEKEND.iter().all(|day| self.is_active_on(*day))
    }

    pub fn with_weekend(&mut self, active: bool) -> &mut Self {
        for day in WEEKEND {
            self.with_day(day, active);
        }
        self
    }

    /// Checks the fields that would otherwise put NaN or infinity into a timetable.
    pub(crate) fn validate(&self) -> Result<(), ScenarioError> {
        if !(self.speed_kmh.is_finite() && self.speed_kmh > 0.0) {
            return Err(ScenarioError::InvalidSpeed(self.speed_kmh));
        }
        if self.headway_seconds == 0 {
            return Err(ScenarioError::InvalidHeadway);
        }
        Ok(())
    }
}

pub(crate) fn warn_if_short_headway(seconds: u32) {
    if seconds < MIN_SENSIBLE_HEADWAY_SECONDS {
        warn!(
            headway_seconds = seconds,
            "headway under {} seconds, was it given in minutes?", MIN_SENSIBLE_HEADWAY_SECONDS
        );
    }
}
