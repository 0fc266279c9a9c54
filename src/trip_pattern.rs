//! New line built from a drawn geometry, a stop spacing and service periods.
//!
//! Nothing is cached: every finalization re-discretizes the geometry from the
//! builder's current state, so the same pattern can be finalized once per
//! direction by calling `reverse()` in between.

use serde::Serialize;
use tracing::debug;

use crate::config::ScenarioConfig;
use crate::error::ScenarioError;
use crate::haversine::Haversine;
use crate::modification::ModificationType;
use crate::polyline::{Polyline, PolylineEncoding};
use crate::service_period::ServicePeriod;
use crate::stops::discretize;
use crate::timetable::{Timetable, build_timetable};
use crate::traits::{Coordinate, DistanceProvider, PolylineEncoder};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddTripPatternDocument {
    #[serde(rename = "type")]
    pub kind: ModificationType,
    pub name: String,
    /// Stop flag per geometry vertex.
    pub stops: Vec<bool>,
    pub timetables: Vec<Timetable>,
    /// Encoded polyline of the discretized geometry.
    pub geometry: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPattern {
    name: String,
    geometry: Option<Vec<Coordinate>>,
    stop_spacing_m: f64,
    periods: Vec<ServicePeriod>,
    reversed: bool,
}

impl TripPattern {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn geometry(&self) -> Option<&[Coordinate]> {
        self.geometry.as_deref()
    }

    pub fn with_geometry(&mut self, geometry: Vec<Coordinate>) -> &mut Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn stop_spacing(&self) -> f64 {
        self.stop_spacing_m
    }

    /// Distance between generated stops, in meters.
    pub fn with_stop_spacing(&mut self, meters: f64) -> &mut Self {
        self.stop_spacing_m = meters;
        self
    }

    pub fn periods(&self) -> &[ServicePeriod] {
        &self.periods
    }

    /// Appends a period. The returned reference stays valid for edits that
    /// the next finalization will pick up.
    pub fn add_period(&mut self, period: ServicePeriod) -> &mut ServicePeriod {
        self.periods.push(period);
        let last = self.periods.len() - 1;
        &mut self.periods[last]
    }

    pub fn period_mut(&mut self, index: usize) -> Option<&mut ServicePeriod> {
        self.periods.get_mut(index)
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Flip the direction of travel.
    pub fn reverse(&mut self) -> &mut Self {
        self.reversed = !self.reversed;
        self
    }

    /// Finalize with haversine distances and precision 5 polylines.
    pub fn finalize(&self) -> Result<AddTripPatternDocument, ScenarioError> {
        self.finalize_with(&Haversine::default(), &PolylineEncoding::default())
    }

    pub fn finalize_with_config(
        &self,
        config: &ScenarioConfig,
    ) -> Result<AddTripPatternDocument, ScenarioError> {
        config.validate()?;
        self.finalize_with(&config.distance(), &config.encoding()?)
    }

    pub fn finalize_with<D, E>(
        &self,
        distance: &D,
        encoder: &E,
    ) -> Result<AddTripPatternDocument, ScenarioError>
    where
        D: DistanceProvider + ?Sized,
        E: PolylineEncoder + ?Sized,
    {
        let geometry = self.geometry.as_deref().ok_or(ScenarioError::MissingGeometry)?;

        let mut pattern = discretize(geometry, self.stop_spacing_m, distance)?;
        if self.reversed {
            pattern = pattern.reversed();
        }

        let stop_count = pattern.stop_count();
        let timetables = self
            .periods
            .iter()
            .map(|period| -> Result<Timetable, ScenarioError> {
                period.validate()?;
                Ok(build_timetable(stop_count, &pattern.hop_distances_m, period))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            name = %self.name,
            vertices = pattern.geometry.len(),
            stops = stop_count,
            periods = timetables.len(),
            reversed = self.reversed,
            "finalized trip pattern"
        );

        Ok(AddTripPatternDocument {
            kind: ModificationType::AddTripPattern,
            name: self.name.clone(),
            stops: pattern.is_stop,
            timetables,
            geometry: encoder.encode(&Polyline::from_coordinates(&pattern.geometry)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> TripPattern {
        let mut pattern = TripPattern::new("Crosstown");
        pattern
            .with_geometry(vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.01)])
            .with_stop_spacing(500.0);
        pattern
    }

    #[test]
    fn test_missing_geometry_is_rejected() {
        let mut pattern = TripPattern::new("empty");
        pattern.with_stop_spacing(400.0);
        assert!(matches!(pattern.finalize(), Err(ScenarioError::MissingGeometry)));
    }

    #[test]
    fn test_unset_spacing_is_rejected() {
        let mut pattern = TripPattern::new("no spacing");
        pattern.with_geometry(vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.01)]);
        assert!(matches!(pattern.finalize(), Err(ScenarioError::InvalidStopSpacing(_))));
    }

    #[test]
    fn test_bad_period_speed_is_rejected() {
        let mut pattern = pattern();
        pattern.add_period(ServicePeriod::new()).with_speed_kmh(-5.0);
        assert!(matches!(pattern.finalize(), Err(ScenarioError::InvalidSpeed(_))));
    }

    #[test]
    fn test_reverse_toggles() {
        let mut pattern = pattern();
        assert!(!pattern.is_reversed());
        pattern.reverse();
        assert!(pattern.is_reversed());
        pattern.reverse();
        assert!(!pattern.is_reversed());
    }

    #[test]
    fn test_finalize_does_not_touch_geometry() {
        let pattern = pattern();
        let before = pattern.geometry().map(<[Coordinate]>::to_vec);
        pattern.finalize().unwrap();
        assert_eq!(pattern.geometry().map(<[Coordinate]>::to_vec), before);
    }

    #[test]
    fn test_period_edits_after_adding_are_seen() {
        let mut pattern = pattern();
        pattern.add_period(ServicePeriod::new());
        let first = pattern.finalize().unwrap();

        pattern.period_mut(0).unwrap().with_headway(1200);
        let second = pattern.finalize().unwrap();

        assert_eq!(first.timetables[0].headway_secs, 600);
        assert_eq!(second.timetables[0].headway_secs, 1200);
    }
}
