//! Headway change for existing frequency-based trips.

use serde::Serialize;

use crate::error::ScenarioError;
use crate::modification::ModificationType;
use crate::remove_trip::TripFilter;
use crate::service_period::warn_if_short_headway;

const DEFAULT_HEADWAY_SECONDS: u32 = 600;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustHeadwayDocument {
    #[serde(rename = "type")]
    pub kind: ModificationType,
    pub agency_id: Option<String>,
    pub route_id: Option<Vec<String>>,
    pub trip_id: Option<Vec<String>>,
    pub route_type: Option<Vec<i32>>,
    pub headway: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustHeadway {
    filter: TripFilter,
    headway_seconds: u32,
}

impl Default for AdjustHeadway {
    fn default() -> Self {
        Self {
            filter: TripFilter::default(),
            headway_seconds: DEFAULT_HEADWAY_SECONDS,
        }
    }
}

impl AdjustHeadway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &TripFilter {
        &self.filter
    }

    pub fn headway(&self) -> u32 {
        self.headway_seconds
    }

    pub fn with_headway(&mut self, seconds: u32) -> &mut Self {
        warn_if_short_headway(seconds);
        self.headway_seconds = seconds;
        self
    }

    pub fn with_agency(&mut self, agency_id: impl Into<String>) -> &mut Self {
        self.filter.agency_id = Some(agency_id.into());
        self
    }

    pub fn add_route(&mut self, route_id: impl Into<String>) -> &mut Self {
        self.filter.add_route(route_id);
        self
    }

    pub fn add_trip(&mut self, trip_id: impl Into<String>) -> &mut Self {
        self.filter.add_trip(trip_id);
        self
    }

    pub fn add_type(&mut self, route_type: i32) -> &mut Self {
        self.filter.add_type(route_type);
        self
    }

    pub fn finalize(&self) -> Result<AdjustHeadwayDocument, ScenarioError> {
        if self.headway_seconds == 0 {
            return Err(ScenarioError::InvalidHeadway);
        }

        let filter = self.filter.clone();
        Ok(AdjustHeadwayDocument {
            kind: ModificationType::AdjustHeadway,
            agency_id: filter.agency_id,
            route_id: filter.route_ids,
            trip_id: filter.trip_ids,
            route_type: filter.route_types,
            headway: self.headway_seconds,
        })
    }
}
