//! Removal of existing trips matching a set of filters.
//!
//! An unset filter (`None`) places no constraint on that dimension. An empty
//! list matches nothing. The two must never be collapsed.

use serde::Serialize;

use crate::modification::ModificationType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTripDocument {
    #[serde(rename = "type")]
    pub kind: ModificationType,
    pub agency_id: Option<String>,
    pub route_id: Option<Vec<String>>,
    pub trip_id: Option<Vec<String>>,
    pub route_type: Option<Vec<i32>>,
}

/// Trip filters shared by removal and headway adjustment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripFilter {
    pub agency_id: Option<String>,
    pub route_ids: Option<Vec<String>>,
    pub trip_ids: Option<Vec<String>>,
    pub route_types: Option<Vec<i32>>,
}

impl TripFilter {
    pub fn add_route(&mut self, route_id: impl Into<String>) {
        self.route_ids.get_or_insert_with(Vec::new).push(route_id.into());
    }

    pub fn add_trip(&mut self, trip_id: impl Into<String>) {
        self.trip_ids.get_or_insert_with(Vec::new).push(trip_id.into());
    }

    pub fn add_type(&mut self, route_type: i32) {
        self.route_types.get_or_insert_with(Vec::new).push(route_type);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoveTrip {
    filter: TripFilter,
}

impl RemoveTrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &TripFilter {
        &self.filter
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

    /// Adds a GTFS `route_type` (0 tram, 3 bus, ...).
    pub fn add_type(&mut self, route_type: i32) -> &mut Self {
        self.filter.add_type(route_type);
        self
    }

    pub fn finalize(&self) -> RemoveTripDocument {
        let filter = self.filter.clone();
        RemoveTripDocument {
            kind: ModificationType::RemoveTrip,
            agency_id: filter.agency_id,
            route_id: filter.route_ids,
            trip_id: filter.trip_ids,
            route_type: filter.route_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_start_unset() {
        let doc = RemoveTrip::new().finalize();
        assert_eq!(doc.kind, ModificationType::RemoveTrip);
        assert_eq!(doc.agency_id, None);
        assert_eq!(doc.route_id, None);
        assert_eq!(doc.trip_id, None);
        assert_eq!(doc.route_type, None);
    }

    #[test]
    fn test_first_add_initializes_list() {
        let mut builder = RemoveTrip::new();
        builder.add_route("R1");
        assert_eq!(builder.filter().route_ids, Some(vec!["R1".to_string()]));
        assert_eq!(builder.filter().trip_ids, None);
    }

    #[test]
    fn test_adds_accumulate_in_order() {
        let mut builder = RemoveTrip::new();
        builder
            .with_agency("RTC")
            .add_trip("t2")
            .add_trip("t1")
            .add_type(3)
            .add_type(0);

        let doc = builder.finalize();
        assert_eq!(doc.agency_id.as_deref(), Some("RTC"));
        assert_eq!(doc.trip_id, Some(vec!["t2".to_string(), "t1".to_string()]));
        assert_eq!(doc.route_type, Some(vec![3, 0]));
        assert_eq!(doc.route_id, None);
    }

    #[test]
    fn test_finalize_reflects_later_changes() {
        let mut builder = RemoveTrip::new();
        let before = builder.finalize();
        builder.add_route("R9");
        let after = builder.finalize();

        assert_eq!(before.route_id, None);
        assert_eq!(after.route_id, Some(vec!["R9".to_string()]));
        assert_eq!(builder.finalize(), after);
    }
}
