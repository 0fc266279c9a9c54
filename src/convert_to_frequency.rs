//! Conversion of scheduled routes into frequency-based service.

use serde::Serialize;

use crate::modification::ModificationType;

/// How existing trips are grouped into frequency entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupBy {
    #[default]
    RouteDirection,
    Route,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToFrequencyDocument {
    #[serde(rename = "type")]
    pub kind: ModificationType,
    pub window_start: i32,
    pub window_end: i32,
    pub group_by: GroupBy,
    /// Never null: an empty list converts nothing.
    pub route_id: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertToFrequency {
    route_ids: Vec<String>,
    window_start: i32,
    window_end: i32,
    group_by: GroupBy,
}

impl Default for ConvertToFrequency {
    fn default() -> Self {
        Self {
            route_ids: Vec::new(),
            window_start: 0,
            window_end: 86_400,
            group_by: GroupBy::default(),
        }
    }
}

impl ConvertToFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[String] {
        &self.route_ids
    }

    pub fn add_route(&mut self, route_id: impl Into<String>) -> &mut Self {
        self.route_ids.push(route_id.into());
        self
    }

    /// Window of the day, in seconds after GTFS midnight, over which trips are sampled.
    pub fn window(&self) -> (i32, i32) {
        (self.window_start, self.window_end)
    }

    pub fn with_window(&mut self, start: i32, end: i32) -> &mut Self {
        self.window_start = start;
        self.window_end = end;
        self
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    pub fn with_group_by(&mut self, group_by: GroupBy) -> &mut Self {
        self.group_by = group_by;
        self
    }

    pub fn finalize(&self) -> ConvertToFrequencyDocument {
        ConvertToFrequencyDocument {
            kind: ModificationType::ConvertToFrequency,
            window_start: self.window_start,
            window_end: self.window_end,
            group_by: self.group_by,
            route_id: self.route_ids.clone(),
        }
    }
}
