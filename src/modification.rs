//! Finalized modification documents and the scenario that groups them.

use serde::Serialize;

use crate::adjust_headway::AdjustHeadwayDocument;
use crate::convert_to_frequency::ConvertToFrequencyDocument;
use crate::error::ScenarioError;
use crate::remove_trip::RemoveTripDocument;
use crate::trip_pattern::AddTripPatternDocument;

/// Discriminator written to the `type` field of every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModificationType {
    AddTripPattern,
    RemoveTrip,
    AdjustHeadway,
    ConvertToFrequency,
}

/// Any finalized modification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Modification {
    AddTripPattern(AddTripPatternDocument),
    RemoveTrip(RemoveTripDocument),
    AdjustHeadway(AdjustHeadwayDocument),
    ConvertToFrequency(ConvertToFrequencyDocument),
}

impl Modification {
    pub fn kind(&self) -> ModificationType {
        match self {
            Modification::AddTripPattern(doc) => doc.kind,
            Modification::RemoveTrip(doc) => doc.kind,
            Modification::AdjustHeadway(doc) => doc.kind,
            Modification::ConvertToFrequency(doc) => doc.kind,
        }
    }

    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<AddTripPatternDocument> for Modification {
    fn from(doc: AddTripPatternDocument) -> Self {
        Modification::AddTripPattern(doc)
    }
}

impl From<RemoveTripDocument> for Modification {
    fn from(doc: RemoveTripDocument) -> Self {
        Modification::RemoveTrip(doc)
    }
}

impl From<AdjustHeadwayDocument> for Modification {
    fn from(doc: AdjustHeadwayDocument) -> Self {
        Modification::AdjustHeadway(doc)
    }
}

impl From<ConvertToFrequencyDocument> for Modification {
    fn from(doc: ConvertToFrequencyDocument) -> Self {
        Modification::ConvertToFrequency(doc)
    }
}

/// Ordered set of modifications handed to the analysis engine together.
///
/// Order is preserved; the engine applies modifications in sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub id: String,
    pub description: String,
    pub modifications: Vec<Modification>,
}

impl Scenario {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            modifications: Vec::new(),
        }
    }

    pub fn add(&mut self, modification: impl Into<Modification>) -> &mut Self {
        self.modifications.push(modification.into());
        self
    }

    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remove_trip::RemoveTrip;
    use serde_json::json;

    #[test]
    fn test_type_names_are_kebab_case() {
        assert_eq!(
            serde_json::to_value(ModificationType::ConvertToFrequency).unwrap(),
            json!("convert-to-frequency")
        );
        assert_eq!(
            serde_json::to_value(ModificationType::AddTripPattern).unwrap(),
            json!("add-trip-pattern")
        );
    }

    #[test]
    fn test_scenario_keeps_insertion_order() {
        let mut first = RemoveTrip::new();
        first.add_route("A");
        let mut second = RemoveTrip::new();
        second.add_route("B");

        let mut scenario = Scenario::new("s1", "drop two routes");
        scenario.add(first.finalize()).add(second.finalize());

        let value: serde_json::Value = serde_json::from_str(&scenario.to_json().unwrap()).unwrap();
        assert_eq!(value["id"], json!("s1"));
        assert_eq!(value["description"], json!("drop two routes"));
        assert_eq!(value["modifications"][0]["routeId"], json!(["A"]));
        assert_eq!(value["modifications"][1]["routeId"], json!(["B"]));
    }

    #[test]
    fn test_modification_serializes_without_wrapper() {
        let modification = Modification::from(RemoveTrip::new().finalize());
        assert_eq!(modification.kind(), ModificationType::RemoveTrip);

        let value: serde_json::Value =
            serde_json::from_str(&modification.to_json().unwrap()).unwrap();
        assert_eq!(value["type"], json!("remove-trip"));
    }
}
