//! Finalization settings shared across trip patterns.

use serde::Deserialize;

use crate::error::ScenarioError;
use crate::haversine::{EARTH_RADIUS_KM, Haversine};
use crate::polyline::{DEFAULT_PRECISION, PolylineEncoding};

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Sphere radius used for stop spacing distances (default: 6371 km)
    #[serde(default = "ScenarioConfig::default_earth_radius_km")]
    pub earth_radius_km: f64,
    /// Decimal digits kept in encoded geometries (default: 5)
    /// Must match the precision the consuming engine decodes with.
    #[serde(default = "ScenarioConfig::default_polyline_precision")]
    pub polyline_precision: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: Self::default_earth_radius_km(),
            polyline_precision: Self::default_polyline_precision(),
        }
    }
}

impl ScenarioConfig {
    fn default_earth_radius_km() -> f64 {
        EARTH_RADIUS_KM
    }

    fn default_polyline_precision() -> u32 {
        DEFAULT_PRECISION
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make finalization panic or emit degenerate stops.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err(ScenarioError::InvalidEarthRadius(self.earth_radius_km));
        }
        self.encoding()?;
        Ok(())
    }

    pub fn distance(&self) -> Haversine {
        Haversine::new(self.earth_radius_km)
    }

    pub fn encoding(&self) -> Result<PolylineEncoding, ScenarioError> {
        PolylineEncoding::new(self.polyline_precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ScenarioConfig::from_json_str("{}").unwrap();
        assert_eq!(config.earth_radius_km, EARTH_RADIUS_KM);
        assert_eq!(config.polyline_precision, 5);
    }

    #[test]
    fn test_partial_json_overrides_one_field() {
        let config = ScenarioConfig::from_json_str(r#"{"polyline_precision": 6}"#).unwrap();
        assert_eq!(config.polyline_precision, 6);
        assert_eq!(config.earth_radius_km, EARTH_RADIUS_KM);
        assert_eq!(config.encoding().unwrap().precision(), 6);
    }

    #[test]
    fn test_precision_too_high_is_rejected() {
        let err = ScenarioConfig::from_json_str(r#"{"polyline_precision": 17}"#).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidPrecision(17)));
    }

    #[test]
    fn test_non_positive_radius_is_rejected() {
        for json in [r#"{"earth_radius_km": 0}"#, r#"{"earth_radius_km": -6371.0}"#] {
            let err = ScenarioConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, ScenarioError::InvalidEarthRadius(_)));
        }
    }

    #[test]
    fn test_validate_catches_hand_built_config() {
        let config = ScenarioConfig {
            polyline_precision: 40,
            ..ScenarioConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScenarioError::InvalidPrecision(40))));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = ScenarioConfig::from_json_str("polyline_precision = 6").unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }
}
