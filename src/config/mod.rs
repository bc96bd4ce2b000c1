//! Configuration module for calculator inputs
//!
//! This module holds the typed calculator inputs and loads them from JSON or,
//! with the `python` feature, from Python dicts and objects.

mod curve;
mod profile;
mod schedule;

pub use curve::*;
pub use profile::*;
pub use schedule::*;

use crate::error::Result;
use crate::roller::SeedNamespace;
use serde::{Deserialize, Serialize};

/// Complete configuration snapshot for one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub profile: PlayerProfile,
    /// Overrides the profile's distribution when set
    pub distribution: Option<PlacementDistribution>,
    /// Overrides the profile's seed namespace when set
    pub seed_namespace: Option<SeedNamespace>,
    pub schedule: ScheduleConfig,
    pub points: PointsConfig,
    pub curve: LevelCurveConfig,
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration; omitted sections take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Distribution in effect: the override, else the profile preset
    pub fn distribution(&self) -> PlacementDistribution {
        self.distribution
            .unwrap_or_else(|| self.profile.distribution())
    }

    /// Seed namespace in effect: the override, else the profile default
    pub fn seed_namespace(&self) -> SeedNamespace {
        self.seed_namespace
            .unwrap_or_else(|| self.profile.seed_namespace())
    }

    pub fn validate(&self) -> Result<()> {
        self.curve.validate()?;
        self.distribution().validate()?;
        self.schedule.validate()?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::extract_config;

#[cfg(feature = "python")]
mod python {
    use super::*;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    /// Helper to get optional attribute from either dict or object
    fn get_attr_opt<'py>(obj: &Bound<'py, PyAny>, name: &str) -> Option<Bound<'py, PyAny>> {
        let value = if let Ok(dict) = obj.downcast::<PyDict>() {
            dict.get_item(name).ok().flatten()
        } else {
            obj.getattr(name).ok()
        };
        value.filter(|v| !v.is_none())
    }

    /// Helper to get a required attribute from either dict or object
    fn get_attr<'py>(obj: &Bound<'py, PyAny>, name: &str) -> PyResult<Bound<'py, PyAny>> {
        get_attr_opt(obj, name)
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    }

    fn get_u32(obj: &Bound<'_, PyAny>, name: &str) -> PyResult<u32> {
        match get_attr_opt(obj, name) {
            Some(v) => v.extract(),
            None => Ok(0),
        }
    }

    fn get_f64(obj: &Bound<'_, PyAny>, name: &str) -> PyResult<f64> {
        match get_attr_opt(obj, name) {
            Some(v) => v.extract(),
            None => Ok(0.0),
        }
    }

    /// Build a validated `CalculatorConfig` from a Python dict or object.
    ///
    /// Recognised keys: `profile` (name), `distribution`, `seed_namespace`,
    /// `schedule`, `points`, `curve` and `curve_preset` (name, wins over `curve`).
    pub fn extract_config(obj: &Bound<'_, PyAny>) -> PyResult<CalculatorConfig> {
        let mut config = CalculatorConfig::default();

        if let Some(profile) = get_attr_opt(obj, "profile") {
            let name: String = profile.extract()?;
            config.profile = name.parse()?;
        }

        if let Some(dist) = get_attr_opt(obj, "distribution") {
            config.distribution = Some(PlacementDistribution::new(
                get_f64(&dist, "first")?,
                get_f64(&dist, "second")?,
                get_f64(&dist, "third")?,
                get_f64(&dist, "participation")?,
            ));
        }

        if let Some(ns) = get_attr_opt(obj, "seed_namespace") {
            config.seed_namespace = Some(SeedNamespace::new(
                get_attr(&ns, "weekly")?.extract()?,
                get_attr(&ns, "monthly")?.extract()?,
            ));
        }

        if let Some(schedule) = get_attr_opt(obj, "schedule") {
            config.schedule = ScheduleConfig::new(
                get_u32(&schedule, "daily")?,
                get_u32(&schedule, "weekly")?,
                get_u32(&schedule, "monthly")?,
            );
        }

        if let Some(points) = get_attr_opt(obj, "points") {
            config.points = PointsConfig::new(
                get_u32(&points, "first")?,
                get_u32(&points, "second")?,
                get_u32(&points, "third")?,
                get_u32(&points, "participation")?,
            );
        }

        if let Some(preset) = get_attr_opt(obj, "curve_preset") {
            let name: String = preset.extract()?;
            config.curve = name.parse::<CurvePreset>()?.config();
        } else if let Some(curve) = get_attr_opt(obj, "curve") {
            config.curve = LevelCurveConfig::new(
                get_attr(&curve, "a")?.extract()?,
                get_attr(&curve, "b")?.extract()?,
                get_attr(&curve, "c")?.extract()?,
                get_attr(&curve, "multiplier")?.extract()?,
            );
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.distribution(), PlayerProfile::Average.distribution());
        assert_eq!(
            config.seed_namespace(),
            PlayerProfile::Average.seed_namespace()
        );
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "profile": "wins-everything",
            "schedule": { "daily": 1 },
            "points": { "first": 5 },
            "curve": { "a": 0.035, "b": 2.5, "c": 10, "multiplier": 0.5 }
        }"#;
        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(config.profile, PlayerProfile::WinsEverything);
        assert_eq!(config.schedule, ScheduleConfig::new(1, 0, 0));
        assert_eq!(config.points, PointsConfig::new(5, 0, 0, 0));
        assert_eq!(config.curve, CurvePreset::Standard.config());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let json = r#"{
            "profile": "looser",
            "distribution": { "first": 0.7, "participation": 0.3 },
            "seed_namespace": { "weekly": 9, "monthly": 900 }
        }"#;
        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(
            config.distribution(),
            PlacementDistribution::new(0.7, 0.0, 0.0, 0.3)
        );
        assert_eq!(config.seed_namespace(), SeedNamespace::new(9, 900));
    }

    #[test]
    fn test_malformed_json() {
        let err = CalculatorConfig::from_json("{ \"schedule\": { \"daily\": -1 } }").unwrap_err();
        assert!(matches!(err, CalculatorError::Deserialization(_)));

        let err = CalculatorConfig::from_json("{ \"profile\": \"champion\" }").unwrap_err();
        assert!(matches!(err, CalculatorError::Deserialization(_)));
    }

    #[test]
    fn test_invalid_distribution_rejected() {
        let json = r#"{ "distribution": { "first": -1.0, "participation": 2.0 } }"#;
        assert!(matches!(
            CalculatorConfig::from_json(json),
            Err(CalculatorError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_profile_name() {
        let config = CalculatorConfig {
            profile: PlayerProfile::Exceptional,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"exceptional\""));
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }
}
