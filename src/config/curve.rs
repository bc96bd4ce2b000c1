//! Level curve configuration structures

use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Polynomial coefficients for XP(level) = floor(max(1, (a·level² + b·level + c) · multiplier))
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelCurveConfig {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub multiplier: f64,
}

impl LevelCurveConfig {
    pub const fn new(a: f64, b: f64, c: f64, multiplier: f64) -> Self {
        Self {
            a,
            b,
            c,
            multiplier,
        }
    }

    /// Every coefficient must be finite; NaN would otherwise flow through the
    /// whole curve and render as garbage.
    pub fn validate(&self) -> Result<()> {
        let coefficients = [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("multiplier", self.multiplier),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(CalculatorError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}

impl Default for LevelCurveConfig {
    fn default() -> Self {
        CurvePreset::Standard.config()
    }
}

/// Shipped coefficient presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurvePreset {
    Standard,
    Gentle,
    Steep,
    /// Negative linear and constant terms: the first dozen levels sit on the
    /// 1 XP floor before the quadratic takes over
    Exploratory,
}

impl CurvePreset {
    pub const ALL: [CurvePreset; 4] = [
        CurvePreset::Standard,
        CurvePreset::Gentle,
        CurvePreset::Steep,
        CurvePreset::Exploratory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CurvePreset::Standard => "standard",
            CurvePreset::Gentle => "gentle",
            CurvePreset::Steep => "steep",
            CurvePreset::Exploratory => "exploratory",
        }
    }

    pub fn config(&self) -> LevelCurveConfig {
        match self {
            CurvePreset::Standard => LevelCurveConfig::new(0.035, 2.5, 10.0, 0.5),
            CurvePreset::Gentle => LevelCurveConfig::new(0.01, 1.5, 8.0, 0.5),
            CurvePreset::Steep => LevelCurveConfig::new(0.1, 5.0, 20.0, 1.0),
            CurvePreset::Exploratory => LevelCurveConfig::new(0.5, -6.0, -12.0, 1.0),
        }
    }
}

impl FromStr for CurvePreset {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        CurvePreset::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| CalculatorError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(
            LevelCurveConfig::default(),
            LevelCurveConfig::new(0.035, 2.5, 10.0, 0.5)
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let nan = LevelCurveConfig::new(f64::NAN, 1.0, 1.0, 1.0);
        assert_eq!(
            nan.validate().unwrap_err().to_string(),
            "Invalid level curve coefficient a: NaN"
        );

        let inf = LevelCurveConfig::new(0.0, 1.0, 1.0, f64::INFINITY);
        assert!(matches!(
            inf.validate(),
            Err(CalculatorError::InvalidCoefficient {
                name: "multiplier",
                ..
            })
        ));
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in CurvePreset::ALL {
            assert!(preset.config().validate().is_ok());
            assert_eq!(preset.name().parse::<CurvePreset>().unwrap(), preset);
        }
        assert!("linear".parse::<CurvePreset>().is_err());
    }
}
