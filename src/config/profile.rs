//! Placement and player profile configuration structures

use crate::error::{CalculatorError, Result};
use crate::roller::SeedNamespace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome rank of a single simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    First,
    Second,
    Third,
    Participation,
}

impl Placement {
    /// All placements in band order
    pub const ALL: [Placement; 4] = [
        Placement::First,
        Placement::Second,
        Placement::Third,
        Placement::Participation,
    ];

    /// Position in band order
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Placement::First => 0,
            Placement::Second => 1,
            Placement::Third => 2,
            Placement::Participation => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::First => "first",
            Placement::Second => "second",
            Placement::Third => "third",
            Placement::Participation => "participation",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability of each placement in a single game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementDistribution {
    #[serde(default)]
    pub first: f64,
    #[serde(default)]
    pub second: f64,
    #[serde(default)]
    pub third: f64,
    #[serde(default)]
    pub participation: f64,
}

impl PlacementDistribution {
    pub const fn new(first: f64, second: f64, third: f64, participation: f64) -> Self {
        Self {
            first,
            second,
            third,
            participation,
        }
    }

    /// Probability assigned to a placement
    #[inline]
    pub fn probability(&self, placement: Placement) -> f64 {
        match placement {
            Placement::First => self.first,
            Placement::Second => self.second,
            Placement::Third => self.third,
            Placement::Participation => self.participation,
        }
    }

    /// Combined probability of the ranked placements
    #[inline]
    pub fn ranked_total(&self) -> f64 {
        self.first + self.second + self.third
    }

    /// Reject negative or non-finite probabilities, and ranked placements
    /// that together exceed 1.
    ///
    /// Participation is free: it absorbs whatever the ranked bands leave
    /// over, both when rolling and when bucketing.
    pub fn validate(&self) -> Result<()> {
        for placement in Placement::ALL {
            let p = self.probability(placement);
            if !p.is_finite() || p < 0.0 {
                return Err(CalculatorError::InvalidDistribution(format!(
                    "{} probability must be a non-negative number, got {}",
                    placement, p
                )));
            }
        }
        let ranked = self.ranked_total();
        if ranked > 1.0 + RANKED_TOLERANCE {
            return Err(CalculatorError::InvalidDistribution(format!(
                "first, second and third must not exceed 1 combined, got {}",
                ranked
            )));
        }
        Ok(())
    }
}

/// Slack for ranked totals that round just above 1
const RANKED_TOLERANCE: f64 = 1e-9;

/// Named placement distribution presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerProfile {
    WinsEverything,
    Exceptional,
    #[default]
    Average,
    Looser,
}

impl PlayerProfile {
    pub const ALL: [PlayerProfile; 4] = [
        PlayerProfile::WinsEverything,
        PlayerProfile::Exceptional,
        PlayerProfile::Average,
        PlayerProfile::Looser,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerProfile::WinsEverything => "wins-everything",
            PlayerProfile::Exceptional => "exceptional",
            PlayerProfile::Average => "average",
            PlayerProfile::Looser => "looser",
        }
    }

    pub fn distribution(&self) -> PlacementDistribution {
        match self {
            PlayerProfile::WinsEverything => PlacementDistribution::new(1.0, 0.0, 0.0, 0.0),
            PlayerProfile::Exceptional => PlacementDistribution::new(0.5, 0.25, 0.15, 0.1),
            PlayerProfile::Average => PlacementDistribution::new(0.15, 0.2, 0.25, 0.4),
            PlayerProfile::Looser => PlacementDistribution::new(0.02, 0.05, 0.08, 0.85),
        }
    }

    /// Seed namespace keeping each profile's rolls on its own stream
    pub fn seed_namespace(&self) -> SeedNamespace {
        match self {
            PlayerProfile::WinsEverything => SeedNamespace::new(1, 100),
            PlayerProfile::Exceptional => SeedNamespace::new(2, 200),
            PlayerProfile::Average => SeedNamespace::new(3, 300),
            PlayerProfile::Looser => SeedNamespace::new(4, 400),
        }
    }
}

impl fmt::Display for PlayerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerProfile {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        PlayerProfile::ALL
            .into_iter()
            .find(|profile| profile.name() == normalized)
            .ok_or_else(|| CalculatorError::UnknownProfile(s.to_string()))
    }
}
