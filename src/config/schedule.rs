//! Schedule and reward configuration structures

use super::Placement;
use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recurrence class of a scheduled game type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl Cadence {
    pub const ALL: [Cadence; 3] = [Cadence::Daily, Cadence::Weekly, Cadence::Monthly];

    /// Length of one game of this cadence, in days
    #[inline]
    pub const fn duration_days(&self) -> u64 {
        match self {
            Cadence::Daily => 1,
            Cadence::Weekly => 7,
            Cadence::Monthly => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
            Cadence::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound on games per cadence period; every rolled game costs a hash
pub const MAX_GAMES_PER_PERIOD: u32 = 10_000;

/// Games scheduled per cadence period (day, week, 30-day month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub daily: u32,
    #[serde(default)]
    pub weekly: u32,
    #[serde(default)]
    pub monthly: u32,
}

impl ScheduleConfig {
    pub const fn new(daily: u32, weekly: u32, monthly: u32) -> Self {
        Self {
            daily,
            weekly,
            monthly,
        }
    }

    pub fn count(&self, cadence: Cadence) -> u32 {
        match cadence {
            Cadence::Daily => self.daily,
            Cadence::Weekly => self.weekly,
            Cadence::Monthly => self.monthly,
        }
    }

    /// Reject counts above [`MAX_GAMES_PER_PERIOD`]
    pub fn validate(&self) -> Result<()> {
        for cadence in Cadence::ALL {
            let count = self.count(cadence);
            if count > MAX_GAMES_PER_PERIOD {
                return Err(CalculatorError::InvalidSchedule {
                    cadence: cadence.as_str(),
                    count,
                    max: MAX_GAMES_PER_PERIOD,
                });
            }
        }
        Ok(())
    }

    /// Nominal games in a year: 365 days, 52 weeks, 12 months
    pub fn games_per_year(&self) -> u64 {
        self.daily as u64 * 365 + self.weekly as u64 * 52 + self.monthly as u64 * 12
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new(2, 1, 1)
    }
}

/// Points per cadence-day for each placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsConfig {
    #[serde(default)]
    pub first: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(default)]
    pub third: u32,
    #[serde(default)]
    pub participation: u32,
}

impl PointsConfig {
    pub const fn new(first: u32, second: u32, third: u32, participation: u32) -> Self {
        Self {
            first,
            second,
            third,
            participation,
        }
    }

    #[inline]
    pub fn base(&self, placement: Placement) -> u32 {
        match placement {
            Placement::First => self.first,
            Placement::Second => self.second,
            Placement::Third => self.third,
            Placement::Participation => self.participation,
        }
    }

    /// Points for one game of `cadence` finished at `placement`.
    ///
    /// Ranked placements scale with the cadence duration; participation is flat.
    #[inline]
    pub fn award(&self, placement: Placement, cadence: Cadence) -> u64 {
        let base = self.base(placement) as u64;
        match placement {
            Placement::Participation => base,
            _ => base * cadence.duration_days(),
        }
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self::new(10, 6, 3, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_durations() {
        assert_eq!(Cadence::Daily.duration_days(), 1);
        assert_eq!(Cadence::Weekly.duration_days(), 7);
        assert_eq!(Cadence::Monthly.duration_days(), 30);
    }

    #[test]
    fn test_participation_does_not_scale() {
        let points = PointsConfig::new(5, 4, 3, 2);
        assert_eq!(points.award(Placement::First, Cadence::Weekly), 35);
        assert_eq!(points.award(Placement::Third, Cadence::Monthly), 90);
        assert_eq!(points.award(Placement::Participation, Cadence::Monthly), 2);
        assert_eq!(points.award(Placement::Participation, Cadence::Daily), 2);
    }

    #[test]
    fn test_games_per_year() {
        assert_eq!(ScheduleConfig::new(0, 0, 0).games_per_year(), 0);
        assert_eq!(ScheduleConfig::new(1, 2, 3).games_per_year(), 365 + 104 + 36);
    }

    #[test]
    fn test_schedule_cap() {
        let max = MAX_GAMES_PER_PERIOD;
        assert!(ScheduleConfig::new(max, max, max).validate().is_ok());
        assert_eq!(
            ScheduleConfig::new(0, u32::MAX, 0).validate(),
            Err(CalculatorError::InvalidSchedule {
                cadence: "weekly",
                count: u32::MAX,
                max,
            })
        );
        assert!(ScheduleConfig::new(0, 0, max + 1).validate().is_err());
    }
}
