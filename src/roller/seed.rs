//! Seed derivation for individually rolled games

use serde::{Deserialize, Serialize};

/// Stride between consecutive weekly occurrences in seed space
pub const WEEKLY_SEED_STRIDE: i64 = 1_000;
/// Stride between consecutive monthly occurrences in seed space
pub const MONTHLY_SEED_STRIDE: i64 = 10_000;

/// Per-profile offsets added to every weekly and monthly seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedNamespace {
    pub weekly: i64,
    pub monthly: i64,
}

impl SeedNamespace {
    pub const fn new(weekly: i64, monthly: i64) -> Self {
        Self { weekly, monthly }
    }

    /// Seed for game `game_index` (0-based) of weekly occurrence `week_index`
    #[inline]
    pub fn weekly_seed(&self, week_index: u32, game_index: u32) -> i64 {
        week_index as i64 * WEEKLY_SEED_STRIDE + game_index as i64 + self.weekly
    }

    /// Seed for game `game_index` (0-based) of monthly occurrence `month_index`
    #[inline]
    pub fn monthly_seed(&self, month_index: u32, game_index: u32) -> i64 {
        month_index as i64 * MONTHLY_SEED_STRIDE + game_index as i64 + self.monthly
    }
}

/// Weekly occurrence index for `day`, if a weekly game lands on it.
/// Day 7 is occurrence 1.
#[inline]
pub fn weekly_occurrence(day: u32) -> Option<u32> {
    (day > 0 && day % 7 == 0).then_some(day / 7)
}

/// Monthly occurrence index for `day`, if a monthly game lands on it.
/// Day 30 is occurrence 1.
#[inline]
pub fn monthly_occurrence(day: u32) -> Option<u32> {
    (day > 0 && day % 30 == 0).then_some(day / 30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_formulas() {
        let ns = SeedNamespace::new(3, 300);
        assert_eq!(ns.weekly_seed(1, 0), 1003);
        assert_eq!(ns.weekly_seed(52, 4), 52_007);
        assert_eq!(ns.monthly_seed(1, 0), 10_300);
        assert_eq!(ns.monthly_seed(12, 2), 120_302);
    }

    #[test]
    fn test_occurrences() {
        assert_eq!(weekly_occurrence(6), None);
        assert_eq!(weekly_occurrence(7), Some(1));
        assert_eq!(weekly_occurrence(364), Some(52));
        assert_eq!(weekly_occurrence(0), None);
        assert_eq!(monthly_occurrence(29), None);
        assert_eq!(monthly_occurrence(30), Some(1));
        assert_eq!(monthly_occurrence(360), Some(12));
        assert_eq!(monthly_occurrence(365), None);
    }
}
