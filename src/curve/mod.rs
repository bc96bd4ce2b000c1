//! Level curve evaluation and its greedy inverse
//!
//! XP per level comes from a quadratic in the level number. The curve is not
//! required to be monotonic: coefficients are exploratory inputs and a
//! decreasing stretch is evaluated as-is.

#[cfg(test)]
mod property_tests;

use crate::config::LevelCurveConfig;
use crate::error::Result;
use serde::Serialize;

/// Position inside the level curve for a cumulative XP total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub current_level: u32,
    pub xp_in_level: u64,
    pub xp_for_next_level: u64,
    /// Not clamped to 100
    pub progress_percent: f64,
}

/// Validated level curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelCurve {
    config: LevelCurveConfig,
}

impl LevelCurve {
    pub fn new(config: LevelCurveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LevelCurveConfig {
        &self.config
    }

    /// XP required to complete `level`: floor(max(1, (a·L² + b·L + c) · multiplier))
    #[inline]
    pub fn xp_for_level(&self, level: u32) -> u64 {
        let l = level as f64;
        let LevelCurveConfig { a, b, c, multiplier } = self.config;
        let raw = (a * l.powi(2) + b * l + c) * multiplier;
        // Saturating cast: only astronomically high levels reach u64::MAX
        raw.max(1.0).floor() as u64
    }

    /// Sum of XP for levels 1..=target
    pub fn total_xp_to_reach_level(&self, target: u32) -> u64 {
        (1..=target).fold(0u64, |acc, level| {
            acc.saturating_add(self.xp_for_level(level))
        })
    }

    /// Highest level whose cumulative requirement fits in `total_xp`.
    ///
    /// Greedy forward scan from level 0; do not replace with a binary search,
    /// the scan order is what defines the answer on non-monotonic curves.
    pub fn level_from_total_xp(&self, total_xp: u64) -> u32 {
        let mut scan = LevelScan::new(self);
        scan.advance(total_xp)
    }

    pub fn progress(&self, total_xp: u64) -> LevelProgress {
        let mut scan = LevelScan::new(self);
        scan.advance(total_xp);
        scan.progress(total_xp)
    }
}

/// Resumable form of the greedy level scan.
///
/// Every level costs at least 1 XP, so cumulative requirements are strictly
/// increasing and the greedy answer never goes down as the total grows. A scan
/// fed non-decreasing totals therefore matches a fresh scan at every step.
#[derive(Debug, Clone)]
pub struct LevelScan<'a> {
    curve: &'a LevelCurve,
    level: u32,
    consumed: u64,
}

impl<'a> LevelScan<'a> {
    pub fn new(curve: &'a LevelCurve) -> Self {
        Self {
            curve,
            level: 0,
            consumed: 0,
        }
    }

    /// Completed level so far
    pub fn level(&self) -> u32 {
        self.level
    }

    /// XP spent on completed levels; equals `total_xp_to_reach_level(level)`
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Consume levels while the next one is affordable within `total_xp`
    pub fn advance(&mut self, total_xp: u64) -> u32 {
        debug_assert!(
            total_xp >= self.consumed,
            "level scan totals must not decrease"
        );
        while self.level < u32::MAX {
            let next = self.curve.xp_for_level(self.level + 1);
            match self.consumed.checked_add(next) {
                Some(after) if after <= total_xp => {
                    self.consumed = after;
                    self.level += 1;
                }
                _ => break,
            }
        }
        self.level
    }

    /// Progress tuple for `total_xp`, which must be the last total passed to `advance`
    pub fn progress(&self, total_xp: u64) -> LevelProgress {
        let xp_in_level = total_xp.saturating_sub(self.consumed);
        let xp_for_next_level = self.curve.xp_for_level(self.level.saturating_add(1));
        LevelProgress {
            current_level: self.level,
            xp_in_level,
            xp_for_next_level,
            progress_percent: xp_in_level as f64 / xp_for_next_level as f64 * 100.0,
        }
    }
}
