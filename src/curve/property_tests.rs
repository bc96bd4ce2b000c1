//! Property tests for curve module
//!
//! Covers the XP floor, the cumulative recurrence and the greedy inverse.

use proptest::prelude::*;

use crate::config::LevelCurveConfig;
use crate::curve::{LevelCurve, LevelScan};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Any finite coefficients, including negative and pathological ones
fn any_curve_strategy() -> impl Strategy<Value = LevelCurve> {
    (
        -10.0..10.0f64, // a
        -100.0..100.0f64, // b
        -100.0..100.0f64, // c
        -5.0..5.0f64, // multiplier
    )
        .prop_map(|(a, b, c, m)| LevelCurve::new(LevelCurveConfig::new(a, b, c, m)).unwrap())
}

/// Non-negative coefficients: XP per level never decreases
fn monotonic_curve_strategy() -> impl Strategy<Value = LevelCurve> {
    (
        0.0..1.0f64, // a
        0.0..10.0f64, // b
        0.0..50.0f64, // c
        0.1..2.0f64, // multiplier
    )
        .prop_map(|(a, b, c, m)| LevelCurve::new(LevelCurveConfig::new(a, b, c, m)).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// XP per level is at least 1 whatever the coefficients
    #[test]
    fn prop_xp_at_least_one(curve in any_curve_strategy(), level in 1u32..1_000) {
        prop_assert!(curve.xp_for_level(level) >= 1);
    }

    /// total(N) == total(N - 1) + xp(N)
    #[test]
    fn prop_total_recurrence(curve in any_curve_strategy(), n in 1u32..300) {
        prop_assert_eq!(curve.total_xp_to_reach_level(0), 0);
        prop_assert_eq!(
            curve.total_xp_to_reach_level(n),
            curve.total_xp_to_reach_level(n - 1) + curve.xp_for_level(n)
        );
    }

    /// The greedy scan inverts the cumulative total on monotonic curves
    #[test]
    fn prop_level_round_trip(curve in monotonic_curve_strategy(), n in 0u32..200) {
        let total = curve.total_xp_to_reach_level(n);
        prop_assert_eq!(curve.level_from_total_xp(total), n);

        let progress = curve.progress(total);
        prop_assert_eq!(progress.current_level, n);
        prop_assert_eq!(progress.xp_in_level, 0);
        prop_assert_eq!(progress.progress_percent, 0.0);
    }

    /// Just short of a boundary stays on the previous level
    #[test]
    fn prop_one_short_of_boundary(curve in monotonic_curve_strategy(), n in 1u32..200) {
        let total = curve.total_xp_to_reach_level(n);
        prop_assert_eq!(curve.level_from_total_xp(total - 1), n - 1);
    }

    /// Levels never decrease as XP grows, even on non-monotonic curves
    #[test]
    fn prop_level_non_decreasing(
        curve in any_curve_strategy(),
        lo in 0u64..5_000,
        extra in 0u64..5_000
    ) {
        prop_assert!(curve.level_from_total_xp(lo) <= curve.level_from_total_xp(lo + extra));
    }

    /// A resumed scan agrees with fresh scans at every step
    #[test]
    fn prop_scan_matches_fresh(
        curve in any_curve_strategy(),
        steps in prop::collection::vec(0u64..500, 1..30)
    ) {
        let mut scan = LevelScan::new(&curve);
        let mut total = 0u64;
        for step in steps {
            total += step;
            prop_assert_eq!(scan.advance(total), curve.level_from_total_xp(total));
        }
    }

    /// Progress inside a level stays below the next requirement
    #[test]
    fn prop_progress_bounds(curve in any_curve_strategy(), total in 0u64..20_000) {
        let progress = curve.progress(total);
        prop_assert!(progress.xp_in_level < progress.xp_for_next_level);
        prop_assert!(progress.progress_percent >= 0.0);
        prop_assert_eq!(
            progress.xp_in_level,
            total - curve.total_xp_to_reach_level(progress.current_level)
        );
    }
}
