//! Placement selection from a seed

use crate::config::{Placement, PlacementDistribution};

/// Map a seed to a reproducible fraction in [0, 1).
///
/// `frac(sin(seed) * 10000)`: a cheap hash, not a random number generator.
#[inline]
pub fn fraction(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Classify a fraction into a placement band.
///
/// Bands are laid out first, second, third, participation with widths equal to
/// the probabilities. Participation takes everything past the third band.
#[inline]
pub fn classify(value: f64, distribution: &PlacementDistribution) -> Placement {
    let mut upper = distribution.first;
    if value < upper {
        return Placement::First;
    }
    upper += distribution.second;
    if value < upper {
        return Placement::Second;
    }
    upper += distribution.third;
    if value < upper {
        return Placement::Third;
    }
    Placement::Participation
}

/// Roll the placement for a seed
#[inline]
pub fn roll(seed: i64, distribution: &PlacementDistribution) -> Placement {
    classify(fraction(seed), distribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_in_unit_interval() {
        for seed in [-1_000_000, -7, -1, 0, 1, 2, 1003, 10_300, i32::MAX as i64] {
            let f = fraction(seed);
            assert!((0.0..1.0).contains(&f), "seed {} gave {}", seed, f);
        }
    }

    #[test]
    fn test_fraction_zero_seed() {
        assert_eq!(fraction(0), 0.0);
    }

    #[test]
    fn test_classify_bands() {
        let d = PlacementDistribution::new(0.25, 0.25, 0.25, 0.25);
        assert_eq!(classify(0.0, &d), Placement::First);
        assert_eq!(classify(0.2499, &d), Placement::First);
        assert_eq!(classify(0.25, &d), Placement::Second);
        assert_eq!(classify(0.6, &d), Placement::Third);
        assert_eq!(classify(0.75, &d), Placement::Participation);
        assert_eq!(classify(0.9999, &d), Placement::Participation);
    }

    #[test]
    fn test_zero_width_band_unreachable() {
        let d = PlacementDistribution::new(0.5, 0.0, 0.5, 0.0);
        for i in 0..100 {
            let value = i as f64 / 100.0;
            assert_ne!(classify(value, &d), Placement::Second);
        }
    }

    #[test]
    fn test_participation_absorbs_remainder() {
        // Sums to 0.9; the top tenth still lands somewhere
        let d = PlacementDistribution::new(0.3, 0.3, 0.3, 0.0);
        assert_eq!(classify(0.95, &d), Placement::Participation);
    }

    #[test]
    fn test_roll_matches_classify() {
        let d = PlacementDistribution::new(0.15, 0.2, 0.25, 0.4);
        for seed in 0..200 {
            assert_eq!(roll(seed, &d), classify(fraction(seed), &d));
        }
    }
}
