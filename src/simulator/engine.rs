//! Day-by-day point accrual over a nominal year

use crate::config::{
    CalculatorConfig, Cadence, Placement, PlacementDistribution, PointsConfig, ScheduleConfig,
};
use crate::curve::{LevelCurve, LevelScan};
use crate::error::Result;
use crate::roller::{monthly_occurrence, roll, weekly_occurrence, SeedNamespace};
use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::annotations::generate_annotations;
use super::report::{YearReport, YearStats};

/// Days simulated per run
pub const DAYS_IN_YEAR: u32 = 365;
/// A date label is emitted on day 1 and every this many days after
pub const LABEL_INTERVAL_DAYS: u32 = 14;
/// Nominal non-leap year the date labels count from
pub const LABEL_ANCHOR_YEAR: i32 = 2023;
/// Average month length used to bucket days into seasons
const DAYS_PER_MONTH: f64 = 30.44;
/// Share of days on which daily games are played
const PLAY_DAYS_RATIO: f64 = 5.0 / 7.0;

/// Labels never depend on configuration, so they are built once
static DAY_LABELS: Lazy<Vec<String>> =
    Lazy::new(|| (1..=DAYS_IN_YEAR).map(day_label).collect());

/// Simulated year: parallel per-day series, index 0 is day 1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySeries {
    pub cumulative_points: Vec<u64>,
    pub levels: Vec<u32>,
    /// Sparse date labels; empty on unlabeled days
    pub labels: Vec<String>,
    /// Effective games across all cadences on each day
    pub games_played: Vec<u32>,
}

impl DaySeries {
    fn with_capacity(days: usize) -> Self {
        Self {
            cumulative_points: Vec::with_capacity(days),
            levels: Vec::with_capacity(days),
            labels: Vec::with_capacity(days),
            games_played: Vec::with_capacity(days),
        }
    }

    pub fn len(&self) -> usize {
        self.cumulative_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative_points.is_empty()
    }

    /// (cumulative points, level) for a 1-indexed day
    pub fn day(&self, day: u32) -> Option<(u64, u32)> {
        let index = (day as usize).checked_sub(1)?;
        Some((
            *self.cumulative_points.get(index)?,
            *self.levels.get(index)?,
        ))
    }

    pub fn final_points(&self) -> u64 {
        self.cumulative_points.last().copied().unwrap_or(0)
    }

    pub fn final_level(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }
}

/// Seasonal bucket of a 1-indexed day: 0..=11
#[inline]
pub fn month_of_day(day: u32) -> u32 {
    (day.saturating_sub(1) as f64 / DAYS_PER_MONTH).floor() as u32
}

/// Attendance multiplier for a month bucket: quiet summer, busy winter
#[inline]
pub fn seasonal_multiplier(month: u32) -> f64 {
    match month {
        5..=7 => 0.8,
        m if m >= 10 || m <= 1 => 1.2,
        _ => 1.0,
    }
}

/// Smooth per-day wobble in [0.70, 1.00]
#[inline]
pub fn daily_variation(day: u32) -> f64 {
    0.85 + (day as f64 * 0.1).sin() * 0.15
}

/// Date label for a 1-indexed day, or an empty string off the label grid
pub fn day_label(day: u32) -> String {
    if day == 0 || (day - 1) % LABEL_INTERVAL_DAYS != 0 {
        return String::new();
    }
    NaiveDate::from_ymd_opt(LABEL_ANCHOR_YEAR, 1, 1)
        .and_then(|anchor| anchor.checked_add_days(Days::new((day - 1) as u64)))
        .map(|date| date.format("%b %-d").to_string())
        .unwrap_or_default()
}

/// Effective daily game count for a day
#[inline]
pub fn effective_daily_games(daily: u32, day: u32) -> u32 {
    let month = month_of_day(day);
    (daily as f64 * PLAY_DAYS_RATIO * seasonal_multiplier(month) * daily_variation(day)).round()
        as u32
}

/// Effective weekly game count for a weekly occurrence day
#[inline]
pub fn effective_weekly_games(weekly: u32, day: u32) -> u32 {
    let month = month_of_day(day);
    (weekly as f64 * seasonal_multiplier(month) * daily_variation(day)).round() as u32
}

/// Effective monthly game count for a monthly occurrence day; no daily wobble
#[inline]
pub fn effective_monthly_games(monthly: u32, day: u32) -> u32 {
    (monthly as f64 * seasonal_multiplier(month_of_day(day))).round() as u32
}

/// Split `count` games into placement buckets.
///
/// Ranked buckets take floor(count · p), capped at the games still
/// unassigned; participation gets the remainder. Buckets always sum to `count`.
pub fn placement_buckets(count: u32, distribution: &PlacementDistribution) -> [u32; 4] {
    let mut remaining = count;
    let mut ranked = |p: f64| {
        let n = ((count as f64 * p).floor() as u32).min(remaining);
        remaining -= n;
        n
    };
    let first = ranked(distribution.first);
    let second = ranked(distribution.second);
    let third = ranked(distribution.third);
    [first, second, third, remaining]
}

fn daily_points(count: u32, points: &PointsConfig, distribution: &PlacementDistribution) -> u64 {
    placement_buckets(count, distribution)
        .iter()
        .zip(Placement::ALL)
        .map(|(&n, placement)| n as u64 * points.award(placement, Cadence::Daily))
        .sum()
}

fn rolled_points(
    count: u32,
    cadence: Cadence,
    seed_for: impl Fn(u32) -> i64,
    points: &PointsConfig,
    distribution: &PlacementDistribution,
) -> u64 {
    (0..count)
        .map(|game| points.award(roll(seed_for(game), distribution), cadence))
        .sum()
}

/// Simulate days 1..=365 of point accrual and level progression
pub fn simulate_year(
    schedule: &ScheduleConfig,
    points: &PointsConfig,
    distribution: &PlacementDistribution,
    namespace: &SeedNamespace,
    curve: &LevelCurve,
) -> DaySeries {
    let mut series = DaySeries::with_capacity(DAYS_IN_YEAR as usize);
    let mut scan = LevelScan::new(curve);
    let mut cumulative: u64 = 0;

    for day in 1..=DAYS_IN_YEAR {
        let mut day_points: u64 = 0;
        let mut games: u32 = 0;

        if schedule.daily > 0 {
            let count = effective_daily_games(schedule.daily, day);
            day_points += daily_points(count, points, distribution);
            games += count;
        }

        if let Some(week) = weekly_occurrence(day) {
            let count = effective_weekly_games(schedule.weekly, day);
            day_points += rolled_points(
                count,
                Cadence::Weekly,
                |game| namespace.weekly_seed(week, game),
                points,
                distribution,
            );
            games += count;
        }

        if let Some(month) = monthly_occurrence(day) {
            let count = effective_monthly_games(schedule.monthly, day);
            day_points += rolled_points(
                count,
                Cadence::Monthly,
                |game| namespace.monthly_seed(month, game),
                points,
                distribution,
            );
            games += count;
        }

        cumulative = cumulative.saturating_add(day_points);
        series.cumulative_points.push(cumulative);
        series.levels.push(scan.advance(cumulative));
        series.games_played.push(games);
    }

    series.labels = (*DAY_LABELS).clone();

    log::debug!(
        "Simulated {} days: {} points, level {}",
        series.len(),
        series.final_points(),
        series.final_level()
    );

    series
}

/// Main simulation engine bound to one validated configuration
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: CalculatorConfig,
    curve: LevelCurve,
}

impl SimulationEngine {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate().inspect_err(|e| {
            log::warn!("Rejected calculator configuration: {}", e);
        })?;
        let curve = LevelCurve::new(config.curve)?;
        Ok(Self { config, curve })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn curve(&self) -> &LevelCurve {
        &self.curve
    }

    /// Run the year simulation, annotations and summary statistics
    pub fn simulate(&self) -> YearReport {
        let distribution = self.config.distribution();
        let namespace = self.config.seed_namespace();

        let series = simulate_year(
            &self.config.schedule,
            &self.config.points,
            &distribution,
            &namespace,
            &self.curve,
        );
        let annotations = generate_annotations(&self.config.schedule, &distribution, &namespace);
        let stats = YearStats::compute(&self.config.schedule, &series, &self.curve);

        YearReport {
            series,
            annotations,
            stats,
        }
    }
}
