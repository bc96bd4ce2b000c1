//! Year report and derived statistics

use crate::config::ScheduleConfig;
use crate::curve::{LevelCurve, LevelProgress};
use crate::error::Result;
use serde::Serialize;

use super::annotations::{AnnotationEvent, AnnotationIndex};
use super::engine::{DaySeries, DAYS_IN_YEAR};

const MONTHS_IN_YEAR: f64 = 12.0;

/// Scalars shown next to the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearStats {
    /// Nominal schedule: daily × 365 + weekly × 52 + monthly × 12
    pub total_games_per_year: u64,
    /// Seasonally adjusted games the simulation actually scored
    pub effective_games_per_year: u64,
    pub total_points_per_year: u64,
    pub final_level: u32,
    pub avg_points_per_month: f64,
    /// Zero when no games are scheduled
    pub avg_points_per_game: f64,
    pub avg_points_per_day: f64,
    pub progress: LevelProgress,
}

impl YearStats {
    pub fn compute(schedule: &ScheduleConfig, series: &DaySeries, curve: &LevelCurve) -> Self {
        let total_games_per_year = schedule.games_per_year();
        let total_points_per_year = series.final_points();
        let points = total_points_per_year as f64;

        let avg_points_per_game = if total_games_per_year == 0 {
            0.0
        } else {
            points / total_games_per_year as f64
        };

        Self {
            total_games_per_year,
            effective_games_per_year: series.games_played.iter().map(|&g| g as u64).sum(),
            total_points_per_year,
            final_level: series.final_level(),
            avg_points_per_month: points / MONTHS_IN_YEAR,
            avg_points_per_game,
            avg_points_per_day: points / DAYS_IN_YEAR as f64,
            progress: curve.progress(total_points_per_year),
        }
    }
}

/// Everything the renderer needs for one configuration
#[derive(Debug, Clone, Serialize)]
pub struct YearReport {
    pub series: DaySeries,
    pub annotations: Vec<AnnotationEvent>,
    pub stats: YearStats,
}

impl YearReport {
    pub fn annotation_index(&self) -> AnnotationIndex {
        AnnotationIndex::new(&self.annotations)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Render a 10-cell progress bar from a percentage, e.g. "██████░░░░"
#[inline]
pub fn render_progress_bar(percent: f64) -> String {
    let filled = ((percent / 10.0).round().max(0.0) as usize).min(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
