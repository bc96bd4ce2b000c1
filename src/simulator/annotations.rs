//! Per-game chart markers for weekly and monthly games
//!
//! Markers follow the nominal schedule: every occurrence rolls exactly the
//! configured number of games. The simulator instead rolls the seasonally
//! adjusted count, so marker counts and point totals can disagree on
//! purpose. Seeds are shared, so game `g` of an occurrence rolls the same
//! placement in both places.

use crate::config::{Cadence, Placement, PlacementDistribution, ScheduleConfig};
use crate::roller::{monthly_occurrence, roll, weekly_occurrence, SeedNamespace};
use ahash::AHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use super::engine::DAYS_IN_YEAR;

/// One individually rolled game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnotationEvent {
    pub day: u32,
    pub cadence: Cadence,
    pub game_index: u32,
    pub placement: Placement,
}

impl AnnotationEvent {
    /// Unique marker key, e.g. `weekly-14-0`
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.cadence, self.day, self.game_index)
    }
}

/// Roll every nominally scheduled weekly and monthly game of the year
pub fn generate_annotations(
    schedule: &ScheduleConfig,
    distribution: &PlacementDistribution,
    namespace: &SeedNamespace,
) -> Vec<AnnotationEvent> {
    let mut events = Vec::new();

    for day in 1..=DAYS_IN_YEAR {
        if let Some(week) = weekly_occurrence(day) {
            events.extend((0..schedule.weekly).map(|game| AnnotationEvent {
                day,
                cadence: Cadence::Weekly,
                game_index: game,
                placement: roll(namespace.weekly_seed(week, game), distribution),
            }));
        }
        if let Some(month) = monthly_occurrence(day) {
            events.extend((0..schedule.monthly).map(|game| AnnotationEvent {
                day,
                cadence: Cadence::Monthly,
                game_index: game,
                placement: roll(namespace.monthly_seed(month, game), distribution),
            }));
        }
    }

    events
}

/// Markers grouped by day for point lookups from the renderer
#[derive(Debug, Default)]
pub struct AnnotationIndex {
    by_day: AHashMap<u32, SmallVec<[AnnotationEvent; 4]>>,
}

impl AnnotationIndex {
    pub fn new(events: &[AnnotationEvent]) -> Self {
        let mut by_day: AHashMap<u32, SmallVec<[AnnotationEvent; 4]>> =
            AHashMap::with_capacity(events.len());
        for event in events {
            by_day.entry(event.day).or_default().push(*event);
        }
        Self { by_day }
    }

    /// Markers on a 1-indexed day, in roll order
    pub fn on_day(&self, day: u32) -> &[AnnotationEvent] {
        self.by_day.get(&day).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of days carrying at least one marker
    pub fn marked_days(&self) -> usize {
        self.by_day.len()
    }

    /// Count of markers per placement, in band order
    pub fn placement_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for event in self.by_day.values().flatten() {
            counts[event.placement.index()] += 1;
        }
        counts
    }
}
