//! YearSession - Read-only report handle for the Python-Rust boundary
//!
//! The report stays in Rust heap memory; Python pulls the pieces the chart
//! needs through getters instead of receiving the whole structure upfront.

use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict, PyList};
use std::sync::Arc;

use super::{render_progress_bar, AnnotationEvent, YearReport};

// ============================================================================
// YearSession PyClass
// ============================================================================

/// Handle to one simulated year
#[pyclass]
pub struct YearSession {
    report: Arc<YearReport>,
}

impl YearSession {
    pub fn new(report: Arc<YearReport>) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &YearReport {
        &self.report
    }
}

#[pymethods]
impl YearSession {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    #[getter]
    fn total_days(&self) -> usize {
        self.report.series.len()
    }

    #[getter]
    fn total_points(&self) -> u64 {
        self.report.stats.total_points_per_year
    }

    #[getter]
    fn final_level(&self) -> u32 {
        self.report.stats.final_level
    }

    // ------------------------------------------------------------------------
    // Series Access
    // ------------------------------------------------------------------------

    fn cumulative_points(&self) -> Vec<u64> {
        self.report.series.cumulative_points.clone()
    }

    fn levels(&self) -> Vec<u32> {
        self.report.series.levels.clone()
    }

    fn labels(&self) -> Vec<String> {
        self.report.series.labels.clone()
    }

    /// Get one day as a dict, or None outside 1..=365
    fn get_day(&self, py: Python<'_>, day: u32) -> PyResult<Py<PyAny>> {
        let Some((points, level)) = self.report.series.day(day) else {
            return Ok(py.None());
        };
        let dict = PyDict::new(py);
        dict.set_item("day", day)?;
        dict.set_item("cumulative_points", points)?;
        dict.set_item("level", level)?;
        dict.set_item("label", &self.report.series.labels[(day - 1) as usize])?;
        Ok(dict.into())
    }

    // ------------------------------------------------------------------------
    // Annotations and Stats
    // ------------------------------------------------------------------------

    fn get_annotations(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for event in &self.report.annotations {
            list.append(annotation_to_dict(py, event)?)?;
        }
        Ok(list.into())
    }

    fn get_annotations_for_day(&self, py: Python<'_>, day: u32) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for event in self.report.annotations.iter().filter(|e| e.day == day) {
            list.append(annotation_to_dict(py, event)?)?;
        }
        Ok(list.into())
    }

    /// Get the summary scalars with a pre-rendered progress bar
    fn get_stats(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let stats = &self.report.stats;
        let dict = PyDict::new(py);
        dict.set_item("total_games_per_year", stats.total_games_per_year)?;
        dict.set_item("effective_games_per_year", stats.effective_games_per_year)?;
        dict.set_item("total_points_per_year", stats.total_points_per_year)?;
        dict.set_item("final_level", stats.final_level)?;
        dict.set_item("avg_points_per_month", stats.avg_points_per_month)?;
        dict.set_item("avg_points_per_game", stats.avg_points_per_game)?;
        dict.set_item("avg_points_per_day", stats.avg_points_per_day)?;

        let progress = PyDict::new(py);
        progress.set_item("current_level", stats.progress.current_level)?;
        progress.set_item("xp_in_level", stats.progress.xp_in_level)?;
        progress.set_item("xp_for_next_level", stats.progress.xp_for_next_level)?;
        progress.set_item("progress_percent", stats.progress.progress_percent)?;
        progress.set_item(
            "progress_bar",
            render_progress_bar(stats.progress.progress_percent),
        )?;
        dict.set_item("progress", progress)?;

        Ok(dict.into())
    }

    fn to_json(&self) -> PyResult<String> {
        Ok(self.report.to_json()?)
    }
}

// ============================================================================
// Private Helpers
// ============================================================================

fn annotation_to_dict<'py>(
    py: Python<'py>,
    event: &AnnotationEvent,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("key", event.key())?;
    dict.set_item("day", event.day)?;
    dict.set_item("cadence", event.cadence.as_str())?;
    dict.set_item("game_index", event.game_index)?;
    dict.set_item("placement", event.placement.as_str())?;
    Ok(dict)
}
