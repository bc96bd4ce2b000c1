//! Points Year Core - Deterministic points and level progression simulator
//!
//! Given game frequencies, per-placement rewards and a polynomial level curve,
//! this crate simulates one year of point accrual day by day and produces
//! chart-ready series, per-game markers and summary statistics.
//!
//! Everything is a pure function of the configuration: placement "rolls" are
//! derived from seeds, never from a random number generator. Python bindings
//! are available behind the `python` feature.

pub mod config;
pub mod curve;
pub mod error;
pub mod live;
pub mod roller;
pub mod simulator;

#[cfg(feature = "python")]
mod python {
    use crate::config::{extract_config, CurvePreset, PlayerProfile};
    use crate::error::CalculatorError;
    use crate::simulator::{SimulationEngine, YearSession};
    use pyo3::prelude::*;
    use std::sync::Arc;

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Simulate a year for the given configuration dict
    ///
    /// # Arguments
    /// * `config` - Dict or object with `profile`, `schedule`, `points`,
    ///   `curve` or `curve_preset`, and optional `distribution` / `seed_namespace`
    ///
    /// # Raises
    /// ValueError for invalid coefficients or distributions,
    /// KeyError for unknown profile or preset names
    #[pyfunction]
    fn simulate(config: &Bound<'_, PyAny>) -> PyResult<YearSession> {
        let config = extract_config(config)?;
        let engine = SimulationEngine::new(config)?;
        Ok(YearSession::new(Arc::new(engine.simulate())))
    }

    /// Simulate a year asynchronously
    ///
    /// The simulation runs on Tokio's blocking pool so the asyncio event loop
    /// stays responsive.
    ///
    /// # Example (Python)
    /// ```python
    /// session = await simulate_async({"profile": "average"})
    /// print(session.final_level)
    /// ```
    #[pyfunction]
    fn simulate_async<'py>(
        py: Python<'py>,
        config: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyAny>> {
        // Extract before leaving the GIL-bound context
        let config = extract_config(config)?;

        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let report = tokio::task::spawn_blocking(move || {
                SimulationEngine::new(config).map(|engine| engine.simulate())
            })
            .await
            .map_err(|e| CalculatorError::Simulation(format!("simulation task panicked: {}", e)))??;

            Ok(YearSession::new(Arc::new(report)))
        })
    }

    /// Names of the shipped player profiles
    #[pyfunction]
    fn profile_names() -> Vec<&'static str> {
        PlayerProfile::ALL.iter().map(|p| p.name()).collect()
    }

    /// Names of the shipped level curve presets
    #[pyfunction]
    fn curve_preset_names() -> Vec<&'static str> {
        CurvePreset::ALL.iter().map(|p| p.name()).collect()
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    #[pymodule]
    fn points_year_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(simulate, m)?)?;
        m.add_function(wrap_pyfunction!(simulate_async, m)?)?;
        m.add_function(wrap_pyfunction!(profile_names, m)?)?;
        m.add_function(wrap_pyfunction!(curve_preset_names, m)?)?;
        m.add_class::<YearSession>()?;
        Ok(())
    }
}
