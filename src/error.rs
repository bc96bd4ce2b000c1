//! Error types for the points year core engine

use thiserror::Error;

/// Main error type for the points year core engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Invalid level curve coefficient {name}: {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("Invalid placement distribution: {0}")]
    InvalidDistribution(String),

    #[error("Too many {cadence} games scheduled: {count} (max {max})")]
    InvalidSchedule {
        cadence: &'static str,
        count: u32,
        max: u32,
    },

    #[error("Unknown player profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown curve preset: {0}")]
    UnknownPreset(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Simulation error: {0}")]
    Simulation(String),
}

impl From<serde_json::Error> for CalculatorError {
    fn from(err: serde_json::Error) -> Self {
        CalculatorError::Deserialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<CalculatorError> for pyo3::PyErr {
    fn from(err: CalculatorError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        let msg = err.to_string();
        match err {
            CalculatorError::InvalidCoefficient { .. }
            | CalculatorError::InvalidDistribution(_)
            | CalculatorError::InvalidSchedule { .. }
            | CalculatorError::Deserialization(_) => PyValueError::new_err(msg),
            CalculatorError::UnknownProfile(_) | CalculatorError::UnknownPreset(_) => {
                PyKeyError::new_err(msg)
            }
            CalculatorError::Simulation(_) => PyRuntimeError::new_err(msg),
        }
    }
}

/// Result type alias for the points year core engine
pub type Result<T> = std::result::Result<T, CalculatorError>;
