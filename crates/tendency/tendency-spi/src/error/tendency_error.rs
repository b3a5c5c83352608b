//! Tendency error types

use thiserror::Error;

/// Errors that can occur while estimating distributions or forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TendencyError {
    /// The series is constant, so it has no linear form
    #[error("Insufficient variation: data has no meaningful linear form")]
    InsufficientVariation,

    /// Too few points for the operation
    #[error("Empty series: need at least {required} points, got {actual}")]
    EmptySeries { required: usize, actual: usize },

    /// A frequency was requested over an empty population
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// NaN or infinite value inside a series
    #[error("Non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// Configuration could not be parsed or is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TendencyError {
    /// Shorthand for [`TendencyError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
