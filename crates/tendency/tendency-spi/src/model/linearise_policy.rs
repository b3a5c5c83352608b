//! Linearization policy options

use serde::{Deserialize, Serialize};

/// How the synthetic reference sequence is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearisePolicy {
    /// Arithmetic progression from `min` by the mean absolute step, stopping
    /// before `max`
    #[default]
    FixedStep,
    /// Exactly `len(series)` evenly spaced points from `min` to `max`
    FixedLength,
}

/// Numeric type of the generated points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    #[default]
    Float,
    /// Points are truncated toward zero
    Integer,
}

impl OutputKind {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            OutputKind::Float => value,
            OutputKind::Integer => value.trunc(),
        }
    }
}
