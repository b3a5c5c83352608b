//! Deviation result model

use serde::{Deserialize, Serialize};

/// Outcome of comparing a reference set against data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationResult {
    /// Reference elements whose mean deviation is minimal (all ties)
    pub closest_elements: Vec<f64>,
    /// Mean of `closest_elements`
    pub central_element: f64,
    /// Mean deviation, or root mean square deviation in RMS mode
    pub mean_deviation: f64,
    /// Mean deviation of each reference element from the whole data set
    pub elementwise_deviations: Vec<f64>,
}
