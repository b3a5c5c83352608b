//! Forecast result model

use serde::{Deserialize, Serialize};

/// Lower estimate, expected value and upper estimate of the next value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub lower_estimate: f64,
    pub expected: f64,
    pub upper_estimate: f64,
}

impl ForecastResult {
    /// Sort three projections so that `lower <= expected <= upper`
    pub fn from_unsorted(minimum: f64, expected: f64, maximum: f64) -> Self {
        let mut values = [minimum, expected, maximum];
        values.sort_by(f64::total_cmp);
        Self {
            lower_estimate: values[0],
            expected: values[1],
            upper_estimate: values[2],
        }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.lower_estimate, self.expected, self.upper_estimate)
    }

    pub fn is_sorted(&self) -> bool {
        self.lower_estimate <= self.expected && self.expected <= self.upper_estimate
    }
}
