//! Three-point bounds model

use serde::{Deserialize, Serialize};

/// Lower, center and upper point of a distribution, always ascending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub center: f64,
    pub upper: f64,
}

impl Bounds {
    /// Sort three arbitrary points into ascending bounds
    pub fn from_unsorted(points: [f64; 3]) -> Self {
        let mut points = points;
        points.sort_by(f64::total_cmp);
        Self {
            lower: points[0],
            center: points[1],
            upper: points[2],
        }
    }

    /// Symmetric bounds `center ± spread`
    pub fn symmetric(center: f64, spread: f64) -> Self {
        Self::from_unsorted([center - spread, center, center + spread])
    }

    /// Zero-width bounds collapsed onto one value
    pub fn point(value: f64) -> Self {
        Self {
            lower: value,
            center: value,
            upper: value,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.lower, self.center, self.upper]
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Closed-interval membership test
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}
