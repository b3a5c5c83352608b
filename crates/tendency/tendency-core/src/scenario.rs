//! Branch-combination scenarios
//!
//! Instead of pairing lower with lower and upper with upper, every bound of
//! the falling branch is combined with every bound of the rising branch.
//! Rising-branch bounds are floored at 0 and falling-branch bounds capped at
//! 0 first, so a branch can never pull against its own direction.

use serde::{Deserialize, Serialize};
use tendency_spi::{Bounds, Result, TrendSplit};

use crate::expectation::expectation;
use crate::forecaster::ForecastBreakdown;

/// Sorted projections of all `(falling, rising)` bound pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioForecast {
    pub values: Vec<f64>,
}

impl ScenarioForecast {
    pub fn from_breakdown(breakdown: &ForecastBreakdown) -> Result<Self> {
        Self::project(
            breakdown.origin,
            breakdown.horizon,
            &breakdown.split,
            &breakdown.positive.bounds,
            &breakdown.negative.bounds,
        )
    }

    /// Project the nine combinations of `positive` and `negative` bounds
    pub fn project(
        origin: f64,
        horizon: usize,
        split: &TrendSplit,
        positive: &Bounds,
        negative: &Bounds,
    ) -> Result<Self> {
        let rising = positive.as_array().map(|v| v.max(0.0));
        let falling = negative.as_array().map(|v| v.min(0.0));
        let probabilities = [split.prob_negative, split.prob_positive];
        let quantity = horizon as f64;

        let mut values = Vec::with_capacity(rising.len() * falling.len());
        for &fall in &falling {
            for &rise in &rising {
                values.push(origin + expectation(quantity, &[fall, rise], &probabilities)?);
            }
        }
        values.sort_by(f64::total_cmp);

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn median(&self) -> Option<f64> {
        let n = self.values.len();
        match n {
            0 => None,
            _ if n % 2 == 1 => Some(self.values[n / 2]),
            _ => Some((self.values[n / 2 - 1] + self.values[n / 2]) / 2.0),
        }
    }
}
