//! Sign-separated differences model

use serde::{Deserialize, Serialize};

use crate::error::{Result, TendencyError};

/// First differences partitioned into rising (`>= 0`) and falling (`< 0`)
/// moves, with the empirical frequency of each side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSplit {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
    pub prob_positive: f64,
    pub prob_negative: f64,
}

impl TrendSplit {
    /// Partition a difference series. Order within each side is preserved.
    pub fn from_differences(differences: &[f64]) -> Result<Self> {
        if differences.is_empty() {
            return Err(TendencyError::DivisionByZero(
                "difference series is empty".to_string(),
            ));
        }

        let (positive, negative): (Vec<f64>, Vec<f64>) =
            differences.iter().copied().partition(|&d| d >= 0.0);

        let total = differences.len() as f64;
        let prob_positive = positive.len() as f64 / total;
        let prob_negative = negative.len() as f64 / total;

        Ok(Self {
            positive,
            negative,
            prob_positive,
            prob_negative,
        })
    }

    /// `[prob_positive, prob_negative]`
    pub fn probabilities(&self) -> [f64; 2] {
        [self.prob_positive, self.prob_negative]
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
