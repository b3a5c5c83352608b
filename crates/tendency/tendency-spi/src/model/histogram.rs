//! Binned frequency model

use serde::{Deserialize, Serialize};

/// Closed interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinRange {
    pub start: f64,
    pub end: f64,
}

impl BinRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Both ends are inclusive, so a value on a shared edge belongs to both
    /// neighbouring bins.
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Counts and frequencies of a series over consecutive bins
///
/// All four vectors are parallel and have one entry per bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<BinRange>,
    pub counts: Vec<usize>,
    /// `count / len(series)`
    pub absolute_frequency: Vec<f64>,
    /// `count / number of values inside the overall range`
    pub relative_frequency: Vec<f64>,
}

impl Histogram {
    /// Histogram over the given bins with nothing counted
    pub fn empty(bins: Vec<BinRange>) -> Self {
        let n = bins.len();
        Self {
            bins,
            counts: vec![0; n],
            absolute_frequency: vec![0.0; n],
            relative_frequency: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }
}
