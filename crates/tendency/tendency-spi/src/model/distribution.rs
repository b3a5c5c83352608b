//! Three-point distribution model

use serde::{Deserialize, Serialize};

use super::{BinRange, Bounds, Histogram};

/// A `(lower, center, upper)` summary plus a two-bin histogram of the data
/// it was estimated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub bounds: Bounds,
    pub histogram: Histogram,
}

impl Distribution {
    pub fn new(bounds: Bounds, histogram: Histogram) -> Self {
        Self { bounds, histogram }
    }

    /// Distribution of an empty series: zero bounds, nothing counted
    pub fn degenerate() -> Self {
        let bounds = Bounds::point(0.0);
        Self {
            bounds,
            histogram: Histogram::empty(Self::bins_for(&bounds)),
        }
    }

    /// The two closed bins `[lower, center]` and `[center, upper]`
    pub fn bins_for(bounds: &Bounds) -> Vec<BinRange> {
        vec![
            BinRange::new(bounds.lower, bounds.center),
            BinRange::new(bounds.center, bounds.upper),
        ]
    }

    pub fn lower(&self) -> f64 {
        self.bounds.lower
    }

    pub fn center(&self) -> f64 {
        self.bounds.center
    }

    pub fn upper(&self) -> f64 {
        self.bounds.upper
    }

    pub fn bin_counts(&self) -> &[usize] {
        &self.histogram.counts
    }

    pub fn absolute_frequency(&self) -> &[f64] {
        &self.histogram.absolute_frequency
    }

    pub fn relative_frequency(&self) -> &[f64] {
        &self.histogram.relative_frequency
    }

    /// True when all three bounds coincide
    pub fn is_degenerate(&self) -> bool {
        self.bounds.width() == 0.0
    }
}
