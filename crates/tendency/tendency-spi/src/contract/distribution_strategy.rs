//! Trait for pluggable distribution estimation

use crate::error::Result;
use crate::model::Distribution;

/// Estimates a three-point [`Distribution`] for one branch of a trend
///
/// Implementations must return [`Distribution::degenerate`] for an empty
/// series instead of failing, so that a one-sided trend still yields a
/// defined forecast.
pub trait DistributionStrategy: Send + Sync {
    /// Estimate the distribution of `series`
    fn distribution(&self, series: &[f64]) -> Result<Distribution>;

    /// Short identifier used in diagnostics
    fn name(&self) -> &str {
        "custom"
    }
}

impl<T: DistributionStrategy + ?Sized> DistributionStrategy for Box<T> {
    fn distribution(&self, series: &[f64]) -> Result<Distribution> {
        (**self).distribution(series)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
