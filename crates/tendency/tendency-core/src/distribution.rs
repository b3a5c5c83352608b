//! Distribution estimator
//!
//! Locates a data-driven central tendency (the reference element with the
//! smallest mean deviation from the data), spreads it by the mean deviation
//! into a sorted `(lower, center, upper)` triple, and bins the data over the
//! two intervals that triple defines.

use serde::{Deserialize, Serialize};
use tendency_spi::{
    BinRange, Bounds, Distribution, DistributionStrategy, Histogram, LinearisePolicy, Linearizer,
    OutputKind, Result, TendencyError,
};
use tracing::trace;

use crate::deviation::deviation;
use crate::linearise::linearizer_for;
use crate::validation::validate_series;

/// Deviation-based distribution strategy
///
/// Defaults: linearize first, absolute differences, mean (not RMS)
/// deviation, fixed-step linearization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationDistribution {
    linearize_first: bool,
    use_absolute: bool,
    use_rms: bool,
    policy: LinearisePolicy,
}

impl Default for DeviationDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviationDistribution {
    pub fn new() -> Self {
        Self {
            linearize_first: true,
            use_absolute: true,
            use_rms: false,
            policy: LinearisePolicy::FixedStep,
        }
    }

    pub fn with_linearize_first(mut self, linearize_first: bool) -> Self {
        self.linearize_first = linearize_first;
        self
    }

    pub fn with_absolute(mut self, use_absolute: bool) -> Self {
        self.use_absolute = use_absolute;
        self
    }

    pub fn with_rms(mut self, use_rms: bool) -> Self {
        self.use_rms = use_rms;
        self
    }

    pub fn with_policy(mut self, policy: LinearisePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn linearize_first(&self) -> bool {
        self.linearize_first
    }

    pub fn use_absolute(&self) -> bool {
        self.use_absolute
    }

    pub fn use_rms(&self) -> bool {
        self.use_rms
    }

    pub fn policy(&self) -> LinearisePolicy {
        self.policy
    }

    /// Float-valued [`Linearizer`] for this strategy's policy
    pub fn linearizer(&self) -> Box<dyn Linearizer> {
        linearizer_for(self.policy, OutputKind::Float)
    }

    /// Estimate the distribution of `series`.
    ///
    /// An empty series yields [`Distribution::degenerate`]; a single value
    /// yields zero-width bounds on that value.
    pub fn estimate(&self, series: &[f64]) -> Result<Distribution> {
        validate_series(series)?;

        match series {
            [] => {
                trace!("empty series, degenerate distribution");
                return Ok(Distribution::degenerate());
            }
            [value] => {
                let bounds = Bounds::point(*value);
                return Ok(Distribution::new(bounds, histogram(series, &bounds.as_array())?));
            }
            _ => {}
        }

        let linearised;
        let reference: &[f64] = if self.linearize_first {
            linearised = self.linearizer().linearise(series)?;
            &linearised
        } else {
            series
        };

        let result = deviation(reference, series, self.use_absolute, self.use_rms)?;
        let bounds = Bounds::symmetric(result.central_element, result.mean_deviation);
        let histogram = histogram(series, &bounds.as_array())?;

        trace!(
            len = series.len(),
            reference_len = reference.len(),
            lower = bounds.lower,
            center = bounds.center,
            upper = bounds.upper,
            "distribution estimated"
        );

        Ok(Distribution::new(bounds, histogram))
    }
}

impl DistributionStrategy for DeviationDistribution {
    fn distribution(&self, series: &[f64]) -> Result<Distribution> {
        self.estimate(series)
    }

    fn name(&self) -> &str {
        "deviation"
    }
}

/// Estimate a distribution with explicit toggles and the fixed-step policy
pub fn distribution(
    series: &[f64],
    linearize_first: bool,
    use_absolute: bool,
    use_rms: bool,
) -> Result<Distribution> {
    DeviationDistribution::new()
        .with_linearize_first(linearize_first)
        .with_absolute(use_absolute)
        .with_rms(use_rms)
        .estimate(series)
}

/// Count `series` over the bins between consecutive `edges`.
///
/// Bins are closed on both ends, so a value on a shared edge is counted in
/// both neighbours. `absolute_frequency` divides by the series length,
/// `relative_frequency` by the number of values inside `[edges[0], edges[last]]`.
pub fn histogram(series: &[f64], edges: &[f64]) -> Result<Histogram> {
    if edges.len() < 2 {
        return Err(TendencyError::invalid_parameter(
            "edges",
            format!("need at least 2 edges, got {}", edges.len()),
        ));
    }
    if edges.windows(2).any(|w| w[0] > w[1]) {
        return Err(TendencyError::invalid_parameter("edges", "must be ascending"));
    }

    let bins: Vec<BinRange> = edges.windows(2).map(|w| BinRange::new(w[0], w[1])).collect();
    if series.is_empty() {
        return Ok(Histogram::empty(bins));
    }

    let counts: Vec<usize> = bins
        .iter()
        .map(|bin| series.iter().filter(|&&x| bin.contains(x)).count())
        .collect();

    let overall = BinRange::new(edges[0], edges[edges.len() - 1]);
    let within = series.iter().filter(|&&x| overall.contains(x)).count();
    let total = series.len() as f64;

    let absolute_frequency = counts.iter().map(|&c| c as f64 / total).collect();
    let relative_frequency = counts
        .iter()
        .map(|&c| if within == 0 { 0.0 } else { c as f64 / within as f64 })
        .collect();

    Ok(Histogram {
        bins,
        counts,
        absolute_frequency,
        relative_frequency,
    })
}
