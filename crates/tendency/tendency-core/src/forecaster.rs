//! Two-branch forecaster
//!
//! The first differences of a series are split into rising (`>= 0`) and
//! falling (`< 0`) moves. Each branch gets its own [`Distribution`], and the
//! branches are combined by [`expectation`] weighted with their empirical
//! frequencies, then projected `horizon` steps from an origin value:
//!
//! ```text
//! expected = origin + horizon * (p_pos * pos.center + p_neg * neg.center)
//! lower    = origin + horizon * (p_pos * pos.lower  + p_neg * neg.lower)
//! upper    = origin + horizon * (p_pos * pos.upper  + p_neg * neg.upper)
//! ```
//!
//! A missing branch has a degenerate distribution and zero probability, so
//! it contributes nothing.

use serde::{Deserialize, Serialize};
use tendency_spi::{Distribution, DistributionStrategy, ForecastResult, Result, TrendSplit};
use tracing::debug;

use crate::distribution::DeviationDistribution;
use crate::expectation::expectation;
use crate::scenario::ScenarioForecast;
use crate::validation::{require_len, validate_finite, validate_series};

/// First differences `series[i + 1] - series[i]`
pub fn differences(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Split the first differences of `series` by sign
pub fn split_differences(series: &[f64]) -> Result<TrendSplit> {
    require_len(series, 2)?;
    TrendSplit::from_differences(&differences(series))
}

/// Forecast together with everything it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBreakdown {
    pub result: ForecastResult,
    pub origin: f64,
    pub horizon: usize,
    pub split: TrendSplit,
    pub positive: Distribution,
    pub negative: Distribution,
}

/// Names of the branches with no differences at all
fn empty_branches(split: &TrendSplit) -> impl Iterator<Item = &'static str> + '_ {
    [("positive", &split.positive), ("negative", &split.negative)]
        .into_iter()
        .filter(|(_, moves)| moves.is_empty())
        .map(|(branch, _)| branch)
}

/// Forecaster over a pluggable [`DistributionStrategy`]
#[derive(Debug, Clone, Default)]
pub struct Forecaster<S = DeviationDistribution> {
    strategy: S,
}

impl<S: DistributionStrategy> Forecaster<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Forecast the next value of `series`.
    ///
    /// `origin` defaults to the last observation and `horizon` to the
    /// series length.
    pub fn forecast(
        &self,
        series: &[f64],
        origin: Option<f64>,
        horizon: Option<usize>,
    ) -> Result<ForecastResult> {
        Ok(self.forecast_breakdown(series, origin, horizon)?.result)
    }

    /// Like [`Forecaster::forecast`] but keeps the split and both branch
    /// distributions.
    pub fn forecast_breakdown(
        &self,
        series: &[f64],
        origin: Option<f64>,
        horizon: Option<usize>,
    ) -> Result<ForecastBreakdown> {
        validate_series(series)?;
        let split = split_differences(series)?;

        let origin = match origin {
            Some(value) => {
                validate_finite("origin", value)?;
                value
            }
            None => series[series.len() - 1],
        };
        let horizon = horizon.unwrap_or(series.len());

        let positive = self.strategy.distribution(&split.positive)?;
        let negative = self.strategy.distribution(&split.negative)?;

        for branch in empty_branches(&split) {
            debug!(
                branch,
                strategy = self.strategy.name(),
                "degenerate distribution, branch has no moves"
            );
        }

        let probabilities = split.probabilities();
        let quantity = horizon as f64;
        let project = |pos: f64, neg: f64| -> Result<f64> {
            Ok(origin + expectation(quantity, &[pos, neg], &probabilities)?)
        };

        let expected = project(positive.center(), negative.center())?;
        let minimum = project(positive.lower(), negative.lower())?;
        let maximum = project(positive.upper(), negative.upper())?;
        let result = ForecastResult::from_unsorted(minimum, expected, maximum);

        debug!(
            len = series.len(),
            origin,
            horizon,
            prob_positive = split.prob_positive,
            prob_negative = split.prob_negative,
            lower = result.lower_estimate,
            expected = result.expected,
            upper = result.upper_estimate,
            "forecast computed"
        );

        Ok(ForecastBreakdown {
            result,
            origin,
            horizon,
            split,
            positive,
            negative,
        })
    }

    /// All nine branch-bound combinations, see [`ScenarioForecast`]
    pub fn scenarios(
        &self,
        series: &[f64],
        origin: Option<f64>,
        horizon: Option<usize>,
    ) -> Result<ScenarioForecast> {
        let breakdown = self.forecast_breakdown(series, origin, horizon)?;
        ScenarioForecast::from_breakdown(&breakdown)
    }
}

/// Forecast with the default [`DeviationDistribution`] strategy
pub fn forecast(
    series: &[f64],
    origin: Option<f64>,
    horizon: Option<usize>,
) -> Result<ForecastResult> {
    Forecaster::<DeviationDistribution>::default().forecast(series, origin, horizon)
}
