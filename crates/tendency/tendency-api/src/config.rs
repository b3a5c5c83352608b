//! Forecast configuration.

use serde::{Deserialize, Serialize};
use tendency_core::{DeviationDistribution, ForecastBreakdown, Forecaster, ScenarioForecast};
use tendency_spi::{ForecastResult, LinearisePolicy, Result, TendencyError};
use tracing::debug;

/// Configuration of the deviation-based distribution estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistributionConfig {
    /// Compare against a linearised reference instead of the series itself
    pub linearize_first: bool,
    /// Use absolute rather than signed differences
    pub use_absolute: bool,
    /// Use root mean square deviation instead of mean deviation
    pub use_rms: bool,
    /// Reference generation policy
    pub linearise_policy: LinearisePolicy,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            linearize_first: true,
            use_absolute: true,
            use_rms: false,
            linearise_policy: LinearisePolicy::FixedStep,
        }
    }
}

impl DistributionConfig {
    pub fn strategy(&self) -> DeviationDistribution {
        DeviationDistribution::new()
            .with_linearize_first(self.linearize_first)
            .with_absolute(self.use_absolute)
            .with_rms(self.use_rms)
            .with_policy(self.linearise_policy)
    }
}

impl From<&DistributionConfig> for DeviationDistribution {
    fn from(config: &DistributionConfig) -> Self {
        config.strategy()
    }
}

/// Configuration of a forecast run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Projection origin (defaults to the last observation)
    pub origin: Option<f64>,
    /// Number of steps to project (defaults to the series length)
    pub horizon: Option<usize>,
    /// Estimator settings shared by both branches
    pub distribution: DistributionConfig,
}

impl ForecastConfig {
    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TendencyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        debug!(?config, "forecast configuration loaded");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TendencyError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(origin) = self.origin {
            if !origin.is_finite() {
                return Err(TendencyError::InvalidConfig(
                    "origin must be finite".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn forecaster(&self) -> Forecaster<DeviationDistribution> {
        Forecaster::new(self.distribution.strategy())
    }

    pub fn forecast(&self, series: &[f64]) -> Result<ForecastResult> {
        self.forecaster().forecast(series, self.origin, self.horizon)
    }

    pub fn breakdown(&self, series: &[f64]) -> Result<ForecastBreakdown> {
        self.forecaster()
            .forecast_breakdown(series, self.origin, self.horizon)
    }

    pub fn scenarios(&self, series: &[f64]) -> Result<ScenarioForecast> {
        self.forecaster().scenarios(series, self.origin, self.horizon)
    }
}
