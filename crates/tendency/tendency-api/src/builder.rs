//! Forecast builder.

use tendency_core::{DeviationDistribution, Forecaster};
use tendency_spi::{LinearisePolicy, Result};

use crate::{DistributionConfig, ForecastConfig};

/// Builder for forecast configurations.
#[derive(Debug, Clone, Default)]
pub struct ForecastBuilder {
    config: ForecastConfig,
}

impl ForecastBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    // ========== Projection ==========

    pub fn origin(mut self, origin: f64) -> Self {
        self.config.origin = Some(origin);
        self
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = Some(horizon);
        self
    }

    // ========== Estimator ==========

    pub fn linearize_first(mut self, linearize_first: bool) -> Self {
        self.config.distribution.linearize_first = linearize_first;
        self
    }

    pub fn absolute(mut self, use_absolute: bool) -> Self {
        self.config.distribution.use_absolute = use_absolute;
        self
    }

    pub fn rms(mut self, use_rms: bool) -> Self {
        self.config.distribution.use_rms = use_rms;
        self
    }

    pub fn policy(mut self, policy: LinearisePolicy) -> Self {
        self.config.distribution.linearise_policy = policy;
        self
    }

    pub fn distribution(mut self, distribution: DistributionConfig) -> Self {
        self.config.distribution = distribution;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Validate and return a ready forecaster.
    pub fn build_forecaster(self) -> Result<Forecaster<DeviationDistribution>> {
        Ok(self.build()?.forecaster())
    }
}
