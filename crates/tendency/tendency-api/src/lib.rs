//! Tendency Consumer API
//!
//! Consumer configurations and builder APIs for the tendency forecaster.
//!
//! This crate provides:
//! - Serde configuration types with JSON loading
//! - A fluent builder for forecast configurations
//! - Re-exports from SPI and core for convenience

pub mod builder;
pub mod config;

pub use builder::ForecastBuilder;
pub use config::{DistributionConfig, ForecastConfig};

// Re-export from core
pub use tendency_core::{
    deviation, difference_matrix, differences, distribution, expectation, forecast, histogram,
    linearise, linearise_fixed_length, linearise_with, linearizer_for, mean_absolute_step,
    split_differences, DeviationDistribution, ForecastBreakdown, Forecaster, ScenarioForecast,
    SpanLinearizer, StepLinearizer,
};

// Re-export traits and models from SPI
pub use tendency_spi::{
    BinRange, Bounds, DeviationResult, Distribution, DistributionStrategy, ForecastResult,
    Histogram, LinearisePolicy, Linearizer, OutputKind, Result, TendencyError, TrendSplit,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DistributionConfig, ForecastBuilder, ForecastConfig};
    pub use tendency_core::{
        distribution, expectation, forecast, linearise, DeviationDistribution, ForecastBreakdown,
        Forecaster, ScenarioForecast,
    };
    pub use tendency_spi::{
        Bounds, Distribution, DistributionStrategy, ForecastResult, LinearisePolicy, OutputKind,
        Result, TendencyError,
    };
}
