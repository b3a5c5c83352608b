//! Tendency Core
//!
//! Core implementations of the central-tendency forecaster:
//!
//! - [`linearise`]: synthetic evenly stepped reference sequences
//! - [`deviation`]: broadcast differences reduced to mean/RMS deviation
//! - [`distribution`]: three-point distributions and closed-bin histograms
//! - [`expectation`]: probability-weighted expectation
//! - [`forecaster`]: two-branch (rising/falling) forecast
//! - [`scenario`]: branch-combination scenarios
//!
//! ## Example
//!
//! ```rust
//! use tendency_core::forecast;
//!
//! let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0, 11.0, 13.0, 15.0, 18.0, 21.0];
//! let result = forecast(&series, None, None).unwrap();
//! assert!(result.expected > 21.0);
//! ```

pub mod deviation;
pub mod distribution;
pub mod expectation;
pub mod forecaster;
pub mod linearise;
pub mod scenario;
pub mod validation;

// Re-export SPI types for implementations
pub use tendency_spi::{
    BinRange, Bounds, DeviationResult, Distribution, DistributionStrategy, ForecastResult,
    Histogram, LinearisePolicy, Linearizer, OutputKind, Result, TendencyError, TrendSplit,
};

// Re-export main types
pub use deviation::{deviation, difference_matrix};
pub use distribution::{distribution, histogram, DeviationDistribution};
pub use expectation::expectation;
pub use forecaster::{differences, forecast, split_differences, ForecastBreakdown, Forecaster};
pub use linearise::{
    linearise, linearise_fixed_length, linearise_with, linearizer_for, mean_absolute_step,
    SpanLinearizer, StepLinearizer,
};
pub use scenario::ScenarioForecast;
