//! Tendency Service Provider Interface
//!
//! Defines the contracts, value models and error type shared by the
//! central-tendency forecasting stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{DistributionStrategy, Linearizer};
pub use error::{Result, TendencyError};
pub use model::{
    BinRange, Bounds, DeviationResult, Distribution, ForecastResult, Histogram,
    LinearisePolicy, OutputKind, TrendSplit,
};
