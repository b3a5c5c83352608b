//! Model module containing data structures

mod bounds;
mod deviation_result;
mod distribution;
mod forecast_result;
mod histogram;
mod linearise_policy;
mod trend_split;

pub use bounds::Bounds;
pub use deviation_result::DeviationResult;
pub use distribution::Distribution;
pub use forecast_result::ForecastResult;
pub use histogram::{BinRange, Histogram};
pub use linearise_policy::{LinearisePolicy, OutputKind};
pub use trend_split::TrendSplit;
