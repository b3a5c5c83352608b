//! Contract module containing trait definitions for tendency operations

mod distribution_strategy;
mod linearizer;

pub use distribution_strategy::DistributionStrategy;
pub use linearizer::Linearizer;
