//! Tendency Facade
//!
//! High-level API for the central-tendency forecaster. Re-exports all public
//! types from the tendency stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use tendency_api::*;

// Explicit re-exports for documentation
pub use tendency_api::prelude;

// Re-export core modules for direct access
pub use tendency_core::{deviation, distribution, expectation, forecaster, linearise, scenario};

// Re-export SPI traits
pub use tendency_spi::{DistributionStrategy, Linearizer};
