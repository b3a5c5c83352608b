//! Trait for reference-sequence generation

use crate::error::Result;

/// Generates a synthetic, evenly stepped reference sequence spanning the
/// range of a series
pub trait Linearizer: Send + Sync {
    /// Build the reference sequence for `series`
    fn linearise(&self, series: &[f64]) -> Result<Vec<f64>>;
}
