//! Probability-weighted expectation

use tendency_spi::{Result, TendencyError};

/// `quantity * Σ outcomes[i] * probabilities[i]`
///
/// Probabilities are not normalized; callers pass frequencies of a
/// partition, which already sum to 1.
pub fn expectation(quantity: f64, outcomes: &[f64], probabilities: &[f64]) -> Result<f64> {
    if outcomes.len() != probabilities.len() {
        return Err(TendencyError::invalid_parameter(
            "probabilities",
            format!(
                "expected {} probabilities for {} outcomes, got {}",
                outcomes.len(),
                outcomes.len(),
                probabilities.len()
            ),
        ));
    }

    let weighted: f64 = outcomes
        .iter()
        .zip(probabilities)
        .map(|(o, p)| o * p)
        .sum();
    Ok(quantity * weighted)
}
