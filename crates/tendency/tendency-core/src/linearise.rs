//! Reference-sequence generation
//!
//! A series is "linearised" into an evenly stepped sequence spanning its
//! range. The canonical policy steps from `min` by the mean absolute
//! adjacent difference (taken in the given order, not sorted) and stops
//! before `max`. The fixed-length policy spreads exactly `len(series)`
//! points from `min` to `max` inclusive.

use tendency_spi::{LinearisePolicy, Linearizer, OutputKind, Result, TendencyError};

use crate::validation::{require_len, validate_series};

/// Mean of `|series[i+1] - series[i]|` over all adjacent pairs
pub fn mean_absolute_step(series: &[f64]) -> Result<f64> {
    require_len(series, 2)?;
    let total: f64 = series.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    Ok(total / (series.len() - 1) as f64)
}

fn value_range(series: &[f64]) -> (f64, f64) {
    series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Validated `(min, max, step)` of a series with non-zero variation
fn span(series: &[f64]) -> Result<(f64, f64, f64)> {
    validate_series(series)?;
    let step = mean_absolute_step(series)?;
    if step == 0.0 {
        return Err(TendencyError::InsufficientVariation);
    }
    let (min, max) = value_range(series);
    Ok((min, max, step))
}

/// Arithmetic progression from `min` by the mean absolute step, `max`
/// exclusive.
///
/// # Errors
///
/// * [`TendencyError::EmptySeries`] for fewer than 2 points
/// * [`TendencyError::InsufficientVariation`] when every adjacent
///   difference is zero
///
/// # Example
///
/// ```rust
/// use tendency_core::{linearise, OutputKind};
///
/// let series = [4.0, 13.0, 2.0, 9.0, 8.0, 18.0, 12.0, 5.0, 11.0];
/// let reference = linearise(&series, OutputKind::Float).unwrap();
/// assert_eq!(reference, vec![2.0, 9.125, 16.25]);
/// ```
pub fn linearise(series: &[f64], kind: OutputKind) -> Result<Vec<f64>> {
    let (min, max, step) = span(series)?;
    let len = ((max - min) / step).ceil() as usize;
    // the rounded quotient can overshoot by one point that lands on `max`
    Ok((0..len)
        .map(|i| min + i as f64 * step)
        .take_while(|&value| value < max)
        .map(|value| kind.apply(value))
        .collect())
}

/// Exactly `len(series)` evenly spaced points from `min` to `max` inclusive
pub fn linearise_fixed_length(series: &[f64], kind: OutputKind) -> Result<Vec<f64>> {
    let (min, max, _) = span(series)?;
    let n = series.len();
    let spacing = (max - min) / (n - 1) as f64;
    Ok((0..n)
        .map(|i| {
            let value = if i == n - 1 { max } else { min + i as f64 * spacing };
            kind.apply(value)
        })
        .collect())
}

/// Dispatch on a [`LinearisePolicy`]
pub fn linearise_with(
    series: &[f64],
    policy: LinearisePolicy,
    kind: OutputKind,
) -> Result<Vec<f64>> {
    match policy {
        LinearisePolicy::FixedStep => linearise(series, kind),
        LinearisePolicy::FixedLength => linearise_fixed_length(series, kind),
    }
}

/// Boxed [`Linearizer`] for a policy
pub fn linearizer_for(policy: LinearisePolicy, kind: OutputKind) -> Box<dyn Linearizer> {
    match policy {
        LinearisePolicy::FixedStep => Box::new(StepLinearizer::new(kind)),
        LinearisePolicy::FixedLength => Box::new(SpanLinearizer::new(kind)),
    }
}

/// Fixed-step linearizer
#[derive(Debug, Clone, Copy, Default)]
pub struct StepLinearizer {
    kind: OutputKind,
}

impl StepLinearizer {
    pub fn new(kind: OutputKind) -> Self {
        Self { kind }
    }
}

impl Linearizer for StepLinearizer {
    fn linearise(&self, series: &[f64]) -> Result<Vec<f64>> {
        linearise(series, self.kind)
    }
}

/// Fixed-length linearizer
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanLinearizer {
    kind: OutputKind,
}

impl SpanLinearizer {
    pub fn new(kind: OutputKind) -> Self {
        Self { kind }
    }
}

impl Linearizer for SpanLinearizer {
    fn linearise(&self, series: &[f64]) -> Result<Vec<f64>> {
        linearise_fixed_length(series, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNORDERED: [f64; 9] = [4.0, 13.0, 2.0, 9.0, 8.0, 18.0, 12.0, 5.0, 11.0];

    #[test]
    fn test_mean_absolute_step_uses_given_order() {
        // |9| + |11| + |7| + |1| + |10| + |6| + |7| + |6| = 57 over 8 pairs
        let step = mean_absolute_step(&UNORDERED).unwrap();
        assert!((step - 7.125).abs() < 1e-12);
    }

    #[test]
    fn test_linearise_unordered_series() {
        let result = linearise(&UNORDERED, OutputKind::Float).unwrap();
        assert_eq!(result, vec![2.0, 9.125, 16.25]);
        assert!(result.iter().all(|&v| v < 18.0));
    }

    #[test]
    fn test_linearise_excludes_max() {
        let result = linearise(&[1.0, 2.0, 3.0, 4.0, 5.0], OutputKind::Float).unwrap();
        assert_eq!(result, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_linearise_drops_rounded_point_on_max() {
        // (2.8 + 1.16) / 1.98 rounds to just above 2, but -1.16 + 2 * 1.98 == 2.8
        let result = linearise(&[-1.16, 0.91, 2.8], OutputKind::Float).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], -1.16);
        assert!(result.iter().all(|&v| v < 2.8), "max included: {:?}", result);
    }

    #[test]
    fn test_linearise_integer_truncates() {
        let result = linearise(&UNORDERED, OutputKind::Integer).unwrap();
        assert_eq!(result, vec![2.0, 9.0, 16.0]);
    }

    #[test]
    fn test_linearise_is_ascending() {
        let result = linearise(&[0.5, 3.2, 1.1, 7.9, 2.4, 6.6], OutputKind::Float).unwrap();
        assert!(!result.is_empty());
        assert!(result.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linearise_constant_series_fails() {
        assert_eq!(
            linearise(&[5.0, 5.0, 5.0, 5.0], OutputKind::Float),
            Err(TendencyError::InsufficientVariation)
        );
    }

    #[test]
    fn test_linearise_single_point_fails() {
        assert_eq!(
            linearise(&[5.0], OutputKind::Float),
            Err(TendencyError::EmptySeries {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_linearise_rejects_nan() {
        assert_eq!(
            linearise(&[1.0, f64::NAN, 3.0], OutputKind::Float),
            Err(TendencyError::NonFiniteValue { index: 1 })
        );
    }

    #[test]
    fn test_fixed_length_spans_range_inclusive() {
        let result = linearise_fixed_length(&[3.0, 1.0, 5.0], OutputKind::Float).unwrap();
        assert_eq!(result, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_fixed_length_matches_series_length() {
        let result = linearise_fixed_length(&UNORDERED, OutputKind::Float).unwrap();
        assert_eq!(result.len(), UNORDERED.len());
        assert_eq!(result[0], 2.0);
        assert_eq!(result[8], 18.0);
    }

    #[test]
    fn test_fixed_length_constant_series_fails() {
        assert_eq!(
            linearise_fixed_length(&[2.0, 2.0], OutputKind::Float),
            Err(TendencyError::InsufficientVariation)
        );
    }

    #[test]
    fn test_policy_dispatch() {
        let step =
            linearise_with(&UNORDERED, LinearisePolicy::FixedStep, OutputKind::Float).unwrap();
        let span =
            linearise_with(&UNORDERED, LinearisePolicy::FixedLength, OutputKind::Float).unwrap();
        assert_eq!(step.len(), 3);
        assert_eq!(span.len(), 9);

        let boxed = linearizer_for(LinearisePolicy::FixedLength, OutputKind::Float);
        assert_eq!(boxed.linearise(&UNORDERED).unwrap(), span);
    }
}
