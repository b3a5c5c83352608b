//! Deviation engine
//!
//! Compares every element of a reference set `a` against every element of a
//! data set `b`. The cost is `O(|a| * |b|)` in time; [`deviation`] streams the
//! rows so memory stays `O(|a|)`, while [`difference_matrix`] materializes the
//! full matrix.

use tendency_spi::{DeviationResult, Result, TendencyError};
use tracing::{trace, warn};

use crate::validation::validate_series;

/// Matrix size above which the quadratic cost is logged as a warning
pub const QUADRATIC_WARN_CELLS: usize = 4_000_000;

fn check_sets(a: &[f64], b: &[f64]) -> Result<()> {
    for set in [a, b] {
        if set.is_empty() {
            return Err(TendencyError::EmptySeries {
                required: 1,
                actual: 0,
            });
        }
        validate_series(set)?;
    }

    let cells = a.len().saturating_mul(b.len());
    if cells > QUADRATIC_WARN_CELLS {
        warn!(
            rows = a.len(),
            columns = b.len(),
            cells,
            "deviation matrix is large, cost grows quadratically with series length"
        );
    }
    Ok(())
}

#[inline]
fn difference(x: f64, y: f64, absolute: bool) -> f64 {
    if absolute {
        (x - y).abs()
    } else {
        x - y
    }
}

/// Full difference matrix `D[i][j] = a[i] - b[j]` (or `|a[i] - b[j]|`)
///
/// # Example
///
/// ```rust
/// use tendency_core::difference_matrix;
///
/// let matrix = difference_matrix(&[1.0, 2.0, 3.0], &[4.0, 5.0], true).unwrap();
/// assert_eq!(matrix, vec![vec![3.0, 4.0], vec![2.0, 3.0], vec![1.0, 2.0]]);
/// ```
pub fn difference_matrix(a: &[f64], b: &[f64], absolute: bool) -> Result<Vec<Vec<f64>>> {
    check_sets(a, b)?;
    Ok(a.iter()
        .map(|&x| b.iter().map(|&y| difference(x, y, absolute)).collect())
        .collect())
}

/// Reduce the difference matrix of `a` against `b`.
///
/// * `elementwise_deviations[i]` is the mean of row `i`
/// * `mean_deviation` is the mean of those row means, or with `use_rms` the
///   root of the mean squared difference over the whole matrix
/// * `closest_elements` are all `a[i]` whose row mean equals the minimum;
///   `central_element` is their mean
pub fn deviation(
    a: &[f64],
    b: &[f64],
    use_absolute: bool,
    use_rms: bool,
) -> Result<DeviationResult> {
    check_sets(a, b)?;

    let width = b.len() as f64;
    let mut elementwise_deviations = Vec::with_capacity(a.len());
    let mut squared_total = 0.0;

    for &x in a {
        let mut row_total = 0.0;
        for &y in b {
            let d = difference(x, y, use_absolute);
            row_total += d;
            squared_total += d * d;
        }
        elementwise_deviations.push(row_total / width);
    }

    let mean_deviation = if use_rms {
        (squared_total / (a.len() as f64 * width)).sqrt()
    } else {
        elementwise_deviations.iter().sum::<f64>() / a.len() as f64
    };

    let minimum = elementwise_deviations
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let closest_elements: Vec<f64> = a
        .iter()
        .zip(&elementwise_deviations)
        .filter(|(_, e)| **e == minimum)
        .map(|(&x, _)| x)
        .collect();
    let central_element = closest_elements.iter().sum::<f64>() / closest_elements.len() as f64;

    trace!(
        rows = a.len(),
        columns = b.len(),
        ties = closest_elements.len(),
        central_element,
        mean_deviation,
        "deviation reduced"
    );

    Ok(DeviationResult {
        closest_elements,
        central_element,
        mean_deviation,
        elementwise_deviations,
    })
}
