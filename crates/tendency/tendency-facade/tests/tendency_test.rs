//! Unit tests for the tendency facade
//!
//! Covers each component through the public re-exports.

use tendency_facade::{
    deviation, difference_matrix, distribution, expectation, linearise, OutputKind, TendencyError,
};

// ============================================================================
// Linearizer Tests
// ============================================================================

#[test]
fn test_linearise_constant_series_is_rejected() {
    let result = linearise(&[5.0, 5.0, 5.0, 5.0], OutputKind::Float);
    assert_eq!(result, Err(TendencyError::InsufficientVariation));
}

#[test]
fn test_linearise_example_in_given_order() {
    let result = linearise(
        &[4.0, 13.0, 2.0, 9.0, 8.0, 18.0, 12.0, 5.0, 11.0],
        OutputKind::Float,
    )
    .unwrap();

    assert_eq!(result[0], 2.0);
    assert!(result.iter().all(|&v| v < 18.0));
    for w in result.windows(2) {
        assert!((w[1] - w[0] - 7.125).abs() < 1e-12);
    }
}

// ============================================================================
// Deviation Tests
// ============================================================================

#[test]
fn test_deviation_matrix_example() {
    let matrix = difference_matrix(&[1.0, 2.0, 3.0], &[4.0, 5.0], true).unwrap();
    assert_eq!(matrix, vec![vec![3.0, 4.0], vec![2.0, 3.0], vec![1.0, 2.0]]);
}

#[test]
fn test_deviation_closest_element() {
    let result = deviation(&[1.0, 2.0, 3.0], &[4.0, 5.0], true, false).unwrap();
    assert_eq!(result.central_element, 3.0);
    assert_eq!(result.elementwise_deviations.len(), 3);
}

// ============================================================================
// Distribution Tests
// ============================================================================

#[test]
fn test_distribution_has_two_bins() {
    let result = distribution(&[1.0, 3.0, 2.0, 5.0, 4.0], true, true, false).unwrap();
    assert_eq!(result.bin_counts().len(), 2);
    assert_eq!(result.absolute_frequency().len(), 2);
    assert_eq!(result.relative_frequency().len(), 2);
    assert_eq!(result.histogram.bins[0].end, result.histogram.bins[1].start);
}

#[test]
fn test_distribution_empty_is_degenerate() {
    let result = distribution(&[], true, true, false).unwrap();
    assert!(result.is_degenerate());
    assert_eq!(result.bin_counts(), &[0, 0]);
}

// ============================================================================
// Expectation Tests
// ============================================================================

#[test]
fn test_expectation_weighted_sum() {
    let value = expectation(4.0, &[1.0, -2.0], &[0.5, 0.5]).unwrap();
    assert!((value + 2.0).abs() < 1e-12);
}
