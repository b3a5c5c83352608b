//! Input validation shared by every entry point

use tendency_spi::{Result, TendencyError};

/// Reject series containing NaN or infinite values
pub fn validate_series(series: &[f64]) -> Result<()> {
    match series.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TendencyError::NonFiniteValue { index }),
        None => Ok(()),
    }
}

/// Reject a non-finite scalar parameter
pub fn validate_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TendencyError::invalid_parameter(name, "must be finite"))
    }
}

/// Require at least `required` points
pub fn require_len(series: &[f64], required: usize) -> Result<()> {
    if series.len() < required {
        return Err(TendencyError::EmptySeries {
            required,
            actual: series.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_series_accepts_finite() {
        assert!(validate_series(&[1.0, -2.0, 0.0]).is_ok());
        assert!(validate_series(&[]).is_ok());
    }

    #[test]
    fn test_validate_series_reports_first_bad_index() {
        let err = validate_series(&[1.0, f64::NAN, f64::INFINITY]).unwrap_err();
        assert_eq!(err, TendencyError::NonFiniteValue { index: 1 });
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("origin", 1.0).is_ok());
        assert!(matches!(
            validate_finite("origin", f64::NEG_INFINITY),
            Err(TendencyError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_require_len() {
        assert!(require_len(&[1.0, 2.0], 2).is_ok());
        assert_eq!(
            require_len(&[1.0], 2),
            Err(TendencyError::EmptySeries {
                required: 2,
                actual: 1
            })
        );
    }
}
