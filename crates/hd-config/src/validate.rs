//! Semantic validation errors for configuration files.

use thiserror::Error;

/// Result of validating a configuration value.
pub type ValidationResult = Result<(), ValidationError>;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("incompatible schema version {found} (expected {expected})")]
    SchemaVersion { found: String, expected: String },

    #[error("{field} must be a probability in [0, 1], got {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("{field} must sum to 1, got {sum}")]
    NotNormalized { field: String, sum: f64 },
}

impl ValidationError {
    /// Whether the error is about parameter values rather than reading the file.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            ValidationError::OutOfRange { .. } | ValidationError::NotNormalized { .. }
        )
    }
}

impl From<ValidationError> for hd_common::Error {
    fn from(err: ValidationError) -> Self {
        if err.is_semantic() {
            hd_common::Error::InvalidModel(err.to_string())
        } else {
            hd_common::Error::Config(err.to_string())
        }
    }
}

/// Check that `value` is a probability.
pub(crate) fn check_probability(field: &str, value: f64) -> ValidationResult {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

/// Check that `values` sum to 1 within `tolerance`.
pub(crate) fn check_sums_to_one(field: &str, values: &[f64], tolerance: f64) -> ValidationResult {
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() <= tolerance {
        Ok(())
    } else {
        Err(ValidationError::NotNormalized {
            field: field.to_string(),
            sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds() {
        assert!(check_probability("m", 0.0).is_ok());
        assert!(check_probability("m", 1.0).is_ok());
        assert!(check_probability("m", -0.1).is_err());
        assert!(check_probability("m", 1.1).is_err());
        assert!(check_probability("m", f64::NAN).is_err());
    }

    #[test]
    fn sums_to_one() {
        assert!(check_sums_to_one("prior", &[0.96, 0.03, 0.01], 1e-9).is_ok());
        let err = check_sums_to_one("prior", &[0.5, 0.4], 1e-9).unwrap_err();
        assert!(err.to_string().contains("prior"));
    }

    #[test]
    fn maps_into_common_error() {
        let semantic: hd_common::Error = ValidationError::OutOfRange {
            field: "mutation_rate".into(),
            value: 2.0,
        }
        .into();
        assert_eq!(semantic.code(), 11);

        let io: hd_common::Error = ValidationError::IoError("missing".into()).into();
        assert_eq!(io.code(), 10);
    }
}
