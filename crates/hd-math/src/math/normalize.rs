//! Normalization of unnormalized probability masses.
//!
//! These helpers turn accumulated, unnormalized weights into probability
//! vectors that sum to 1 while preserving relative proportions. Degenerate
//! inputs are reported as errors instead of propagating NaN.

use thiserror::Error;

use super::sum::stable_sum;

/// Errors raised while normalizing a weight vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("cannot normalize an empty weight vector")]
    Empty,
    #[error("weight {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
    #[error("weight {index} is negative: {value}")]
    Negative { index: usize, value: f64 },
    #[error("total mass is zero")]
    ZeroMass,
}

/// Normalize non-negative weights so they sum to 1.
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>, NormalizeError> {
    if weights.is_empty() {
        return Err(NormalizeError::Empty);
    }
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() {
            return Err(NormalizeError::NonFinite { index, value });
        }
        if value < 0.0 {
            return Err(NormalizeError::Negative { index, value });
        }
    }
    let total = stable_sum(weights);
    if total <= 0.0 || !total.is_finite() {
        return Err(NormalizeError::ZeroMass);
    }
    Ok(weights.iter().map(|w| w / total).collect())
}

/// Normalize a fixed-size weight array in place.
pub fn normalize_array<const N: usize>(weights: &mut [f64; N]) -> Result<(), NormalizeError> {
    let probs = normalize(weights.as_slice())?;
    weights.copy_from_slice(&probs);
    Ok(())
}

/// Check that a probability vector sums to 1 within `tolerance` and has
/// every entry in [0, 1].
pub fn is_distribution(probs: &[f64], tolerance: f64) -> bool {
    !probs.is_empty()
        && probs
            .iter()
            .all(|p| p.is_finite() && (-tolerance..=1.0 + tolerance).contains(p))
        && (stable_sum(probs) - 1.0).abs() <= tolerance
}
