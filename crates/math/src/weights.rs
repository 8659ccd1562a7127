//! Weighted combinations.

use ndarray::ArrayView1;

use crate::MathError;

/// Dot product of `values` with `weights`.
///
/// # Errors
/// Returns `MathError::DimensionMismatch` if the lengths differ.
pub fn weighted_sum(
    values: ArrayView1<'_, f64>,
    weights: ArrayView1<'_, f64>,
) -> Result<f64, MathError> {
    if values.len() != weights.len() {
        return Err(MathError::DimensionMismatch { expected: weights.len(), actual: values.len() });
    }
    Ok(values.dot(&weights))
}
