//! Sample statistics over paired observations.

use ndarray::ArrayView1;

use crate::MathError;

/// Variances at or below this are treated as zero.
pub const VARIANCE_EPSILON: f64 = 1e-12;

/// Arithmetic mean.
///
/// # Errors
/// Returns `MathError::InsufficientObservations` for an empty input.
pub fn sample_mean(x: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    x.mean().ok_or(MathError::InsufficientObservations { required: 1, actual: 0 })
}

/// Unbiased (n - 1) sample variance.
///
/// # Errors
/// Returns `MathError::InsufficientObservations` with fewer than two values.
pub fn sample_variance(x: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    sample_covariance(x, x)
}

/// Unbiased (n - 1) sample covariance of two equally long samples.
///
/// # Errors
/// Returns `MathError::DimensionMismatch` if lengths differ and
/// `MathError::InsufficientObservations` with fewer than two pairs.
pub fn sample_covariance(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
) -> Result<f64, MathError> {
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch { expected: x.len(), actual: y.len() });
    }
    let n = x.len();
    if n < 2 {
        return Err(MathError::InsufficientObservations { required: 2, actual: n });
    }

    let mx = sample_mean(x)?;
    let my = sample_mean(y)?;
    let cross: f64 = x.iter().zip(y.iter()).map(|(a, b)| (a - mx) * (b - my)).sum();
    let cov = cross / (n as f64 - 1.0);

    if cov.is_finite() {
        Ok(cov)
    } else {
        Err(MathError::NumericalInstability(format!("covariance is {cov}")))
    }
}

/// Beta of `asset` on `market`: `Cov(asset, market) / Var(market)`.
///
/// # Errors
/// Propagates covariance errors and returns `MathError::ZeroVariance` when
/// the market variance does not exceed [`VARIANCE_EPSILON`].
pub fn beta(asset: ArrayView1<'_, f64>, market: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    let cov = sample_covariance(asset, market)?;
    let var = sample_variance(market)?;
    if var <= VARIANCE_EPSILON {
        return Err(MathError::ZeroVariance);
    }
    Ok(cov / var)
}
