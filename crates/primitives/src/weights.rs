//! Weight type definitions.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Fixed loadings on lagged benchmark returns.
///
/// Stored oldest lag first: with `n` weights, `weights[k]` applies to the
/// value at index `i - n + k`, so the last weight loads the most recent lag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LagWeights {
    weights: Vec<f64>,
}

impl LagWeights {
    /// Model default loadings for lags 3, 2 and 1.
    pub const DEFAULT: [f64; 3] = [0.04, 0.16, 0.36];

    /// Create lag weights, oldest lag first.
    #[must_use]
    pub const fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Get the weights as a slice.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Get the weights as an ndarray.
    #[must_use]
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_vec(self.weights.clone())
    }

    /// Number of lags covered.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.weights.len()
    }

    /// Weight on the value `lag` periods back (1 = most recent).
    #[must_use]
    pub fn at(&self, lag: usize) -> Option<f64> {
        if lag == 0 || lag > self.weights.len() {
            return None;
        }
        self.weights.get(self.weights.len() - lag).copied()
    }
}

impl Default for LagWeights {
    fn default() -> Self {
        Self::new(Self::DEFAULT.to_vec())
    }
}
