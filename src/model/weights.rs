use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::matrix::{DecisionMatrix, EngineError, check_len};

/// Bounds of the interactive weight sliders. Raw values outside the range are
/// accepted by the engine; the bounds only drive front-end defaults.
pub const SLIDER_MIN: f64 = 0.1;
pub const SLIDER_MAX: f64 = 5.0;
pub const SLIDER_DEFAULT: f64 = 1.0;

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Diversification below this is rounding noise from a constant column.
const DIVERSIFICATION_EPS: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightingKind {
    #[default]
    Equal,
    Custom,
    Entropy,
}

impl WeightingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightingKind::Equal => "equal",
            WeightingKind::Custom => "custom",
            WeightingKind::Entropy => "entropy",
        }
    }
}

impl std::fmt::Display for WeightingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeightingMethod {
    Equal,
    Custom(Vec<f64>),
    Entropy,
}

impl WeightingMethod {
    pub fn kind(&self) -> WeightingKind {
        match self {
            WeightingMethod::Equal => WeightingKind::Equal,
            WeightingMethod::Custom(_) => WeightingKind::Custom,
            WeightingMethod::Entropy => WeightingKind::Entropy,
        }
    }
}

/// Non-negative criterion weights summing to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wraps caller-supplied weights as-is after checking the shape. Use the
    /// `equal`/`custom`/`entropy` constructors to obtain normalized vectors.
    pub fn from_raw(values: Vec<f64>, n_criteria: usize) -> Result<Self, EngineError> {
        check_len("weights", n_criteria, values.len())?;
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(EngineError::NonFiniteValue {
                what: "weights",
                index,
            });
        }
        Ok(Self(values))
    }

    pub fn equal(n_criteria: usize) -> Self {
        Self(vec![1.0 / n_criteria as f64; n_criteria])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE && self.0.iter().all(|w| *w >= 0.0)
    }
}

pub fn compute_weights(
    matrix: &DecisionMatrix,
    method: &WeightingMethod,
) -> Result<WeightVector, EngineError> {
    match method {
        WeightingMethod::Equal => Ok(WeightVector::equal(matrix.n_criteria())),
        WeightingMethod::Custom(raw) => custom_weights(raw, matrix.n_criteria()),
        WeightingMethod::Entropy => Ok(entropy_weights(matrix)),
    }
}

pub fn custom_weights(raw: &[f64], n_criteria: usize) -> Result<WeightVector, EngineError> {
    check_len("custom weights", n_criteria, raw.len())?;
    if let Some(index) = raw.iter().position(|v| !v.is_finite()) {
        return Err(EngineError::NonFiniteValue {
            what: "custom weights",
            index,
        });
    }
    let clipped: Vec<f64> = raw.iter().map(|v| v.max(0.0)).collect();
    let sum: f64 = clipped.iter().sum();
    if sum <= 0.0 {
        debug!(n_criteria, "custom weights sum to zero, using equal weights");
        return Ok(WeightVector::equal(n_criteria));
    }
    Ok(WeightVector(clipped.iter().map(|v| v / sum).collect()))
}

/// Objective weights from column dispersion (Shannon entropy).
pub fn entropy_weights(matrix: &DecisionMatrix) -> WeightVector {
    let m = matrix.n_alternatives();
    let n = matrix.n_criteria();
    if m < 2 {
        debug!(m, "entropy undefined for fewer than two alternatives, using equal weights");
        return WeightVector::equal(n);
    }
    let ln_m = (m as f64).ln();

    let mut diversification = Vec::with_capacity(n);
    for col in 0..n {
        // Shares are taken on cells scaled by the column maximum so the sum
        // stays finite for columns near f64::MAX.
        let max_abs = matrix.column_max_abs(col);
        if max_abs == 0.0 {
            diversification.push(0.0);
            continue;
        }
        let abs_sum: f64 = matrix.column(col).map(|v| v.abs() / max_abs).sum();
        let mut acc = 0.0;
        for v in matrix.column(col) {
            let p = (v.abs() / max_abs) / abs_sum;
            if p > 0.0 {
                acc += p * p.ln();
            }
        }
        let entropy = -acc / ln_m;
        let d = 1.0 - entropy;
        diversification.push(if d > DIVERSIFICATION_EPS { d } else { 0.0 });
    }

    let total: f64 = diversification.iter().sum();
    if total <= 0.0 {
        debug!(n, "entropy diversification is zero, using equal weights");
        return WeightVector::equal(n);
    }
    WeightVector(diversification.iter().map(|d| d / total).collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
