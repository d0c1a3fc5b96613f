use serde::{Deserialize, Serialize};

use crate::model::matrix::{CriteriaMask, DecisionMatrix, EngineError, check_len};
use crate::model::normalize::{WPM_OFFSET, min_max_normalize, vector_normalize};
use crate::model::weights::WeightVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Topsis,
    Edas,
    Wsm,
    Wpm,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Topsis, Method::Edas, Method::Wsm, Method::Wpm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Topsis => "TOPSIS",
            Method::Edas => "EDAS",
            Method::Wsm => "WSM",
            Method::Wpm => "WPM",
        }
    }

    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        mask: &CriteriaMask,
    ) -> Result<Vec<f64>, EngineError> {
        match self {
            Method::Topsis => topsis(matrix, weights, mask),
            Method::Edas => edas(matrix, weights, mask),
            Method::Wsm => wsm(matrix, weights, mask),
            Method::Wpm => wpm(matrix, weights, mask),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_inputs(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    mask: &CriteriaMask,
) -> Result<(), EngineError> {
    check_len("weights", matrix.n_criteria(), weights.len())?;
    check_len("criteria mask", matrix.n_criteria(), mask.len())
}

/// Closeness to the ideal solution: `d- / (d+ + d-)` over the weighted,
/// vector-normalized matrix.
pub fn topsis(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    mask: &CriteriaMask,
) -> Result<Vec<f64>, EngineError> {
    check_inputs(matrix, weights, mask)?;
    let w = weights.as_slice();
    let weighted: Vec<Vec<f64>> = vector_normalize(matrix)
        .into_iter()
        .map(|row| row.iter().zip(w).map(|(v, wj)| v * wj).collect())
        .collect();

    let n = matrix.n_criteria();
    let mut ideal = Vec::with_capacity(n);
    let mut anti_ideal = Vec::with_capacity(n);
    for j in 0..n {
        let (lo, hi) = weighted
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), row| {
                (lo.min(row[j]), hi.max(row[j]))
            });
        if mask.is_beneficial(j) {
            ideal.push(hi);
            anti_ideal.push(lo);
        } else {
            ideal.push(lo);
            anti_ideal.push(hi);
        }
    }

    let scores = weighted
        .iter()
        .map(|row| {
            let d_pos = euclidean(row, &ideal);
            let d_neg = euclidean(row, &anti_ideal);
            let denom = d_pos + d_neg;
            d_neg / if denom == 0.0 { 1.0 } else { denom }
        })
        .collect();
    Ok(scores)
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Evaluation based on Distance from Average Solution.
pub fn edas(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    mask: &CriteriaMask,
) -> Result<Vec<f64>, EngineError> {
    check_inputs(matrix, weights, mask)?;
    let m = matrix.n_alternatives() as f64;
    let averages: Vec<f64> = (0..matrix.n_criteria())
        .map(|col| {
            let sum: f64 = matrix.column(col).sum();
            if sum.is_finite() {
                sum / m
            } else {
                matrix.column(col).map(|v| v / m).sum()
            }
        })
        .collect();
    let w = weights.as_slice();

    let mut sp = Vec::with_capacity(matrix.n_alternatives());
    let mut sn = Vec::with_capacity(matrix.n_alternatives());
    for row in matrix.rows() {
        let mut pos = 0.0;
        let mut neg = 0.0;
        for (j, v) in row.iter().enumerate() {
            let avg = averages[j];
            let scale = if avg == 0.0 { 1.0 } else { avg };
            let above = (v - avg) / scale;
            let below = (avg - v) / scale;
            let (pda, nda) = if mask.is_beneficial(j) {
                (above.max(0.0), below.max(0.0))
            } else {
                (below.max(0.0), above.max(0.0))
            };
            pos += saturate(pda) * w[j];
            neg += saturate(nda) * w[j];
        }
        sp.push(saturate(pos));
        sn.push(saturate(neg));
    }

    let max_sp = max_or_one(&sp);
    let max_sn = max_or_one(&sn);
    let scores = sp
        .iter()
        .zip(&sn)
        .map(|(p, n)| {
            let nsp = p / max_sp;
            let nsn = 1.0 - n / max_sn;
            (nsp + nsn) / 2.0
        })
        .collect();
    Ok(scores)
}

/// Distances past the f64 range are pinned to `f64::MAX`.
fn saturate(value: f64) -> f64 {
    value.min(f64::MAX)
}

fn max_or_one(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 { 1.0 } else { max }
}

/// Weighted sum of min-max normalized cells.
pub fn wsm(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    mask: &CriteriaMask,
) -> Result<Vec<f64>, EngineError> {
    check_inputs(matrix, weights, mask)?;
    let w = weights.as_slice();
    let scores = min_max_normalize(matrix, mask, 0.0)
        .iter()
        .map(|row| row.iter().zip(w).map(|(v, wj)| v * wj).sum())
        .collect();
    Ok(scores)
}

/// Weighted product of offset min-max normalized cells.
pub fn wpm(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    mask: &CriteriaMask,
) -> Result<Vec<f64>, EngineError> {
    check_inputs(matrix, weights, mask)?;
    let w = weights.as_slice();
    let scores = min_max_normalize(matrix, mask, WPM_OFFSET)
        .iter()
        .map(|row| row.iter().zip(w).map(|(v, wj)| v.powf(*wj)).product())
        .collect();
    Ok(scores)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/methods.rs"]
mod tests;
