use serde::Serialize;

use crate::model::matrix::{EngineError, check_len};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(rename = "alternative")]
    pub name: String,
    pub score: f64,
    pub rank: usize,
    #[serde(skip)]
    pub index: usize,
}

/// Orders alternatives by descending score. Equal scores keep their input
/// order, so ranks are always a permutation of `1..=n`.
pub fn rank(scores: &[f64], names: &[String]) -> Result<Vec<RankedResult>, EngineError> {
    check_len("alternative names", scores.len(), names.len())?;

    let mut results: Vec<RankedResult> = scores
        .iter()
        .zip(names.iter())
        .enumerate()
        .map(|(index, (score, name))| RankedResult {
            name: name.clone(),
            score: *score,
            rank: 0,
            index,
        })
        .collect();

    // sort_by is stable; total_cmp keeps a NaN from scrambling the order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (pos, result) in results.iter_mut().enumerate() {
        result.rank = pos + 1;
    }
    Ok(results)
}

/// Rank of every alternative, indexed by input position.
pub fn ranks_by_index(results: &[RankedResult]) -> Vec<usize> {
    let mut ranks = vec![0; results.len()];
    for r in results {
        ranks[r.index] = r.rank;
    }
    ranks
}

/// Scores rescaled to 0..=100 over the observed range (a zero range counts
/// as 1), in the same order as `results`.
pub fn display_scores(results: &[RankedResult]) -> Vec<f64> {
    if results.is_empty() {
        return Vec::new();
    }
    let (lo, hi) = results
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.score), hi.max(r.score))
        });
    let range = if hi - lo == 0.0 { 1.0 } else { hi - lo };
    results
        .iter()
        .map(|r| (r.score - lo) / range * 100.0)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ranking.rs"]
mod tests;
