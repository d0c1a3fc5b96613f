use crate::model::matrix::{CriteriaMask, DecisionMatrix};

/// Offset added to every min-max cell before the weighted product so that no
/// base is zero.
pub const WPM_OFFSET: f64 = 0.01;

/// Column-wise Euclidean normalization. Columns with zero norm map to 0.
///
/// Cells are divided by the column's largest magnitude before squaring, so
/// columns near `f64::MAX` or near zero keep their relative sizes.
pub fn vector_normalize(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
    let scales: Vec<(f64, f64)> = (0..matrix.n_criteria())
        .map(|col| {
            let max_abs = matrix.column_max_abs(col);
            if max_abs == 0.0 {
                return (0.0, 0.0);
            }
            let norm = matrix
                .column(col)
                .map(|v| (v / max_abs) * (v / max_abs))
                .sum::<f64>()
                .sqrt();
            (max_abs, norm)
        })
        .collect();
    matrix.map_cells(|_, j, v| {
        let (max_abs, norm) = scales[j];
        if norm > 0.0 { (v / max_abs) / norm } else { 0.0 }
    })
}

/// Column-wise min-max normalization oriented by the mask: benefit columns
/// map the minimum to 0, cost columns map the maximum to 0. A zero range is
/// treated as 1.
///
/// Differences are taken on halved values; halving is exact, so the ratios
/// are unchanged and a column spanning `-f64::MAX..f64::MAX` cannot overflow.
pub fn min_max_normalize(matrix: &DecisionMatrix, mask: &CriteriaMask, offset: f64) -> Vec<Vec<f64>> {
    let bounds: Vec<(f64, f64, f64)> = (0..matrix.n_criteria())
        .map(|col| {
            let (lo, hi) = matrix.column_min_max(col);
            let (lo, hi) = (lo / 2.0, hi / 2.0);
            let range = hi - lo;
            (lo, hi, if range == 0.0 { 1.0 } else { range })
        })
        .collect();
    matrix.map_cells(|_, j, v| {
        let (lo, hi, range) = bounds[j];
        let half = v / 2.0;
        let scaled = if mask.is_beneficial(j) {
            (half - lo) / range
        } else {
            (hi - half) / range
        };
        scaled + offset
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/normalize.rs"]
mod tests;
