use serde::Serialize;
use thiserror::Error;

/// Structural contract violations. Numeric degeneracies never land here;
/// see [`Degeneracy`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("decision matrix has no alternatives")]
    NoAlternatives,
    #[error("decision matrix has no criteria")]
    NoCriteria,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{what} length is {found}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) is not a finite number")]
    NonFiniteCell { row: usize, col: usize },
    #[error("{what}[{index}] is not a finite number")]
    NonFiniteValue { what: &'static str, index: usize },
    #[error("at least {min} {what} required, found {found}")]
    TooFew {
        what: &'static str,
        min: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidShape,
    InvalidInput,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NoAlternatives
            | EngineError::NoCriteria
            | EngineError::RaggedRow { .. }
            | EngineError::LengthMismatch { .. } => ErrorKind::InvalidShape,
            EngineError::NonFiniteCell { .. }
            | EngineError::NonFiniteValue { .. }
            | EngineError::TooFew { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Rectangular alternatives x criteria matrix of finite values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, EngineError> {
        let Some(first) = rows.first() else {
            return Err(EngineError::NoAlternatives);
        };
        let n_criteria = first.len();
        if n_criteria == 0 {
            return Err(EngineError::NoCriteria);
        }
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != n_criteria {
                return Err(EngineError::RaggedRow {
                    row: row_idx,
                    expected: n_criteria,
                    found: row.len(),
                });
            }
            if let Some(col) = row.iter().position(|v| !v.is_finite()) {
                return Err(EngineError::NonFiniteCell { row: row_idx, col });
            }
        }
        Ok(Self { rows })
    }

    pub fn n_alternatives(&self) -> usize {
        self.rows.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |r| r[col])
    }

    pub fn column_min_max(&self, col: usize) -> (f64, f64) {
        self.column(col)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Largest absolute value in the column. Dividing by it keeps sums and
    /// squares of the column in range.
    pub fn column_max_abs(&self, col: usize) -> f64 {
        self.column(col).fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Builds a same-shaped matrix from per-cell values. The caller is
    /// responsible for keeping the values finite.
    pub(crate) fn map_cells<F>(&self, mut f: F) -> Vec<Vec<f64>>
    where
        F: FnMut(usize, usize, f64) -> f64,
    {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().enumerate().map(|(j, v)| f(i, j, *v)).collect())
            .collect()
    }
}

/// `true` marks a benefit criterion (higher is better), `false` a cost one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriteriaMask(Vec<bool>);

impl CriteriaMask {
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_beneficial(&self, col: usize) -> bool {
        self.0[col]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

pub(crate) fn check_len(
    what: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), EngineError> {
    if expected != found {
        return Err(EngineError::LengthMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

/// Numeric edge cases that the engine absorbs with a defined fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degeneracy {
    SingleAlternative,
    ConstantColumn { criterion: usize, value: f64 },
    ZeroSumColumn { criterion: usize },
}

impl Degeneracy {
    pub fn describe(&self) -> String {
        match self {
            Degeneracy::SingleAlternative => {
                "single alternative: min-max range and entropy fall back".to_string()
            }
            Degeneracy::ConstantColumn { criterion, value } => format!(
                "criterion {} is constant ({}): zero range, zero entropy weight",
                criterion, value
            ),
            Degeneracy::ZeroSumColumn { criterion } => {
                format!("criterion {} sums to zero in absolute value", criterion)
            }
        }
    }
}

pub fn diagnose(matrix: &DecisionMatrix) -> Vec<Degeneracy> {
    let mut notes = Vec::new();
    if matrix.n_alternatives() == 1 {
        notes.push(Degeneracy::SingleAlternative);
        return notes;
    }
    for col in 0..matrix.n_criteria() {
        let abs_sum: f64 = matrix.column(col).map(f64::abs).sum();
        if abs_sum == 0.0 {
            notes.push(Degeneracy::ZeroSumColumn { criterion: col });
            continue;
        }
        let (lo, hi) = matrix.column_min_max(col);
        if hi - lo == 0.0 {
            notes.push(Degeneracy::ConstantColumn {
                criterion: col,
                value: lo,
            });
        }
    }
    notes
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
