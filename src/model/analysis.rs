use crate::model::matrix::{CriteriaMask, DecisionMatrix, EngineError, check_len};
use crate::model::methods::Method;
use crate::model::ranking::{RankedResult, rank};
use crate::model::weights::{WeightVector, WeightingMethod, compute_weights};

pub const MIN_ALTERNATIVES: usize = 2;
pub const MIN_CRITERIA: usize = 2;

/// Everything one analysis run needs. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    matrix: DecisionMatrix,
    mask: CriteriaMask,
    weighting: WeightingMethod,
    method: Method,
}

impl AnalysisInput {
    /// Blank names are replaced with `Alternative i` / `Criterion i`.
    pub fn new(
        alternatives: Vec<String>,
        criteria: Vec<String>,
        matrix: DecisionMatrix,
        mask: CriteriaMask,
        weighting: WeightingMethod,
        method: Method,
    ) -> Result<Self, EngineError> {
        if matrix.n_alternatives() < MIN_ALTERNATIVES {
            return Err(EngineError::TooFew {
                what: "alternatives",
                min: MIN_ALTERNATIVES,
                found: matrix.n_alternatives(),
            });
        }
        if matrix.n_criteria() < MIN_CRITERIA {
            return Err(EngineError::TooFew {
                what: "criteria",
                min: MIN_CRITERIA,
                found: matrix.n_criteria(),
            });
        }
        check_len("alternative names", matrix.n_alternatives(), alternatives.len())?;
        check_len("criterion names", matrix.n_criteria(), criteria.len())?;
        check_len("criteria mask", matrix.n_criteria(), mask.len())?;
        if let WeightingMethod::Custom(raw) = &weighting {
            check_len("custom weights", matrix.n_criteria(), raw.len())?;
        }

        Ok(Self {
            alternatives: default_names(alternatives, "Alternative"),
            criteria: default_names(criteria, "Criterion"),
            matrix,
            mask,
            weighting,
            method,
        })
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    pub fn mask(&self) -> &CriteriaMask {
        &self.mask
    }

    pub fn weighting(&self) -> &WeightingMethod {
        &self.weighting
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

pub fn default_names(names: Vec<String>, prefix: &str) -> Vec<String> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                format!("{} {}", prefix, i + 1)
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub method: Method,
    pub weights: WeightVector,
    pub scores: Vec<f64>,
    pub results: Vec<RankedResult>,
}

pub fn run_analysis(input: &AnalysisInput) -> Result<AnalysisOutcome, EngineError> {
    let weights = compute_weights(&input.matrix, &input.weighting)?;
    let scores = input.method.score(&input.matrix, &weights, &input.mask)?;
    let results = rank(&scores, &input.alternatives)?;
    Ok(AnalysisOutcome {
        method: input.method,
        weights,
        scores,
        results,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/analysis.rs"]
mod tests;
