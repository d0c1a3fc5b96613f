use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::model::analysis::AnalysisInput;
use crate::model::methods::Method;
use crate::model::ranking::RankedResult;
use crate::model::weights::WeightVector;

/// Shape of the exported analysis file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub method: String,
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub weights: Vec<f64>,
    pub beneficial_mask: Vec<bool>,
    pub results: Vec<RankedResult>,
    pub timestamp: String,
}

pub fn build_export(
    input: &AnalysisInput,
    method: Method,
    weights: &WeightVector,
    results: &[RankedResult],
    at: DateTime<Utc>,
) -> ExportDocument {
    ExportDocument {
        method: method.as_str().to_string(),
        criteria: input.criteria().to_vec(),
        alternatives: input.alternatives().to_vec(),
        weights: weights.as_slice().to_vec(),
        beneficial_mask: input.mask().as_slice().to_vec(),
        results: results.to_vec(),
        timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub fn write_export(out_dir: &std::path::Path, doc: &ExportDocument) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(doc).map_err(std::io::Error::from)?;
    let path = out_dir.join("results.json");
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
