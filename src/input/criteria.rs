use serde::{Deserialize, Serialize};

use crate::input::sheet::import_default_mask;

const COST_KEYWORDS: [&str; 6] = ["LOSS", "COST", "TIME", "POROSITY", "AR", "WA"];
const BENEFIT_KEYWORDS: [&str; 7] = [
    "CS",
    "FS",
    "STS",
    "STRENGTH",
    "PERFORMANCE",
    "EFFICIENCY",
    "QUALITY",
];

/// How the benefit/cost flag of each criterion is chosen when it is not given
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaskSource {
    /// First three criteria are benefit criteria, the rest are cost.
    #[default]
    Import,
    /// Guess from keywords in the criterion name.
    Keywords,
}

/// Substring match on the upper-cased name. Cost keywords win over benefit
/// keywords; names matching neither count as benefit criteria.
pub fn is_likely_beneficial(criterion: &str) -> bool {
    let upper = criterion.to_uppercase();
    if COST_KEYWORDS.iter().any(|k| upper.contains(k)) {
        return false;
    }
    if BENEFIT_KEYWORDS.iter().any(|k| upper.contains(k)) {
        return true;
    }
    true
}

pub fn infer_mask(criteria: &[String], source: MaskSource) -> Vec<bool> {
    match source {
        MaskSource::Import => import_default_mask(criteria.len()),
        MaskSource::Keywords => criteria.iter().map(|c| is_likely_beneficial(c)).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/criteria.rs"]
mod tests;
