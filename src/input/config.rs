use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::criteria::{MaskSource, infer_mask};
use crate::model::methods::Method;
use crate::model::weights::WeightingKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown criterion in [beneficial]: {0}")]
    UnknownCriterion(String),
}

/// Analysis settings file. Every field is optional; command line flags take
/// precedence over anything set here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub method: Option<Method>,
    #[serde(default)]
    pub weighting: Option<WeightingKind>,
    #[serde(default)]
    pub custom_weights: Option<Vec<f64>>,
    #[serde(default)]
    pub mask: Option<MaskSource>,
    /// Per-criterion overrides keyed by criterion name.
    #[serde(default)]
    pub beneficial: BTreeMap<String, bool>,
}

pub fn load_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<AnalysisConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

impl AnalysisConfig {
    /// Mask for `criteria`: the inferred default, then the named overrides.
    pub fn resolve_mask(
        &self,
        criteria: &[String],
        source_override: Option<MaskSource>,
    ) -> Result<Vec<bool>, ConfigError> {
        let source = source_override.or(self.mask).unwrap_or_default();
        let mut mask = infer_mask(criteria, source);
        for (name, flag) in &self.beneficial {
            let idx = criteria
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| ConfigError::UnknownCriterion(name.clone()))?;
            mask[idx] = *flag;
        }
        Ok(mask)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/config.rs"]
mod tests;
