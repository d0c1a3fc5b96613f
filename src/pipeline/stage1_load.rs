use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::input::InputError;
use crate::input::config::{AnalysisConfig, ConfigError, load_config};
use crate::input::criteria::MaskSource;
use crate::input::detect::SheetFormat;
use crate::input::sheet::read_sheet;
use crate::model::analysis::AnalysisInput;
use crate::model::matrix::{CriteriaMask, DecisionMatrix, Degeneracy, EngineError, diagnose};
use crate::model::methods::Method;
use crate::model::weights::{
    SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN, WeightingKind, WeightingMethod,
};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid analysis input: {0}")]
    Engine(#[from] EngineError),
}

/// Command line choices. `None` falls back to the config file, then to the
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub config: Option<PathBuf>,
    pub method: Option<Method>,
    pub weighting: Option<WeightingKind>,
    pub custom_weights: Option<Vec<f64>>,
    pub mask: Option<MaskSource>,
}

#[derive(Debug, Clone)]
pub struct LoadContext {
    pub sheet_path: PathBuf,
    pub format: SheetFormat,
    pub defaulted_cells: usize,
    pub input: AnalysisInput,
    pub degeneracies: Vec<Degeneracy>,
}

pub fn run_stage1(sheet_path: &Path, options: &LoadOptions) -> Result<LoadContext, Stage1Error> {
    let config = match &options.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };

    let sheet = read_sheet(sheet_path)?;
    let matrix = DecisionMatrix::new(sheet.rows)?;
    let mask = config.resolve_mask(&sheet.criteria, options.mask)?;
    let weighting = resolve_weighting(&config, options, matrix.n_criteria());
    let method = options.method.or(config.method).unwrap_or_default();

    let degeneracies = diagnose(&matrix);
    for note in &degeneracies {
        warn!(note = %note.describe(), "degenerate input");
    }

    let input = AnalysisInput::new(
        sheet.alternatives,
        sheet.criteria,
        matrix,
        CriteriaMask::new(mask),
        weighting,
        method,
    )?;

    Ok(LoadContext {
        sheet_path: sheet_path.to_path_buf(),
        format: sheet.format,
        defaulted_cells: sheet.defaulted_cells,
        input,
        degeneracies,
    })
}

fn resolve_weighting(
    config: &AnalysisConfig,
    options: &LoadOptions,
    n_criteria: usize,
) -> WeightingMethod {
    let raw = options
        .custom_weights
        .clone()
        .or_else(|| config.custom_weights.clone());
    let kind = options
        .weighting
        .or(config.weighting)
        .unwrap_or(if raw.is_some() {
            WeightingKind::Custom
        } else {
            WeightingKind::Equal
        });

    match kind {
        WeightingKind::Equal => WeightingMethod::Equal,
        WeightingKind::Entropy => WeightingMethod::Entropy,
        WeightingKind::Custom => {
            let raw = raw.unwrap_or_else(|| vec![SLIDER_DEFAULT; n_criteria]);
            let outside = raw
                .iter()
                .filter(|v| **v < SLIDER_MIN || **v > SLIDER_MAX)
                .count();
            if outside > 0 {
                warn!(
                    outside,
                    min = SLIDER_MIN,
                    max = SLIDER_MAX,
                    "custom weights outside slider range"
                );
            }
            WeightingMethod::Custom(raw)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
