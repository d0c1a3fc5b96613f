use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::model::matrix::EngineError;
use crate::model::weights::{WeightVector, WeightingKind, compute_weights};
use crate::pipeline::stage1_load::LoadContext;
use crate::report::format_f64;

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("weighting error: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone)]
pub struct WeightsContext {
    pub kind: WeightingKind,
    pub weights: WeightVector,
}

pub fn run_stage2_weights(ctx: &LoadContext, out_dir: &Path) -> Result<WeightsContext, Stage2Error> {
    let input = &ctx.input;
    let weights = compute_weights(input.matrix(), input.weighting())?;

    let out_path = out_dir.join("weights.tsv");
    let mut writer = std::io::BufWriter::new(std::fs::File::create(&out_path)?);
    writer.write_all(weights_tsv(input.criteria(), input.mask().as_slice(), &weights).as_bytes())?;
    writer.flush()?;

    Ok(WeightsContext {
        kind: input.weighting().kind(),
        weights,
    })
}

pub fn weights_tsv(criteria: &[String], mask: &[bool], weights: &WeightVector) -> String {
    let mut buf = String::new();
    buf.push_str("criterion\ttype\tweight\n");
    for ((name, beneficial), w) in criteria.iter().zip(mask).zip(weights.as_slice()) {
        buf.push_str(name);
        buf.push('\t');
        buf.push_str(if *beneficial { "benefit" } else { "cost" });
        buf.push('\t');
        buf.push_str(&format_f64(*w));
        buf.push('\n');
    }
    buf
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_weights.rs"]
mod tests;
