use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::model::matrix::EngineError;
use crate::model::methods::Method;
use crate::pipeline::stage1_load::LoadContext;
use crate::pipeline::stage2_weights::WeightsContext;
use crate::report::format_f64;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scoring error: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone)]
pub struct ScoresContext {
    pub method: Method,
    pub scores: Vec<f64>,
}

pub fn run_stage3_scores(
    ctx: &LoadContext,
    weights_ctx: &WeightsContext,
    out_dir: &Path,
) -> Result<ScoresContext, Stage3Error> {
    let input = &ctx.input;
    let method = input.method();
    let scores = method.score(input.matrix(), &weights_ctx.weights, input.mask())?;

    let out_path = out_dir.join("scores.tsv");
    let mut writer = std::io::BufWriter::new(std::fs::File::create(&out_path)?);
    writer.write_all(b"alternative\tscore\n")?;
    for (name, score) in input.alternatives().iter().zip(&scores) {
        let line = format!("{}\t{}\n", name, format_f64(*score));
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;

    Ok(ScoresContext { method, scores })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scores.rs"]
mod tests;
