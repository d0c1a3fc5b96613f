use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::model::matrix::EngineError;
use crate::model::ranking::{RankedResult, display_scores, rank};
use crate::pipeline::stage1_load::LoadContext;
use crate::pipeline::stage3_scores::ScoresContext;
use crate::report::format_f64;

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ranking error: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPick {
    pub alternative: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankSummary {
    pub winner: Option<TopPick>,
    pub runner_up: Option<TopPick>,
}

#[derive(Debug, Clone)]
pub struct RankContext {
    pub results: Vec<RankedResult>,
    /// 0..=100 display score per entry of `results`.
    pub display: Vec<f64>,
    pub summary: RankSummary,
}

pub fn run_stage4_rank(
    ctx: &LoadContext,
    scores_ctx: &ScoresContext,
    out_dir: &Path,
) -> Result<RankContext, Stage4Error> {
    let results = rank(&scores_ctx.scores, ctx.input.alternatives())?;
    let display = display_scores(&results);

    let out_path = out_dir.join("rankings.tsv");
    let mut writer = std::io::BufWriter::new(std::fs::File::create(&out_path)?);
    writer.write_all(b"rank\talternative\tscore\tnormalized_score\n")?;
    for (result, norm) in results.iter().zip(&display) {
        let line = format!(
            "{}\t{}\t{}\t{:.2}\n",
            result.rank,
            result.name,
            format_f64(result.score),
            norm
        );
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;

    let summary = summarize(&results);
    Ok(RankContext {
        results,
        display,
        summary,
    })
}

pub fn summarize(results: &[RankedResult]) -> RankSummary {
    let pick = |idx: usize| {
        results.get(idx).map(|r| TopPick {
            alternative: r.name.clone(),
            score: r.score,
        })
    };
    RankSummary {
        winner: pick(0),
        runner_up: pick(1),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rank.rs"]
mod tests;
