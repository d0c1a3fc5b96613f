use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::weights::WeightingKind;
use crate::pipeline::stage1_load::LoadContext;
use crate::pipeline::stage2_weights::WeightsContext;
use crate::pipeline::stage3_scores::ScoresContext;
use crate::pipeline::stage4_rank::{RankContext, RankSummary};
use crate::report::json::{ExportDocument, build_export, write_export};
use crate::report::text::render_report;

#[derive(Debug, Error)]
pub enum Stage5Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub export: ExportDocument,
    pub weighting: WeightingKind,
    pub summary: RankSummary,
    pub display: Vec<f64>,
    pub notes: Vec<String>,
}

pub fn run_stage5_report(
    ctx: &LoadContext,
    weights_ctx: &WeightsContext,
    scores_ctx: &ScoresContext,
    rank_ctx: &RankContext,
    out_dir: &Path,
    at: DateTime<Utc>,
) -> Result<FinalReport, Stage5Error> {
    std::fs::create_dir_all(out_dir)?;

    let export = build_export(
        &ctx.input,
        scores_ctx.method,
        &weights_ctx.weights,
        &rank_ctx.results,
        at,
    );
    let report = FinalReport {
        export,
        weighting: weights_ctx.kind,
        summary: rank_ctx.summary.clone(),
        display: rank_ctx.display.clone(),
        notes: ctx.degeneracies.iter().map(|d| d.describe()).collect(),
    };

    write_export(out_dir, &report.export)?;
    std::fs::write(out_dir.join("report.txt"), render_report(&report))?;

    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
