use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::AnalysisArgs;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_weights::run_stage2_weights;
use crate::pipeline::stage3_scores::run_stage3_scores;
use crate::pipeline::stage4_rank::run_stage4_rank;
use crate::pipeline::stage5_report::run_stage5_report;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Decision sheet (CSV or TSV, optionally gzipped)
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub(crate) out: PathBuf,

    #[command(flatten)]
    pub(crate) analysis: AnalysisArgs,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;
    let options = args.analysis.into();

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.input, &options)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        format = %ctx.format,
        alternatives = ctx.input.alternatives().len(),
        criteria = ctx.input.criteria().len(),
        degenerate = ctx.degeneracies.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_weights", "starting stage");
    let weights_ctx = run_stage2_weights(&ctx, &args.out)?;
    info!(
        stage = "stage2_weights",
        elapsed_ms = start.elapsed().as_millis(),
        weighting = %weights_ctx.kind,
        sum = weights_ctx.weights.sum(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_scores", "starting stage");
    let scores_ctx = run_stage3_scores(&ctx, &weights_ctx, &args.out)?;
    info!(
        stage = "stage3_scores",
        elapsed_ms = start.elapsed().as_millis(),
        method = %scores_ctx.method,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage4_rank", "starting stage");
    let rank_ctx = run_stage4_rank(&ctx, &scores_ctx, &args.out)?;
    info!(
        stage = "stage4_rank",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    if let Some(winner) = &rank_ctx.summary.winner {
        info!(
            alternative = winner.alternative.as_str(),
            score = winner.score,
            "top ranked alternative"
        );
    }

    let start = Instant::now();
    info!(stage = "stage5_report", "starting stage");
    run_stage5_report(
        &ctx,
        &weights_ctx,
        &scores_ctx,
        &rank_ctx,
        &args.out,
        chrono::Utc::now(),
    )?;
    info!(
        stage = "stage5_report",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}
