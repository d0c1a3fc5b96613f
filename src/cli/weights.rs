use std::path::PathBuf;

use clap::Args;

use crate::cli::AnalysisArgs;
use crate::model::weights::compute_weights;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_weights::weights_tsv;

#[derive(Args, Debug)]
pub struct WeightsArgs {
    /// Decision sheet (CSV or TSV, optionally gzipped)
    #[arg(long)]
    input: PathBuf,

    #[command(flatten)]
    analysis: AnalysisArgs,
}

pub fn handle(args: WeightsArgs) -> anyhow::Result<()> {
    let ctx = run_stage1(&args.input, &args.analysis.into())?;
    let input = &ctx.input;
    let weights = compute_weights(input.matrix(), input.weighting())?;
    print!(
        "{}",
        weights_tsv(input.criteria(), input.mask().as_slice(), &weights)
    );
    Ok(())
}
