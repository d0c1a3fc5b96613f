use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::AnalysisArgs;
use crate::pipeline::stage1_load::{LoadContext, run_stage1};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Decision sheet (CSV or TSV, optionally gzipped)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    analysis: AnalysisArgs,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.input, &args.analysis.into())?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    write_validate(&args.out, &ctx)?;
    Ok(())
}

fn write_validate(out_dir: &Path, ctx: &LoadContext) -> anyhow::Result<()> {
    std::fs::write(out_dir.join("validate.tsv"), validate_tsv(ctx))?;
    Ok(())
}

pub(crate) fn validate_tsv(ctx: &LoadContext) -> String {
    let input = &ctx.input;
    let mask: Vec<&str> = input
        .mask()
        .as_slice()
        .iter()
        .map(|b| if *b { "benefit" } else { "cost" })
        .collect();

    let mut lines = Vec::new();
    lines.push(("sheet_file", ctx.sheet_path.to_string_lossy().to_string()));
    lines.push(("format", ctx.format.to_string()));
    lines.push(("n_alternatives", input.alternatives().len().to_string()));
    lines.push(("n_criteria", input.criteria().len().to_string()));
    lines.push(("defaulted_cells", ctx.defaulted_cells.to_string()));
    lines.push(("method", input.method().to_string()));
    lines.push(("weighting", input.weighting().kind().to_string()));
    lines.push(("criteria_types", mask.join(",")));
    lines.push(("degenerate_notes", ctx.degeneracies.len().to_string()));

    let mut buf = String::new();
    for (k, v) in lines {
        buf.push_str(k);
        buf.push('\t');
        buf.push_str(&v);
        buf.push('\n');
    }
    for note in &ctx.degeneracies {
        buf.push_str("note\t");
        buf.push_str(&note.describe());
        buf.push('\n');
    }
    buf
}
