use std::path::PathBuf;

use clap::Args;
use tracing::info;

pub const SAMPLE_SHEET_NAME: &str = "concrete_mix.csv";
pub const SAMPLE_CONFIG_NAME: &str = "concrete_mix.toml";

const SAMPLE_SHEET: &str = include_str!("../../assets/samples/concrete_mix.csv");
const SAMPLE_CONFIG: &str = include_str!("../../assets/samples/concrete_mix.toml");

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: SampleArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;
    let sheet = args.out.join(SAMPLE_SHEET_NAME);
    let config = args.out.join(SAMPLE_CONFIG_NAME);
    std::fs::write(&sheet, SAMPLE_SHEET)?;
    std::fs::write(&config, SAMPLE_CONFIG)?;
    info!(
        sheet = %sheet.to_string_lossy(),
        config = %config.to_string_lossy(),
        "sample dataset written"
    );
    Ok(())
}
