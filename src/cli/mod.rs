use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::criteria::MaskSource;
use crate::model::methods::Method;
use crate::model::weights::WeightingKind;
use crate::pipeline::stage1_load::LoadOptions;

mod run;
mod sample;
mod validate;
mod weights;

#[derive(Parser, Debug)]
#[command(name = "kira-mcdm", version, about = "Kira MCDM CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank alternatives and write the analysis artifacts
    Run(run::RunArgs),
    /// Import and check a decision sheet without scoring it
    Validate(validate::ValidateArgs),
    /// Print criterion weights for a decision sheet
    Weights(weights::WeightsArgs),
    /// Write the bundled sample dataset
    Sample(sample::SampleArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Run(args) => run::handle(args),
            Command::Validate(args) => validate::handle(args),
            Command::Weights(args) => weights::handle(args),
            Command::Sample(args) => sample::handle(args),
        }
    }
}

/// Analysis settings shared by the subcommands that read a sheet.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct AnalysisArgs {
    /// Optional analysis TOML (method, weighting, custom_weights, mask, [beneficial])
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scoring method
    #[arg(long, value_enum)]
    pub(crate) method: Option<MethodArg>,

    /// Weighting method
    #[arg(long, value_enum)]
    pub(crate) weighting: Option<WeightingArg>,

    /// Raw custom weights, one per criterion (comma separated)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub(crate) weights: Option<Vec<f64>>,

    /// Default benefit/cost assignment for criteria
    #[arg(long, value_enum)]
    pub(crate) mask: Option<MaskArg>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodArg {
    Topsis,
    Edas,
    Wsm,
    Wpm,
}

impl From<MethodArg> for Method {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Topsis => Method::Topsis,
            MethodArg::Edas => Method::Edas,
            MethodArg::Wsm => Method::Wsm,
            MethodArg::Wpm => Method::Wpm,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightingArg {
    Equal,
    Custom,
    Entropy,
}

impl From<WeightingArg> for WeightingKind {
    fn from(value: WeightingArg) -> Self {
        match value {
            WeightingArg::Equal => WeightingKind::Equal,
            WeightingArg::Custom => WeightingKind::Custom,
            WeightingArg::Entropy => WeightingKind::Entropy,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskArg {
    Import,
    Keywords,
}

impl From<MaskArg> for MaskSource {
    fn from(value: MaskArg) -> Self {
        match value {
            MaskArg::Import => MaskSource::Import,
            MaskArg::Keywords => MaskSource::Keywords,
        }
    }
}

impl From<AnalysisArgs> for LoadOptions {
    fn from(value: AnalysisArgs) -> Self {
        LoadOptions {
            config: value.config,
            method: value.method.map(Into::into),
            weighting: value.weighting.map(Into::into),
            custom_weights: value.weights,
            mask: value.mask.map(Into::into),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
