pub mod cli;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::model::analysis::{AnalysisInput, AnalysisOutcome, run_analysis};
    pub use crate::model::matrix::{CriteriaMask, DecisionMatrix, EngineError, ErrorKind};
    pub use crate::model::methods::Method;
    pub use crate::model::ranking::{RankedResult, rank};
    pub use crate::model::weights::{WeightVector, WeightingMethod, compute_weights};
}
