use super::*;
use std::path::PathBuf;

use crate::input::detect::SheetFormat;
use crate::model::analysis::AnalysisInput;
use crate::model::matrix::{CriteriaMask, DecisionMatrix};
use crate::model::methods::Method;
use crate::model::weights::WeightingMethod;
use tempfile::tempdir;

fn context() -> LoadContext {
    let input = AnalysisInput::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec!["CS".into(), "FS".into()],
        DecisionMatrix::new(vec![vec![1.0, 1.0], vec![3.0, 3.0], vec![2.0, 2.0]])
            .expect("matrix"),
        CriteriaMask::new(vec![true, true]),
        WeightingMethod::Equal,
        Method::Wsm,
    )
    .expect("input");
    LoadContext {
        sheet_path: PathBuf::from("decision.csv"),
        format: SheetFormat::Csv,
        defaulted_cells: 0,
        input,
        degeneracies: Vec::new(),
    }
}

fn scores(values: Vec<f64>) -> ScoresContext {
    ScoresContext {
        method: Method::Wsm,
        scores: values,
    }
}

#[test]
fn writes_rankings_tsv() {
    let dir = tempdir().expect("tempdir");
    let out = run_stage4_rank(&context(), &scores(vec![0.25, 0.75, 0.5]), dir.path())
        .expect("stage4");
    assert_eq!(out.display, vec![100.0, 50.0, 0.0]);

    let text = std::fs::read_to_string(dir.path().join("rankings.tsv")).expect("read");
    assert_eq!(
        text,
        "rank\talternative\tscore\tnormalized_score\n\
         1\tB\t0.750000\t100.00\n\
         2\tC\t0.500000\t50.00\n\
         3\tA\t0.250000\t0.00\n"
    );
}

#[test]
fn summary_names_winner_and_runner_up() {
    let dir = tempdir().expect("tempdir");
    let out = run_stage4_rank(&context(), &scores(vec![0.25, 0.75, 0.5]), dir.path())
        .expect("stage4");
    assert_eq!(
        out.summary,
        RankSummary {
            winner: Some(TopPick {
                alternative: "B".to_string(),
                score: 0.75
            }),
            runner_up: Some(TopPick {
                alternative: "C".to_string(),
                score: 0.5
            }),
        }
    );
}

#[test]
fn summary_of_short_lists() {
    assert_eq!(
        summarize(&[]),
        RankSummary {
            winner: None,
            runner_up: None
        }
    );
    let one = rank(&[0.3], &["Only".to_string()]).expect("rank");
    let summary = summarize(&one);
    assert_eq!(summary.winner.map(|w| w.alternative), Some("Only".to_string()));
    assert!(summary.runner_up.is_none());
}

#[test]
fn score_count_must_match_alternatives() {
    let dir = tempdir().expect("tempdir");
    assert!(matches!(
        run_stage4_rank(&context(), &scores(vec![0.1, 0.2]), dir.path()),
        Err(Stage4Error::Engine(_))
    ));
}
