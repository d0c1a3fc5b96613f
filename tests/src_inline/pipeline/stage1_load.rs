use super::*;
use crate::model::matrix::ErrorKind;
use tempfile::{TempDir, tempdir};

const SHEET: &str = "Mix,CS,FS,STS,Porosity\nA,40,5,3.1,7\nB,30,4,2.8,8\nC,35,6,3.4,6\n";

fn write_sheet(name: &str, text: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("write sheet");
    (dir, path)
}

#[test]
fn loads_sheet_with_defaults() {
    let (_dir, path) = write_sheet("decision.csv", SHEET);
    let ctx = run_stage1(&path, &LoadOptions::default()).expect("stage1");
    assert_eq!(ctx.format, SheetFormat::Csv);
    assert_eq!(ctx.defaulted_cells, 0);
    assert_eq!(ctx.input.alternatives(), &["A", "B", "C"]);
    assert_eq!(ctx.input.criteria(), &["CS", "FS", "STS", "Porosity"]);
    assert_eq!(ctx.input.mask().as_slice(), &[true, true, true, false]);
    assert_eq!(ctx.input.method(), Method::Topsis);
    assert_eq!(ctx.input.weighting(), &WeightingMethod::Equal);
    assert!(ctx.degeneracies.is_empty());
}

#[test]
fn command_line_beats_config() {
    let (dir, path) = write_sheet("decision.csv", SHEET);
    let config = dir.path().join("analysis.toml");
    std::fs::write(
        &config,
        "method = \"wpm\"\nweighting = \"entropy\"\n\n[beneficial]\nPorosity = true\n",
    )
    .expect("write config");

    let options = LoadOptions {
        config: Some(config),
        method: Some(Method::Edas),
        ..LoadOptions::default()
    };
    let ctx = run_stage1(&path, &options).expect("stage1");
    assert_eq!(ctx.input.method(), Method::Edas);
    assert_eq!(ctx.input.weighting(), &WeightingMethod::Entropy);
    assert_eq!(ctx.input.mask().as_slice(), &[true, true, true, true]);
}

#[test]
fn raw_weights_imply_custom_weighting() {
    let (_dir, path) = write_sheet("decision.csv", SHEET);
    let options = LoadOptions {
        custom_weights: Some(vec![2.0, 1.0, 1.0, 0.5]),
        ..LoadOptions::default()
    };
    let ctx = run_stage1(&path, &options).expect("stage1");
    assert_eq!(
        ctx.input.weighting(),
        &WeightingMethod::Custom(vec![2.0, 1.0, 1.0, 0.5])
    );
}

#[test]
fn custom_without_values_uses_slider_default() {
    let (_dir, path) = write_sheet("decision.csv", SHEET);
    let options = LoadOptions {
        weighting: Some(WeightingKind::Custom),
        ..LoadOptions::default()
    };
    let ctx = run_stage1(&path, &options).expect("stage1");
    assert_eq!(
        ctx.input.weighting(),
        &WeightingMethod::Custom(vec![SLIDER_DEFAULT; 4])
    );
}

#[test]
fn explicit_kind_ignores_raw_weights() {
    let (_dir, path) = write_sheet("decision.csv", SHEET);
    let options = LoadOptions {
        weighting: Some(WeightingKind::Equal),
        custom_weights: Some(vec![1.0, 2.0, 3.0, 4.0]),
        ..LoadOptions::default()
    };
    let ctx = run_stage1(&path, &options).expect("stage1");
    assert_eq!(ctx.input.weighting(), &WeightingMethod::Equal);
}

#[test]
fn wrong_weight_count_is_rejected() {
    let (_dir, path) = write_sheet("decision.csv", SHEET);
    let options = LoadOptions {
        custom_weights: Some(vec![1.0, 2.0]),
        ..LoadOptions::default()
    };
    match run_stage1(&path, &options) {
        Err(Stage1Error::Engine(err)) => assert_eq!(err.kind(), ErrorKind::InvalidShape),
        other => panic!("expected engine error, got {other:?}"),
    }
}

#[test]
fn single_alternative_is_rejected() {
    let (_dir, path) = write_sheet("decision.csv", "Mix,CS,FS\nA,1,2\n");
    match run_stage1(&path, &LoadOptions::default()) {
        Err(Stage1Error::Engine(err)) => assert_eq!(err.kind(), ErrorKind::InvalidInput),
        other => panic!("expected engine error, got {other:?}"),
    }
}

#[test]
fn reports_degenerate_columns() {
    let (_dir, path) = write_sheet("decision.tsv", "Mix\tCS\tFS\tWA\nA\t10\t0\t1\nB\t10\t0\t2\n");
    let ctx = run_stage1(&path, &LoadOptions::default()).expect("stage1");
    assert_eq!(ctx.format, SheetFormat::Tsv);
    assert_eq!(
        ctx.degeneracies,
        vec![
            Degeneracy::ConstantColumn {
                criterion: 0,
                value: 10.0
            },
            Degeneracy::ZeroSumColumn { criterion: 1 },
        ]
    );
}

#[test]
fn unknown_override_fails() {
    let (dir, path) = write_sheet("decision.csv", SHEET);
    let config = dir.path().join("analysis.toml");
    std::fs::write(&config, "[beneficial]\nSlump = false\n").expect("write config");
    let options = LoadOptions {
        config: Some(config),
        ..LoadOptions::default()
    };
    assert!(matches!(
        run_stage1(&path, &options),
        Err(Stage1Error::Config(ConfigError::UnknownCriterion(_)))
    ));
}

#[test]
fn missing_sheet_fails() {
    let dir = tempdir().expect("tempdir");
    assert!(matches!(
        run_stage1(&dir.path().join("absent.csv"), &LoadOptions::default()),
        Err(Stage1Error::Input(InputError::MissingFile(_)))
    ));
}
