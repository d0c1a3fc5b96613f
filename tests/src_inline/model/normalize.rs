use super::*;

fn assert_rows(a: &[Vec<f64>], b: &[Vec<f64>]) {
    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.iter().zip(b) {
        for (x, y) in ra.iter().zip(rb) {
            assert!((x - y).abs() < 1e-12, "{:?} != {:?}", a, b);
        }
    }
}

#[test]
fn vector_normalization_uses_column_norm() {
    let m = DecisionMatrix::new(vec![vec![3.0, 0.0], vec![4.0, 0.0]]).expect("matrix");
    assert_rows(&vector_normalize(&m), &[vec![0.6, 0.0], vec![0.8, 0.0]]);
}

#[test]
fn min_max_orients_by_mask() {
    let m = DecisionMatrix::new(vec![
        vec![1.0, 10.0],
        vec![3.0, 20.0],
        vec![5.0, 30.0],
    ])
    .expect("matrix");
    let mask = CriteriaMask::new(vec![true, false]);
    assert_rows(
        &min_max_normalize(&m, &mask, 0.0),
        &[vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]],
    );
    assert_rows(
        &min_max_normalize(&m, &mask, WPM_OFFSET),
        &[vec![0.01, 1.01], vec![0.51, 0.51], vec![1.01, 0.01]],
    );
}

#[test]
fn min_max_zero_range_counts_as_one() {
    let m = DecisionMatrix::new(vec![vec![2.0, 7.0]]).expect("matrix");
    let mask = CriteriaMask::new(vec![true, false]);
    assert_rows(&min_max_normalize(&m, &mask, 0.0), &[vec![0.0, 0.0]]);
    assert_rows(
        &min_max_normalize(&m, &mask, WPM_OFFSET),
        &[vec![0.01, 0.01]],
    );
}

#[test]
fn min_max_handles_full_f64_span() {
    let m = DecisionMatrix::new(vec![vec![-f64::MAX, 1.0], vec![f64::MAX, 2.0], vec![0.0, 3.0]])
        .expect("matrix");
    let mask = CriteriaMask::new(vec![true, false]);
    let rows = min_max_normalize(&m, &mask, 0.0);
    assert!(rows.iter().flatten().all(|v| v.is_finite()));
    assert_rows(&rows, &[vec![0.0, 1.0], vec![1.0, 0.5], vec![0.5, 0.0]]);
}

#[test]
fn vector_normalization_keeps_huge_columns() {
    let m = DecisionMatrix::new(vec![vec![3e200, 1e-200], vec![4e200, 0.0]]).expect("matrix");
    assert_rows(&vector_normalize(&m), &[vec![0.6, 1.0], vec![0.8, 0.0]]);
}

#[test]
fn vector_normalization_matches_at_any_scale() {
    let small = DecisionMatrix::new(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).expect("matrix");
    let huge = DecisionMatrix::new(vec![vec![2e200, 1e200], vec![1e200, 2e200]]).expect("matrix");
    assert_rows(&vector_normalize(&huge), &vector_normalize(&small));
}
