use super::*;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn ranks_by_descending_score() {
    let results = rank(&[0.2, 0.9, 0.5], &names(&["a", "b", "c"])).expect("rank");
    let order: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["b", "c", "a"]);
    assert_eq!(
        results.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(ranks_by_index(&results), vec![3, 1, 2]);
}

#[test]
fn ties_keep_input_order() {
    let results = rank(&[0.5, 0.5, 0.7, 0.5], &names(&["a", "b", "c", "d"])).expect("rank");
    let order: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "b", "d"]);
    assert_eq!(ranks_by_index(&results), vec![2, 3, 1, 4]);
}

#[test]
fn all_equal_scores_rank_in_input_order() {
    let results = rank(&[0.0; 3], &names(&["x", "y", "z"])).expect("rank");
    assert_eq!(ranks_by_index(&results), vec![1, 2, 3]);
}

#[test]
fn ranks_form_a_permutation() {
    let scores = [0.3, 0.1, 0.9, 0.3, 0.0, 0.9, 0.45];
    let labels: Vec<String> = (0..scores.len()).map(|i| format!("A{i}")).collect();
    let results = rank(&scores, &labels).expect("rank");
    let mut ranks = ranks_by_index(&results);
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=scores.len()).collect::<Vec<_>>());
    for r in &results {
        assert_eq!(labels[r.index], r.name);
        assert_eq!(scores[r.index], r.score);
    }
}

#[test]
fn rejects_name_count_mismatch() {
    assert_eq!(
        rank(&[0.1, 0.2], &names(&["only"])).unwrap_err(),
        EngineError::LengthMismatch {
            what: "alternative names",
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn display_scores_span_zero_to_hundred() {
    let results = rank(&[0.25, 0.75, 0.5], &names(&["a", "b", "c"])).expect("rank");
    let display = display_scores(&results);
    assert_eq!(display.len(), 3);
    assert!((display[0] - 100.0).abs() < 1e-9);
    assert!((display[1] - 50.0).abs() < 1e-9);
    assert!(display[2].abs() < 1e-9);
}

#[test]
fn display_scores_flat_range() {
    let results = rank(&[0.4, 0.4], &names(&["a", "b"])).expect("rank");
    assert_eq!(display_scores(&results), vec![0.0, 0.0]);
    assert!(display_scores(&[]).is_empty());
}

#[test]
fn serializes_with_alternative_key() {
    let results = rank(&[0.5], &names(&["Mix A"])).expect("rank");
    let value = serde_json::to_value(&results[0]).expect("json");
    assert_eq!(
        value,
        serde_json::json!({"alternative": "Mix A", "score": 0.5, "rank": 1})
    );
}
