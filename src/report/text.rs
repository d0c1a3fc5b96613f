use crate::pipeline::stage5_report::FinalReport;

pub fn render_report(report: &FinalReport) -> String {
    let doc = &report.export;
    let mut out = String::new();
    out.push_str("Kira MCDM Report\n");
    out.push_str("================\n\n");
    out.push_str(&format!("Analysis completed using {} method\n", doc.method));
    out.push_str(&format!("Weighting: {}\n", report.weighting));
    out.push_str(&format!(
        "Alternatives: {}, criteria: {}\n\n",
        doc.alternatives.len(),
        doc.criteria.len()
    ));

    out.push_str("Top recommendations:\n");
    if let Some(w) = &report.summary.winner {
        out.push_str(&format!("- Winner: {} (score {:.4})\n", w.alternative, w.score));
    }
    if let Some(r) = &report.summary.runner_up {
        out.push_str(&format!("- Runner-up: {} (score {:.4})\n", r.alternative, r.score));
    }
    out.push('\n');

    out.push_str("Criteria weights:\n");
    for ((name, w), beneficial) in doc
        .criteria
        .iter()
        .zip(&doc.weights)
        .zip(&doc.beneficial_mask)
    {
        let direction = if *beneficial {
            "higher is better"
        } else {
            "lower is better"
        };
        out.push_str(&format!("- {}: {:.4} ({})\n", name, w, direction));
    }
    out.push('\n');

    let name_width = doc
        .results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Alternative".len());

    out.push_str("Rankings:\n");
    out.push_str(&format!(
        "{:>4}  {:<width$}  {:>10}\n",
        "Rank",
        "Alternative",
        "Score",
        width = name_width
    ));
    for result in &doc.results {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>10.4}\n",
            result.rank,
            result.name,
            result.score,
            width = name_width
        ));
    }
    out.push('\n');

    out.push_str("Scores:\n");
    out.push_str(&format!(
        "{:<width$}  {:>11}  {:>16}\n",
        "Alternative",
        "Final score",
        "Normalized score",
        width = name_width
    ));
    for (result, norm) in doc.results.iter().zip(&report.display) {
        out.push_str(&format!(
            "{:<width$}  {:>11.4}  {:>15.2}%\n",
            result.name,
            result.score,
            norm,
            width = name_width
        ));
    }
    out.push('\n');

    if !report.notes.is_empty() {
        out.push_str("Degenerate inputs (fallbacks applied):\n");
        for note in &report.notes {
            out.push_str(&format!("- {}\n", note));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
