use crate::scoring::category::CategoryComparison;
use crate::scoring::range::SubScore;
use crate::types::report::ComparisonReport;

pub fn to_markdown(report: &ComparisonReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Comparison: {} vs {}\n\n",
        report.left, report.right
    ));

    output.push_str("## Overall\n\n");
    let overall = &report.overall;
    match (&overall.better, overall.is_equal) {
        (Some(better), false) => output.push_str(&format!(
            "- verdict: {} is better ({})\n",
            better,
            difference(overall.percentage_difference, 1)
        )),
        _ => output.push_str("- verdict: equal\n"),
    }
    output.push_str(&format!(
        "- averages: {} {:.2} / {} {:.2}\n- categories compared: {}\n",
        report.left,
        overall.left_average,
        report.right,
        overall.right_average,
        overall.categories_compared
    ));
    if report.left != report.right {
        output.push_str(&format!(
            "- categories won: {} {} / {} {}\n",
            report.left,
            report.wins_for(&report.left),
            report.right,
            report.wins_for(&report.right)
        ));
    }
    output.push('\n');

    output.push_str("## Categories\n\n");
    if report.categories.is_empty() {
        output.push_str("- none\n");
    }
    for category in &report.categories {
        push_category(&mut output, category);
    }

    output
}

fn push_category(output: &mut String, category: &CategoryComparison) {
    output.push_str(&format!("### {}\n\n", category.category));
    match (&category.better, &category.scores) {
        (Some(better), Some([left, right])) => output.push_str(&format!(
            "{} is better ({}); {:.2}% vs {:.2}%\n\n",
            better,
            difference(category.percentage_difference, 2),
            left.normalized,
            right.normalized
        )),
        (None, Some([left, right])) => output.push_str(&format!(
            "equal; {:.2}% vs {:.2}%\n\n",
            left.normalized, right.normalized
        )),
        _ => output.push_str("equal; nothing scorable\n\n"),
    }

    if category.breakdown.is_empty() {
        return;
    }
    output.push_str("| attribute | left | right | score |\n|---|---|---|---|\n");
    for entry in &category.breakdown {
        let score = match entry.score {
            SubScore::Scored { left, right } => format!("{left:.1} / {right:.1}"),
            SubScore::Neutral => "neutral".to_string(),
            SubScore::Excluded => "not scored".to_string(),
            SubScore::Unranged => "no range (0 / 0)".to_string(),
            SubScore::Mismatched => "mixed kinds (0 / 0)".to_string(),
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            entry.key.sub_attribute,
            entry.left.display(),
            entry.right.display(),
            score
        ));
    }
    output.push('\n');
}

fn difference(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("+{value:.decimals$}%"),
        None => "difference undefined".to_string(),
    }
}
