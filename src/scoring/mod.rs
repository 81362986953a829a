pub mod category;
pub mod gradient;
pub mod overall;
pub mod range;
pub mod tables;

use crate::types::record::SpecRecord;
use crate::types::report::ComparisonReport;
use category::compare_category;
use gradient::category_styles;
use overall::{aggregate, comparison_categories};
use tables::ScoringTables;
use tracing::info;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Two scores tie when they are identical or closer than `tolerance`.
/// A zero tolerance therefore only ties exact matches.
pub(crate) fn is_tie(a: f64, b: f64, tolerance: f64) -> bool {
    let gap = (a - b).abs();
    gap == 0.0 || gap < tolerance
}

/// Runs every category comparison, the overall aggregate and, when asked,
/// the per-value gradient styles for two records.
pub fn compare(
    left: &SpecRecord,
    right: &SpecRecord,
    tables: &ScoringTables,
    include_styles: bool,
) -> ComparisonReport {
    let names = comparison_categories(left, tables);
    let categories = names
        .iter()
        .map(|name| compare_category(name, left, right, tables))
        .collect::<Vec<_>>();
    let overall = aggregate(&categories, &left.label, &right.label, tables.thresholds());

    let styles = if include_styles {
        names
            .iter()
            .flat_map(|name| category_styles(name, left, right, tables))
            .collect()
    } else {
        Vec::new()
    };

    info!(
        left = %left.label,
        right = %right.label,
        categories = categories.len(),
        compared = overall.categories_compared,
        equal = overall.is_equal,
        "comparison finished"
    );

    ComparisonReport::new(left.label.clone(), right.label.clone(), categories, overall, styles)
}
