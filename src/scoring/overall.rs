use crate::scoring::category::{compare_category, CategoryComparison};
use crate::scoring::{is_tie, round_to};
use crate::scoring::tables::{ScoringTables, Thresholds};
use crate::types::record::SpecRecord;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallComparison {
    pub better: Option<String>,
    pub worse: Option<String>,
    pub percentage_difference: Option<f64>,
    pub is_equal: bool,
    /// Both averages are reported as 0 whenever the verdict is a tie.
    pub left_average: f64,
    pub right_average: f64,
    pub categories_compared: usize,
}

impl OverallComparison {
    fn tie(categories_compared: usize) -> Self {
        Self {
            better: None,
            worse: None,
            percentage_difference: None,
            is_equal: true,
            left_average: 0.0,
            right_average: 0.0,
            categories_compared,
        }
    }
}

/// Categories to walk: the configured order, or the left record's own order
/// when no list is configured.
pub fn comparison_categories(left: &SpecRecord, tables: &ScoringTables) -> Vec<String> {
    if tables.categories().is_empty() {
        left.category_names().map(str::to_string).collect()
    } else {
        tables.categories().to_vec()
    }
}

pub fn compare_overall(
    left: &SpecRecord,
    right: &SpecRecord,
    tables: &ScoringTables,
) -> OverallComparison {
    let categories = comparison_categories(left, tables)
        .iter()
        .map(|category| compare_category(category, left, right, tables))
        .collect::<Vec<_>>();
    aggregate(&categories, &left.label, &right.label, tables.thresholds())
}

/// Averages the normalized category scores of already compared categories.
/// Tied categories and categories without scores are skipped rather than
/// counted as zero.
pub fn aggregate(
    categories: &[CategoryComparison],
    left_label: &str,
    right_label: &str,
    thresholds: Thresholds,
) -> OverallComparison {
    let mut total_left = 0.0;
    let mut total_right = 0.0;
    let mut compared = 0usize;
    for (l, r) in categories
        .iter()
        .filter(|category| !category.is_equal)
        .filter_map(CategoryComparison::normalized_pair)
    {
        total_left += l;
        total_right += r;
        compared += 1;
    }

    if compared == 0 {
        debug!("no category produced scores, overall tie");
        return OverallComparison::tie(0);
    }

    let left_average = total_left / compared as f64;
    let right_average = total_right / compared as f64;
    if is_tie(left_average, right_average, thresholds.overall_tolerance) {
        debug!(left_average, right_average, "averages within tolerance, overall tie");
        return OverallComparison::tie(compared);
    }

    let (better, worse) = if left_average > right_average {
        (left_label, right_label)
    } else {
        (right_label, left_label)
    };
    let lower = left_average.min(right_average);
    let percentage_difference = if lower > 0.0 {
        Some(round_to((left_average - right_average).abs() / lower * 100.0, 1))
    } else {
        None
    };

    OverallComparison {
        better: Some(better.to_string()),
        worse: Some(worse.to_string()),
        percentage_difference,
        is_equal: false,
        left_average: round_to(left_average, 2),
        right_average: round_to(right_average, 2),
        categories_compared: compared,
    }
}
