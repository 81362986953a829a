use crate::scoring::range::{score_pair, SubScore};
use crate::scoring::{is_tie, round_to};
use crate::scoring::tables::{ScoringTables, MAX_SCORE};
use crate::types::key::AttributeKey;
use crate::types::record::SpecRecord;
use crate::types::value::AttributeValue;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordScore {
    pub label: String,
    /// Category score as a percentage in [0, 100].
    pub normalized: f64,
    /// Plain sum of sub-attribute scores.
    pub raw_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubAttributeScore {
    pub key: AttributeKey,
    pub left: AttributeValue,
    pub right: AttributeValue,
    pub score: SubScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: String,
    pub better: Option<String>,
    pub worse: Option<String>,
    /// `None` on ties and when the weaker record scored zero.
    pub percentage_difference: Option<f64>,
    pub is_equal: bool,
    /// Left then right; `None` when nothing in the category was scorable.
    pub scores: Option<[RecordScore; 2]>,
    pub metrics_counted: usize,
    pub breakdown: Vec<SubAttributeScore>,
}

impl CategoryComparison {
    pub fn normalized_pair(&self) -> Option<(f64, f64)> {
        self.scores
            .as_ref()
            .map(|[left, right]| (left.normalized, right.normalized))
    }
}

/// Scores every sub-attribute of `category` found in the left record and
/// decides which record wins the category.
pub fn compare_category(
    category: &str,
    left: &SpecRecord,
    right: &SpecRecord,
    tables: &ScoringTables,
) -> CategoryComparison {
    let mut total_left = 0.0;
    let mut total_right = 0.0;
    let mut metrics = 0usize;
    let mut breakdown = Vec::new();

    if let Some(values) = left.category(category) {
        for (sub_attribute, left_value) in values {
            let right_value = right
                .value(category, sub_attribute)
                .cloned()
                .unwrap_or(AttributeValue::Unknown);
            let key = AttributeKey::new(category, sub_attribute.as_str());
            let score = score_pair(&key, left_value, &right_value, tables);
            let (l, r) = score.pair();
            total_left += l;
            total_right += r;
            if score.counts() {
                metrics += 1;
            }
            breakdown.push(SubAttributeScore {
                key,
                left: left_value.clone(),
                right: right_value,
                score,
            });
        }
    } else {
        debug!(category, label = %left.label, "category missing from left record");
    }

    let mut comparison = CategoryComparison {
        category: category.to_string(),
        better: None,
        worse: None,
        percentage_difference: None,
        is_equal: true,
        scores: None,
        metrics_counted: metrics,
        breakdown,
    };

    if metrics == 0 {
        debug!(category, "no scorable metrics, treating as equal");
        return comparison;
    }

    let normalize = |total: f64| (total * 100.0) / (metrics as f64 * MAX_SCORE);
    let left_normalized = normalize(total_left);
    let right_normalized = normalize(total_right);
    comparison.scores = Some([
        RecordScore {
            label: left.label.clone(),
            normalized: left_normalized,
            raw_total: total_left,
        },
        RecordScore {
            label: right.label.clone(),
            normalized: right_normalized,
            raw_total: total_right,
        },
    ]);

    if is_tie(
        left_normalized,
        right_normalized,
        tables.thresholds().category_tolerance,
    ) {
        debug!(category, left_normalized, right_normalized, "category tied");
        return comparison;
    }

    let (better, worse, high, low) = if left_normalized > right_normalized {
        (left, right, left_normalized, right_normalized)
    } else {
        (right, left, right_normalized, left_normalized)
    };
    comparison.is_equal = false;
    comparison.better = Some(better.label.clone());
    comparison.worse = Some(worse.label.clone());
    comparison.percentage_difference = if low > 0.0 {
        Some(round_to((high / low - 1.0) * 100.0, 2))
    } else {
        debug!(category, "weaker record scored zero, difference undefined");
        None
    };
    comparison
}
