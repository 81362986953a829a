use crate::types::key::AttributeKey;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const MAX_SCORE: f64 = 10.0;
/// Score assigned when a range collapses to a single point.
pub const DEGENERATE_RANGE_SCORE: f64 = 5.0;

/// Normalization range of one scorable sub-attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeRange {
    pub min: f64,
    pub max: f64,
    pub lower_is_better: bool,
}

impl AttributeRange {
    pub fn new(min: f64, max: f64, lower_is_better: bool) -> Self {
        Self {
            min,
            max,
            lower_is_better,
        }
    }

    pub fn higher_is_better(min: f64, max: f64) -> Self {
        Self::new(min, max, false)
    }

    pub fn lower_is_better(min: f64, max: f64) -> Self {
        Self::new(min, max, true)
    }

    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Clamped position of `value` inside the range, in percent, ignoring polarity.
    pub fn position(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 50.0;
        }
        // Halved operands keep the width finite for ranges spanning most of f64.
        let clamped = value.clamp(self.min, self.max);
        (clamped / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0) * 100.0
    }

    /// Maps `value` onto [0, 10], inverted for lower-is-better ranges.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_RANGE_SCORE;
        }
        let score = self.position(value) / 100.0 * MAX_SCORE;
        if self.lower_is_better {
            MAX_SCORE - score
        } else {
            score
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// Normalized category scores closer than this are a tie.
    pub category_tolerance: f64,
    /// Overall averages closer than this are a tie.
    pub overall_tolerance: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            category_tolerance: 0.1,
            overall_tolerance: 0.01,
        }
    }
}

/// Immutable lookup tables every scoring function receives explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringTables {
    ranges: HashMap<AttributeKey, AttributeRange>,
    neutral: HashSet<AttributeKey>,
    categories: Vec<String>,
    thresholds: Thresholds,
}

impl ScoringTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, key: AttributeKey, range: AttributeRange) -> Self {
        self.ranges.insert(key, range);
        self
    }

    pub fn with_neutral(mut self, key: AttributeKey) -> Self {
        self.neutral.insert(key);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn range(&self, key: &AttributeKey) -> Option<&AttributeRange> {
        self.ranges.get(key)
    }

    pub fn is_neutral(&self, key: &AttributeKey) -> bool {
        self.neutral.contains(key)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn neutral_count(&self) -> usize {
        self.neutral.len()
    }

    /// Range keys in a stable order, for listings.
    pub fn sorted_ranges(&self) -> Vec<(&AttributeKey, &AttributeRange)> {
        let mut ranges = self.ranges.iter().collect::<Vec<_>>();
        ranges.sort_by(|a, b| a.0.cmp(b.0));
        ranges
    }
}
