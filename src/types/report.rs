use crate::scoring::category::CategoryComparison;
use crate::scoring::gradient::AttributeStyle;
use crate::scoring::overall::OverallComparison;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub version: String,
    pub generated_at: String,
    pub left: String,
    pub right: String,
    pub overall: OverallComparison,
    pub categories: Vec<CategoryComparison>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<AttributeStyle>,
}

impl ComparisonReport {
    pub fn new(
        left: String,
        right: String,
        categories: Vec<CategoryComparison>,
        overall: OverallComparison,
        styles: Vec<AttributeStyle>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            left,
            right,
            overall,
            categories,
            styles,
        }
    }

    /// Number of categories won by the record labelled `label`.
    pub fn wins_for(&self, label: &str) -> usize {
        self.categories
            .iter()
            .filter(|category| category.better.as_deref() == Some(label))
            .count()
    }
}
