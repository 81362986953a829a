use crate::error::VersusError;
use crate::scoring::tables::{AttributeRange, ScoringTables, Thresholds};
use crate::types::key::AttributeKey;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// On-disk shape of a `versus.toml` file after all layers are merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersusConfig {
    pub comparison: Option<ComparisonConfig>,
    /// `[ranges.<Category>.<sub_attribute>]` tables.
    #[serde(default)]
    pub ranges: BTreeMap<String, BTreeMap<String, RangeConfig>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub neutral: Vec<String>,
    pub category_tolerance: Option<f64>,
    pub overall_tolerance: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub lower_is_better: bool,
}

/// Rejects empty and duplicate names in a category list. `source` names the
/// setting in the error message.
pub fn validate_categories(source: &str, categories: &[String]) -> Result<(), VersusError> {
    let mut seen = HashSet::new();
    for category in categories {
        let normalized = category.trim();
        if normalized.is_empty() {
            return Err(VersusError::ConfigParse(format!(
                "{source} entries must be non-empty"
            )));
        }
        if !seen.insert(normalized) {
            return Err(VersusError::ConfigParse(format!(
                "{source} contains duplicate category: {normalized}"
            )));
        }
    }
    Ok(())
}

impl VersusConfig {
    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.comparison {
            Some(comparison) => Thresholds {
                category_tolerance: comparison
                    .category_tolerance
                    .unwrap_or(defaults.category_tolerance),
                overall_tolerance: comparison
                    .overall_tolerance
                    .unwrap_or(defaults.overall_tolerance),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), VersusError> {
        for (category, subs) in &self.ranges {
            if category.trim().is_empty() {
                return Err(VersusError::ConfigParse(
                    "ranges contains an empty category name".to_string(),
                ));
            }
            for (sub_attribute, range) in subs {
                let key = format!("{category}.{sub_attribute}");
                if !range.min.is_finite() || !range.max.is_finite() {
                    return Err(VersusError::ConfigParse(format!(
                        "ranges.{key}: min and max must be finite numbers"
                    )));
                }
                if !(range.max - range.min).is_finite() {
                    return Err(VersusError::ConfigParse(format!(
                        "ranges.{key}: max - min overflows"
                    )));
                }
                if range.min > range.max {
                    return Err(VersusError::ConfigParse(format!(
                        "ranges.{key}: min ({}) must not exceed max ({})",
                        range.min, range.max
                    )));
                }
            }
        }

        if let Some(comparison) = &self.comparison {
            validate_categories("comparison.categories", &comparison.categories)?;

            for neutral in &comparison.neutral {
                neutral.parse::<AttributeKey>().map_err(|e| {
                    VersusError::ConfigParse(format!("comparison.neutral: {e}"))
                })?;
            }

            for (name, tolerance) in [
                ("category_tolerance", comparison.category_tolerance),
                ("overall_tolerance", comparison.overall_tolerance),
            ] {
                if let Some(tolerance) = tolerance {
                    if !(0.0..=100.0).contains(&tolerance) {
                        return Err(VersusError::ConfigParse(format!(
                            "comparison.{name} must be between 0.0 and 100.0"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Validates and freezes the config into lookup tables.
    pub fn into_tables(self) -> Result<ScoringTables, VersusError> {
        self.validate()?;
        let thresholds = self.thresholds();
        let comparison = self.comparison.unwrap_or_default();

        let mut tables = ScoringTables::new()
            .with_categories(comparison.categories.iter().map(|c| c.trim().to_string()))
            .with_thresholds(thresholds);
        for neutral in &comparison.neutral {
            tables = tables.with_neutral(neutral.parse()?);
        }
        for (category, subs) in self.ranges {
            for (sub_attribute, range) in subs {
                tables = tables.with_range(
                    AttributeKey::new(category.as_str(), sub_attribute),
                    AttributeRange::new(range.min, range.max, range.lower_is_better),
                );
            }
        }
        Ok(tables)
    }
}
