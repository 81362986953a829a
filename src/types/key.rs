use crate::error::VersusError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Composite lookup key for a single sub-attribute, rendered as
/// `"<Category>.<SubAttribute>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeKey {
    pub category: String,
    pub sub_attribute: String,
}

impl AttributeKey {
    pub fn new(category: impl Into<String>, sub_attribute: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            sub_attribute: sub_attribute.into(),
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.sub_attribute)
    }
}

impl FromStr for AttributeKey {
    type Err = VersusError;

    /// Splits at the first `.` so sub-attribute names may themselves contain dots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, sub_attribute) = s
            .split_once('.')
            .ok_or_else(|| VersusError::InvalidKey(format!("{s} (expected Category.SubAttribute)")))?;
        let category = category.trim();
        let sub_attribute = sub_attribute.trim();
        if category.is_empty() || sub_attribute.is_empty() {
            return Err(VersusError::InvalidKey(format!(
                "{s} (category and sub-attribute must be non-empty)"
            )));
        }
        Ok(Self::new(category, sub_attribute))
    }
}

impl Serialize for AttributeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_at_first_dot() {
        let key: AttributeKey = "Display.refresh.rate_hz".parse().expect("key should parse");
        assert_eq!(key.category, "Display");
        assert_eq!(key.sub_attribute, "refresh.rate_hz");
        assert_eq!(key.to_string(), "Display.refresh.rate_hz");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let err = "Battery".parse::<AttributeKey>().expect_err("key should not parse");
        assert!(err.to_string().contains("expected Category.SubAttribute"));
    }

    #[test]
    fn parse_rejects_empty_halves() {
        assert!(".capacity".parse::<AttributeKey>().is_err());
        assert!("Battery.".parse::<AttributeKey>().is_err());
    }

    #[test]
    fn serializes_as_dotted_string() {
        let key = AttributeKey::new("Battery", "charging_speed_w");
        let json = serde_json::to_string(&key).expect("key should serialize");
        assert_eq!(json, "\"Battery.charging_speed_w\"");
    }
}
