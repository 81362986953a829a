use crate::types::value::AttributeValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type Category = IndexMap<String, AttributeValue>;

/// Nested specification data for one comparable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRecord {
    pub label: String,
    #[serde(default)]
    pub specs: IndexMap<String, Category>,
}

impl SpecRecord {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            specs: IndexMap::new(),
        }
    }

    /// Builder used by tests and embedders assembling records in code.
    pub fn with(
        mut self,
        category: &str,
        sub_attribute: &str,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.specs
            .entry(category.to_string())
            .or_default()
            .insert(sub_attribute.to_string(), value.into());
        self
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.specs.get(name)
    }

    pub fn value(&self, category: &str, sub_attribute: &str) -> Option<&AttributeValue> {
        self.category(category)
            .and_then(|values| values.get(sub_attribute))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }
}
