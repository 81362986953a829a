use serde::{Deserialize, Serialize};

/// Marker used by record sources for a value nobody has filled in yet.
pub const UNKNOWN_MARKER: &str = "?";

/// A single sub-attribute value as it arrives from a record source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawValue", into = "RawValue")]
pub enum AttributeValue {
    Number(f64),
    /// Display-formatted number; only `value` takes part in scoring.
    Formatted { text: String, value: f64 },
    Boolean(bool),
    Text(String),
    Unknown,
}

/// The value the scoring engine actually looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectiveValue {
    Number(f64),
    Boolean(bool),
    Text,
    Unknown,
}

impl AttributeValue {
    /// Unwraps formatted numbers and drops string payloads.
    pub fn effective(&self) -> EffectiveValue {
        match self {
            AttributeValue::Number(value) | AttributeValue::Formatted { value, .. } => {
                if value.is_finite() {
                    EffectiveValue::Number(*value)
                } else {
                    EffectiveValue::Unknown
                }
            }
            AttributeValue::Boolean(flag) => EffectiveValue::Boolean(*flag),
            AttributeValue::Text(_) => EffectiveValue::Text,
            AttributeValue::Unknown => EffectiveValue::Unknown,
        }
    }

    /// Human readable form used by the report renderers.
    pub fn display(&self) -> String {
        match self {
            AttributeValue::Number(value) => format_number(*value),
            AttributeValue::Formatted { text, .. } => text.clone(),
            AttributeValue::Boolean(true) => "yes".to_string(),
            AttributeValue::Boolean(false) => "no".to_string(),
            AttributeValue::Text(text) => text.clone(),
            AttributeValue::Unknown => UNKNOWN_MARKER.to_string(),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        if value.trim() == UNKNOWN_MARKER {
            AttributeValue::Unknown
        } else {
            AttributeValue::Text(value.to_string())
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
    Formatted { text: String, value: f64 },
}

impl From<RawValue> for AttributeValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Null => AttributeValue::Unknown,
            RawValue::Boolean(flag) => AttributeValue::Boolean(flag),
            RawValue::Number(value) => AttributeValue::Number(value),
            RawValue::Text(text) if text.trim() == UNKNOWN_MARKER => AttributeValue::Unknown,
            RawValue::Text(text) => AttributeValue::Text(text),
            RawValue::Formatted { text, value } => AttributeValue::Formatted { text, value },
        }
    }
}

impl From<AttributeValue> for RawValue {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Number(value) => RawValue::Number(value),
            AttributeValue::Formatted { text, value } => RawValue::Formatted { text, value },
            AttributeValue::Boolean(flag) => RawValue::Boolean(flag),
            AttributeValue::Text(text) => RawValue::Text(text),
            AttributeValue::Unknown => RawValue::Text(UNKNOWN_MARKER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AttributeValue {
        serde_json::from_str(json).expect("value should parse")
    }

    #[test]
    fn parses_every_value_shape() {
        assert_eq!(parse("5000"), AttributeValue::Number(5000.0));
        assert_eq!(parse("6.1"), AttributeValue::Number(6.1));
        assert_eq!(parse("true"), AttributeValue::Boolean(true));
        assert_eq!(parse("\"Snapdragon\""), AttributeValue::Text("Snapdragon".to_string()));
        assert_eq!(parse("\"?\""), AttributeValue::Unknown);
        assert_eq!(parse("null"), AttributeValue::Unknown);
        assert_eq!(
            parse(r#"{"text": "187 g", "value": 187}"#),
            AttributeValue::Formatted {
                text: "187 g".to_string(),
                value: 187.0
            }
        );
    }

    #[test]
    fn formatted_values_unwrap_to_numbers() {
        let value = AttributeValue::Formatted {
            text: "4,500 mAh".to_string(),
            value: 4500.0,
        };
        assert_eq!(value.effective(), EffectiveValue::Number(4500.0));
        assert_eq!(value.display(), "4,500 mAh");
    }

    #[test]
    fn strings_and_unknown_have_no_payload() {
        assert_eq!(AttributeValue::Text("IP68".to_string()).effective(), EffectiveValue::Text);
        assert_eq!(AttributeValue::Unknown.effective(), EffectiveValue::Unknown);
    }

    #[test]
    fn unknown_serializes_back_to_marker() {
        let json = serde_json::to_string(&AttributeValue::Unknown).expect("value should serialize");
        assert_eq!(json, "\"?\"");
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(AttributeValue::Number(120.0).display(), "120");
        assert_eq!(AttributeValue::Number(6.7).display(), "6.7");
        assert_eq!(AttributeValue::Boolean(false).display(), "no");
    }
}
