use crate::scoring::tables::ScoringTables;
use crate::types::key::AttributeKey;
use crate::types::record::SpecRecord;
use crate::types::value::{AttributeValue, EffectiveValue};
use serde::Serialize;

/// Width of the out-of-range marker, in percent of the bar.
pub const INDICATOR_WIDTH: f64 = 3.0;
const NEUTRAL_COLOR: &str = "hsl(210, 70%, 82%)";
const RED_COLOR: &str = "hsl(0, 80%, 50%)";
const GREEN_COLOR: &str = "hsl(120, 70%, 40%)";
const MAX_HUE: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Red,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GradientStyle {
    Neutral,
    Scaled {
        /// Clamped position within the range, in percent.
        fill_percent: f64,
        /// 0 is red, 120 is green.
        hue: f64,
        indicator: Option<Indicator>,
    },
}

impl GradientStyle {
    pub fn to_css(&self) -> String {
        match self {
            GradientStyle::Neutral => {
                format!("linear-gradient(90deg, {NEUTRAL_COLOR} 0%, {NEUTRAL_COLOR} 100%)")
            }
            GradientStyle::Scaled {
                fill_percent,
                hue,
                indicator,
            } => {
                let color = format!("hsl({hue:.0}, 75%, 45%)");
                let mut stops = Vec::new();
                let start = match indicator {
                    Some(indicator) => {
                        let marker = match indicator {
                            Indicator::Red => RED_COLOR,
                            Indicator::Green => GREEN_COLOR,
                        };
                        stops.push(format!("{marker} 0%"));
                        stops.push(format!("{marker} {INDICATOR_WIDTH:.0}%"));
                        INDICATOR_WIDTH
                    }
                    None => 0.0,
                };
                let end = start + fill_percent * (100.0 - start) / 100.0;
                stops.push(format!("{color} {start:.1}%"));
                stops.push(format!("{color} {end:.1}%"));
                stops.push(format!("transparent {end:.1}%"));
                stops.push("transparent 100%".to_string());
                format!("linear-gradient(90deg, {})", stops.join(", "))
            }
        }
    }
}

/// Presentation style for one record's value of one sub-attribute.
pub fn gradient_style(
    key: &AttributeKey,
    value: &AttributeValue,
    tables: &ScoringTables,
) -> Option<GradientStyle> {
    if tables.is_neutral(key) {
        return Some(GradientStyle::Neutral);
    }

    match value.effective() {
        EffectiveValue::Boolean(flag) => {
            let fill_percent = if flag { 100.0 } else { 0.0 };
            Some(GradientStyle::Scaled {
                fill_percent,
                hue: fill_percent / 100.0 * MAX_HUE,
                indicator: None,
            })
        }
        EffectiveValue::Number(number) => {
            let range = tables.range(key)?;
            let fill_percent = range.position(number);
            let quality = if range.lower_is_better {
                100.0 - fill_percent
            } else {
                fill_percent
            };
            let indicator = if !range.lower_is_better && number < range.min {
                Some(Indicator::Red)
            } else if range.lower_is_better && number <= range.min {
                Some(Indicator::Green)
            } else {
                None
            };
            Some(GradientStyle::Scaled {
                fill_percent,
                hue: quality / 100.0 * MAX_HUE,
                indicator,
            })
        }
        EffectiveValue::Text | EffectiveValue::Unknown => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeStyle {
    pub key: AttributeKey,
    pub side: Side,
    pub style: GradientStyle,
    pub css: String,
}

/// Styles for every styleable sub-attribute of a category, both records.
pub fn category_styles(
    category: &str,
    left: &SpecRecord,
    right: &SpecRecord,
    tables: &ScoringTables,
) -> Vec<AttributeStyle> {
    let Some(values) = left.category(category) else {
        return Vec::new();
    };

    let mut styles = Vec::new();
    for (sub_attribute, left_value) in values {
        let key = AttributeKey::new(category, sub_attribute.as_str());
        let right_value = right.value(category, sub_attribute);
        for (side, value) in [(Side::Left, Some(left_value)), (Side::Right, right_value)] {
            if let Some(style) = value.and_then(|value| gradient_style(&key, value, tables)) {
                styles.push(AttributeStyle {
                    key: key.clone(),
                    side,
                    css: style.to_css(),
                    style,
                });
            }
        }
    }
    styles
}
