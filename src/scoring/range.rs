use crate::scoring::tables::{ScoringTables, MAX_SCORE};
use crate::types::key::AttributeKey;
use crate::types::value::{AttributeValue, EffectiveValue};
use serde::Serialize;
use tracing::debug;

/// Outcome of scoring one sub-attribute for both records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubScore {
    Scored { left: f64, right: f64 },
    /// Listed in the neutral set; no direction is better.
    Neutral,
    /// Text or unknown marker on either side.
    Excluded,
    /// Numeric on both sides but no range is registered. Counted as 0/0.
    Unranged,
    /// A number on one side and a boolean on the other. Counted as 0/0.
    Mismatched,
}

impl SubScore {
    /// Whether this sub-attribute counts toward the category's metric total.
    pub fn counts(&self) -> bool {
        !matches!(self, SubScore::Neutral | SubScore::Excluded)
    }

    pub fn pair(&self) -> (f64, f64) {
        match self {
            SubScore::Scored { left, right } => (*left, *right),
            SubScore::Neutral
            | SubScore::Excluded
            | SubScore::Unranged
            | SubScore::Mismatched => (0.0, 0.0),
        }
    }
}

pub fn boolean_score(flag: bool) -> f64 {
    if flag {
        MAX_SCORE
    } else {
        0.0
    }
}

pub fn score_pair(
    key: &AttributeKey,
    left: &AttributeValue,
    right: &AttributeValue,
    tables: &ScoringTables,
) -> SubScore {
    if tables.is_neutral(key) {
        debug!(%key, "neutral attribute, not scored");
        return SubScore::Neutral;
    }

    match (left.effective(), right.effective()) {
        (EffectiveValue::Text | EffectiveValue::Unknown, _)
        | (_, EffectiveValue::Text | EffectiveValue::Unknown) => {
            debug!(%key, "text or unknown value, not scored");
            SubScore::Excluded
        }
        (EffectiveValue::Boolean(l), EffectiveValue::Boolean(r)) => SubScore::Scored {
            left: boolean_score(l),
            right: boolean_score(r),
        },
        (EffectiveValue::Number(l), EffectiveValue::Number(r)) => match tables.range(key) {
            Some(range) => SubScore::Scored {
                left: range.normalize(l),
                right: range.normalize(r),
            },
            None => {
                debug!(%key, "no range registered, scored as zero");
                SubScore::Unranged
            }
        },
        (EffectiveValue::Number(_), EffectiveValue::Boolean(_))
        | (EffectiveValue::Boolean(_), EffectiveValue::Number(_)) => {
            debug!(%key, "mismatched value kinds, scored as zero");
            SubScore::Mismatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tables::AttributeRange;

    fn tables() -> ScoringTables {
        ScoringTables::new()
            .with_range(
                AttributeKey::new("Battery", "battery_capacity_mAh"),
                AttributeRange::higher_is_better(2000.0, 6000.0),
            )
            .with_range(
                AttributeKey::new("Display", "screen_size_inches"),
                AttributeRange::higher_is_better(5.0, 7.0),
            )
            .with_neutral(AttributeKey::new("Display", "screen_size_inches"))
    }

    #[test]
    fn numeric_values_are_normalized() {
        let key = AttributeKey::new("Battery", "battery_capacity_mAh");
        let score = score_pair(&key, &5000.0.into(), &4000.0.into(), &tables());
        assert_eq!(score, SubScore::Scored { left: 7.5, right: 5.0 });
        assert!(score.counts());
    }

    #[test]
    fn formatted_values_score_by_numeric_value() {
        let key = AttributeKey::new("Battery", "battery_capacity_mAh");
        let left = AttributeValue::Formatted {
            text: "6,000 mAh".to_string(),
            value: 6000.0,
        };
        let score = score_pair(&key, &left, &2000.0.into(), &tables());
        assert_eq!(score.pair(), (10.0, 0.0));
    }

    #[test]
    fn booleans_ignore_range_table() {
        let key = AttributeKey::new("Battery", "wireless_charging");
        let score = score_pair(&key, &true.into(), &false.into(), &tables());
        assert_eq!(score, SubScore::Scored { left: 10.0, right: 0.0 });
    }

    #[test]
    fn neutral_wins_over_registered_range() {
        let key = AttributeKey::new("Display", "screen_size_inches");
        let score = score_pair(&key, &6.7.into(), &6.1.into(), &tables());
        assert_eq!(score, SubScore::Neutral);
        assert!(!score.counts());
        assert_eq!(score.pair(), (0.0, 0.0));
    }

    #[test]
    fn unknown_on_either_side_is_excluded() {
        let key = AttributeKey::new("Battery", "battery_capacity_mAh");
        assert_eq!(
            score_pair(&key, &AttributeValue::Unknown, &4000.0.into(), &tables()),
            SubScore::Excluded
        );
        assert_eq!(
            score_pair(&key, &4000.0.into(), &"?".into(), &tables()),
            SubScore::Excluded
        );
    }

    #[test]
    fn strings_are_excluded() {
        let key = AttributeKey::new("Design", "material");
        let score = score_pair(&key, &"glass".into(), &"aluminium".into(), &tables());
        assert_eq!(score, SubScore::Excluded);
    }

    #[test]
    fn numbers_without_range_count_as_zero() {
        let key = AttributeKey::new("Performance", "antutu_score");
        let score = score_pair(&key, &1_200_000.0.into(), &900_000.0.into(), &tables());
        assert_eq!(score, SubScore::Unranged);
        assert!(score.counts());
        assert_eq!(score.pair(), (0.0, 0.0));
    }

    #[test]
    fn mismatched_kinds_count_as_zero() {
        let key = AttributeKey::new("Battery", "battery_capacity_mAh");
        let score = score_pair(&key, &true.into(), &4000.0.into(), &tables());
        assert_eq!(score, SubScore::Mismatched);
        assert!(score.counts());
        assert_eq!(score.pair(), (0.0, 0.0));
    }

    #[test]
    fn text_and_unknown_never_count() {
        let key = AttributeKey::new("Battery", "battery_capacity_mAh");
        assert!(!score_pair(&key, &"IP68".into(), &4000.0.into(), &tables()).counts());
        assert!(!score_pair(&key, &true.into(), &AttributeValue::Unknown, &tables()).counts());
    }
}
