use proptest::prelude::*;
use versus::{
    compare_category, compare_overall, score_pair, AttributeKey, AttributeRange, ScoringTables,
    SpecRecord, SubScore,
};

fn range_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0f64..1000.0, 0.001f64..1000.0).prop_map(|(min, width)| (min, min + width))
}

proptest! {
    #[test]
    fn higher_is_better_hits_both_bounds((min, max) in range_strategy()) {
        let range = AttributeRange::higher_is_better(min, max);
        prop_assert_eq!(range.normalize(min), 0.0);
        prop_assert!((range.normalize(max) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn lower_is_better_hits_both_bounds((min, max) in range_strategy()) {
        let range = AttributeRange::lower_is_better(min, max);
        prop_assert_eq!(range.normalize(min), 10.0);
        prop_assert!(range.normalize(max).abs() < 1e-9);
    }

    #[test]
    fn normalize_is_monotone_and_bounded(
        (min, max) in range_strategy(),
        a in -3000.0f64..3000.0,
        b in -3000.0f64..3000.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let up = AttributeRange::higher_is_better(min, max);
        let down = AttributeRange::lower_is_better(min, max);

        prop_assert!(up.normalize(low) <= up.normalize(high));
        prop_assert!(down.normalize(low) >= down.normalize(high));
        for score in [up.normalize(a), down.normalize(a)] {
            prop_assert!((0.0..=10.0).contains(&score));
        }
    }

    #[test]
    fn values_outside_range_are_clamped((min, max) in range_strategy(), overshoot in 0.001f64..500.0) {
        let range = AttributeRange::higher_is_better(min, max);
        prop_assert_eq!(range.normalize(min - overshoot), 0.0);
        prop_assert_eq!(range.normalize(max + overshoot), range.normalize(max));
    }

    #[test]
    fn neutral_attributes_never_count(a in -100.0f64..100.0, b in -100.0f64..100.0) {
        let key = AttributeKey::new("Design", "width_mm");
        let tables = ScoringTables::new()
            .with_range(key.clone(), AttributeRange::higher_is_better(-100.0, 100.0))
            .with_neutral(key.clone());
        prop_assert_eq!(score_pair(&key, &a.into(), &b.into(), &tables), SubScore::Neutral);
    }

    #[test]
    fn category_verdict_is_symmetric(
        a1 in 2000.0f64..6000.0,
        a2 in 5.0f64..120.0,
        b1 in 2000.0f64..6000.0,
        b2 in 5.0f64..120.0,
    ) {
        let tables = ScoringTables::new()
            .with_range(
                AttributeKey::new("Battery", "battery_capacity_mAh"),
                AttributeRange::higher_is_better(2000.0, 6000.0),
            )
            .with_range(
                AttributeKey::new("Battery", "charging_speed_w"),
                AttributeRange::higher_is_better(5.0, 120.0),
            );
        let left = SpecRecord::new("L")
            .with("Battery", "battery_capacity_mAh", a1)
            .with("Battery", "charging_speed_w", a2);
        let right = SpecRecord::new("R")
            .with("Battery", "battery_capacity_mAh", b1)
            .with("Battery", "charging_speed_w", b2);

        let forward = compare_category("Battery", &left, &right, &tables);
        let backward = compare_category("Battery", &right, &left, &tables);
        prop_assert_eq!(&forward.better, &backward.better);
        prop_assert_eq!(&forward.worse, &backward.worse);
        prop_assert_eq!(forward.is_equal, backward.is_equal);
        prop_assert_eq!(forward.percentage_difference, backward.percentage_difference);
        if let (Some((fl, fr)), Some((bl, br))) =
            (forward.normalized_pair(), backward.normalized_pair())
        {
            prop_assert_eq!((fl, fr), (br, bl));
        }

        let overall_forward = compare_overall(&left, &right, &tables);
        let overall_backward = compare_overall(&right, &left, &tables);
        prop_assert_eq!(&overall_forward.better, &overall_backward.better);
        prop_assert_eq!(&overall_forward.worse, &overall_backward.worse);
        prop_assert_eq!(
            overall_forward.percentage_difference,
            overall_backward.percentage_difference
        );
    }
}
