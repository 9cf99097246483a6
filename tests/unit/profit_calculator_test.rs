// Property-based tests for the profit calculator
//
// Profit per link, margin against the parent amount, orphan exclusion and
// the summary averages.

use proptest::prelude::*;
use ratedesk::rates::models::{ClassType, ParentRate, RateLink, TutorRate};
use ratedesk::reports::ProfitCalculator;
use rust_decimal::Decimal;
use std::str::FromStr;

fn tutor(id: &str, rate: Decimal) -> TutorRate {
    TutorRate {
        id: id.to_string(),
        name: format!("Tutor {}", id),
        description: None,
        class_type: ClassType::Individual,
        subject: None,
        rate,
        is_default: false,
        is_active: true,
    }
}

fn parent(id: &str, rate: Decimal) -> ParentRate {
    ParentRate {
        id: id.to_string(),
        name: format!("Parent {}", id),
        description: None,
        class_type: ClassType::Group,
        subject: Some("Maths".to_string()),
        rate,
        is_default: false,
        is_active: true,
    }
}

fn cents(value: u32) -> Decimal {
    Decimal::new(value as i64, 2)
}

#[test]
fn test_documented_example() {
    let (entries, summary) = ProfitCalculator::new().calculate(
        &[tutor("t1", Decimal::from_str("18.00").unwrap())],
        &[parent("p1", Decimal::from_str("30.00").unwrap())],
        &[RateLink::new("l1", "t1", "p1")],
    );

    assert_eq!(entries[0].profit, Decimal::from(12));
    assert_eq!(entries[0].margin_display, "40.0");
    assert_eq!(summary.count, 1);
    assert_eq!(summary.avg_margin_display, "40.0");
}

#[test]
fn test_zero_parent_amount_has_zero_margin() {
    let (entries, summary) = ProfitCalculator::new().calculate(
        &[tutor("t1", Decimal::from(10))],
        &[parent("p1", Decimal::ZERO)],
        &[RateLink::new("l1", "t1", "p1")],
    );

    assert_eq!(entries[0].profit, Decimal::from(-10));
    assert_eq!(entries[0].margin_percent, Decimal::ZERO);
    assert_eq!(entries[0].margin_display, "0.0");
    assert_eq!(summary.avg_margin_percent, Decimal::ZERO);
}

#[test]
fn test_empty_link_set() {
    let (entries, summary) = ProfitCalculator::new().calculate(
        &[tutor("t1", Decimal::from(10))],
        &[parent("p1", Decimal::from(20))],
        &[],
    );

    assert!(entries.is_empty());
    assert_eq!(summary.count, 0);
    assert_eq!(summary.avg_profit, Decimal::ZERO);
    assert_eq!(summary.avg_margin_display, "0.0");
}

#[test]
fn test_margin_display_rounds_half_away() {
    // 1/3 of 30 -> 33.333...
    let (entries, _) = ProfitCalculator::new().calculate(
        &[tutor("t1", Decimal::from(20))],
        &[parent("p1", Decimal::from(30))],
        &[RateLink::new("l1", "t1", "p1")],
    );
    assert_eq!(entries[0].margin_display, "33.3");

    // 0.25/4 -> 6.25, halves round up
    let (entries, _) = ProfitCalculator::new().calculate(
        &[tutor("t1", Decimal::from_str("3.75").unwrap())],
        &[parent("p1", Decimal::from(4))],
        &[RateLink::new("l1", "t1", "p1")],
    );
    assert_eq!(entries[0].margin_display, "6.3");
}

proptest! {
    /// Profit is always parent minus tutor, margin is relative to parent
    #[test]
    fn prop_entry_profit_and_margin(
        tutor_cents in 0u32..1_000_000u32,
        parent_cents in 1u32..1_000_000u32,
    ) {
        let tutor_amount = cents(tutor_cents);
        let parent_amount = cents(parent_cents);

        let (entries, _) = ProfitCalculator::new().calculate(
            &[tutor("t1", tutor_amount)],
            &[parent("p1", parent_amount)],
            &[RateLink::new("l1", "t1", "p1")],
        );

        let entry = &entries[0];
        prop_assert_eq!(entry.profit, parent_amount - tutor_amount);
        prop_assert_eq!(entry.is_loss(), tutor_amount > parent_amount);
        prop_assert!(entry.margin_percent <= Decimal::ONE_HUNDRED);
        if tutor_amount <= parent_amount {
            prop_assert!(entry.margin_percent >= Decimal::ZERO);
        }

        // One decimal place, within half a tenth of the exact margin
        let shown = Decimal::from_str(&entry.margin_display).unwrap();
        prop_assert_eq!(shown.scale(), 1);
        prop_assert!((shown - entry.margin_percent).abs() <= Decimal::new(5, 2));
    }

    /// Links pointing at missing rates never appear and never count
    #[test]
    fn prop_orphans_are_excluded(
        rates in prop::collection::vec((0u32..100_000u32, 0u32..100_000u32), 1..8),
        picks in prop::collection::vec((0usize..12usize, 0usize..12usize), 0..20),
    ) {
        let tutors: Vec<TutorRate> = rates
            .iter()
            .enumerate()
            .map(|(i, (t, _))| tutor(&format!("t{}", i), cents(*t)))
            .collect();
        let parents: Vec<ParentRate> = rates
            .iter()
            .enumerate()
            .map(|(i, (_, p))| parent(&format!("p{}", i), cents(*p)))
            .collect();
        let links: Vec<RateLink> = picks
            .iter()
            .enumerate()
            .map(|(i, (t, p))| RateLink::new(format!("l{}", i), format!("t{}", t), format!("p{}", p)))
            .collect();

        let (entries, summary) = ProfitCalculator::new().calculate(&tutors, &parents, &links);

        let expected: Vec<String> = picks
            .iter()
            .enumerate()
            .filter(|(_, (t, p))| *t < rates.len() && *p < rates.len())
            .map(|(i, _)| format!("l{}", i))
            .collect();
        let actual: Vec<String> = entries.iter().map(|e| e.link_id.clone()).collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(summary.count, entries.len());
    }

    /// Average profit is the difference of the average amounts
    #[test]
    fn prop_summary_averages(
        pairs in prop::collection::vec((0u32..100_000u32, 0u32..100_000u32), 1..10),
    ) {
        let tutors: Vec<TutorRate> = pairs
            .iter()
            .enumerate()
            .map(|(i, (t, _))| tutor(&format!("t{}", i), cents(*t)))
            .collect();
        let parents: Vec<ParentRate> = pairs
            .iter()
            .enumerate()
            .map(|(i, (_, p))| parent(&format!("p{}", i), cents(*p)))
            .collect();
        let links: Vec<RateLink> = (0..pairs.len())
            .map(|i| RateLink::new(format!("l{}", i), format!("t{}", i), format!("p{}", i)))
            .collect();

        let (entries, summary) = ProfitCalculator::new().calculate(&tutors, &parents, &links);

        prop_assert_eq!(entries.len(), pairs.len());
        prop_assert_eq!(summary.count, pairs.len());
        prop_assert_eq!(summary.avg_profit, summary.avg_parent_rate - summary.avg_tutor_rate);

        let max_parent = parents.iter().map(|p| p.rate).max().unwrap();
        let min_parent = parents.iter().map(|p| p.rate).min().unwrap();
        prop_assert!(summary.avg_parent_rate <= max_parent);
        prop_assert!(summary.avg_parent_rate >= min_parent);

        if summary.avg_parent_rate.is_zero() {
            prop_assert_eq!(summary.avg_margin_percent, Decimal::ZERO);
        }
    }
}
