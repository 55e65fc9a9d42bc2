//! Tests for the cadence vocabulary.

use crate::recurrence::domain::{Cadence, RecurrenceDomainError, WeekdayIndex};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Cadence::Daily, "daily")]
#[case(Cadence::Weekly, "weekly")]
#[case(Cadence::Monthly, "monthly")]
#[case(Cadence::Workweek, "workweek")]
fn cadence_type_literals_are_stable(#[case] cadence: Cadence, #[case] literal: &str) {
    assert_eq!(cadence.as_str(), literal);
}

#[rstest]
fn workweek_keeps_its_own_persisted_literal() {
    let serialized = serde_json::to_value(&Cadence::Workweek).expect("serializes");
    assert_eq!(serialized, json!({"type": "workweek"}));
}

#[rstest]
fn custom_cadence_serializes_days_and_months() {
    let cadence = Cadence::custom([1, 3, 5], [6]).expect("valid selection");
    let serialized = serde_json::to_value(&cadence).expect("serializes");
    assert_eq!(
        serialized,
        json!({"type": "custom", "days": [1, 3, 5], "months": [6]})
    );

    let parsed: Cadence = serde_json::from_value(serialized).expect("deserializes");
    assert_eq!(parsed, cadence);
}

#[rstest]
fn workweek_expands_to_monday_through_friday() {
    let days = Cadence::Workweek.effective_days().expect("workweek has days");
    let expected: Vec<u8> = days.iter().map(|day| day.value()).collect();
    assert_eq!(expected, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn plain_cadences_have_no_day_selection() {
    assert!(Cadence::Daily.effective_days().is_none());
    assert!(Cadence::Weekly.effective_days().is_none());
    assert!(Cadence::Monthly.effective_days().is_none());
}

#[rstest]
fn custom_cadence_requires_at_least_one_day() {
    let result = Cadence::custom([], [1]);
    assert_eq!(result, Err(RecurrenceDomainError::EmptyCustomDays));
}

#[rstest]
fn out_of_range_indices_are_rejected() {
    assert_eq!(
        Cadence::custom([7], []),
        Err(RecurrenceDomainError::InvalidWeekday(7))
    );
    assert_eq!(
        Cadence::custom([1], [13]),
        Err(RecurrenceDomainError::InvalidMonth(13))
    );
    assert_eq!(
        WeekdayIndex::new(9),
        Err(RecurrenceDomainError::InvalidWeekday(9))
    );
}
