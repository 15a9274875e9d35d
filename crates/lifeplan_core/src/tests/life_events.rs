//! Tests for life-event expansion
//!
//! These tests verify:
//! - One-off events fire once
//! - Recurrence honors the occurrence limit and the age limit, whichever hits first
//! - Occurrences before the window count toward the limit but are not emitted
//! - Housing purchases without price fields are rejected

use super::ym;
use crate::error::SimulationError;
use crate::life_events::{expand_life_events, occurrence_months};
use crate::model::{EventField, LifeEvent, LifeEventCategory, Profile};
use crate::money::Money;
use crate::year_month::YearMonth;

fn profile() -> Profile {
    Profile::new(ym("1990-01"))
}

fn months(event: &LifeEvent, start: &str, end: &str) -> Vec<YearMonth> {
    occurrence_months(event, ym(start), ym(end), &profile()).unwrap()
}

#[test]
fn test_one_off_event_fires_once() {
    let event = LifeEvent::new(LifeEventCategory::Marriage, Money::new(-3_000_000), ym("2026-10"));
    assert_eq!(months(&event, "2025-01", "2060-01"), vec![ym("2026-10")]);
}

#[test]
fn test_non_positive_interval_is_one_off() {
    let event = LifeEvent::new(LifeEventCategory::Travel, Money::new(-300_000), ym("2026-08"))
        .every_years(0);
    assert_eq!(months(&event, "2025-01", "2060-01"), vec![ym("2026-08")]);

    let event = event.every_years(-3);
    assert_eq!(months(&event, "2025-01", "2060-01"), vec![ym("2026-08")]);
}

#[test]
fn test_recurrence_with_occurrence_limit() {
    let event = LifeEvent::new(LifeEventCategory::Car, Money::new(-100_000), ym("2025-01"))
        .every_years(2)
        .stop_after_occurrences(2);
    assert_eq!(
        months(&event, "2025-01", "2040-01"),
        vec![ym("2025-01"), ym("2027-01")]
    );
}

/// Age binds before the (larger) occurrence limit
#[test]
fn test_stop_after_age_wins_when_reached_first() {
    // Born 1990-01: 35 in 2025-01, 38 in 2028-01
    let event = LifeEvent::new(LifeEventCategory::Travel, Money::new(-200_000), ym("2025-01"))
        .every_years(1)
        .stop_after_age(37)
        .stop_after_occurrences(10);
    assert_eq!(
        months(&event, "2025-01", "2060-01"),
        vec![ym("2025-01"), ym("2026-01"), ym("2027-01")]
    );
}

#[test]
fn test_occurrence_limit_wins_when_reached_first() {
    let event = LifeEvent::new(LifeEventCategory::Travel, Money::new(-200_000), ym("2025-01"))
        .every_years(1)
        .stop_after_age(60)
        .stop_after_occurrences(2);
    assert_eq!(
        months(&event, "2025-01", "2060-01"),
        vec![ym("2025-01"), ym("2026-01")]
    );
}

/// The stop age itself still fires; the birthday month decides
#[test]
fn test_stop_age_boundary_uses_birth_month() {
    let profile = Profile::new(ym("1990-06"));
    // 2027-05: age 36, 2027-06: age 37
    let event = LifeEvent::new(LifeEventCategory::Medical, Money::new(-50_000), ym("2025-05"))
        .every_years(1)
        .stop_after_age(36);
    let got = occurrence_months(&event, ym("2025-01"), ym("2060-01"), &profile).unwrap();
    assert_eq!(got, vec![ym("2025-05"), ym("2026-05"), ym("2027-05")]);
}

#[test]
fn test_occurrences_before_window_count_toward_limit() {
    let event = LifeEvent::new(LifeEventCategory::Education, Money::new(-500_000), ym("2020-04"))
        .every_years(1)
        .stop_after_occurrences(7);

    let got = expand_life_events(&[event], ym("2025-01"), ym("2040-01"), &profile()).unwrap();
    let emitted: Vec<_> = got.iter().map(|o| (o.year_month, o.occurrence)).collect();
    assert_eq!(emitted, vec![(ym("2025-04"), 6), (ym("2026-04"), 7)]);
}

#[test]
fn test_window_end_stops_unbounded_recurrence() {
    let event = LifeEvent::new(LifeEventCategory::Other, Money::new(-10_000), ym("2025-03"))
        .every_years(5);
    assert_eq!(
        months(&event, "2025-01", "2040-02"),
        vec![ym("2025-03"), ym("2030-03"), ym("2035-03")]
    );
}

#[test]
fn test_event_after_window_is_not_emitted() {
    let event = LifeEvent::new(LifeEventCategory::Other, Money::new(-10_000), ym("2041-01"));
    assert!(months(&event, "2025-01", "2040-12").is_empty());
}

#[test]
fn test_expansion_is_sorted_across_templates() {
    let events = vec![
        LifeEvent::new(LifeEventCategory::Car, Money::new(-1), ym("2030-01")).every_years(3),
        LifeEvent::new(LifeEventCategory::Travel, Money::new(-2), ym("2026-01")).every_years(2),
        LifeEvent::new(LifeEventCategory::Other, Money::new(-3), ym("2030-01")),
    ];
    let got = expand_life_events(&events, ym("2025-01"), ym("2033-12"), &profile()).unwrap();

    for pair in got.windows(2) {
        assert!(pair[0].year_month <= pair[1].year_month);
    }
    // Same month keeps template order
    let in_2030: Vec<_> = got
        .iter()
        .filter(|o| o.year_month == ym("2030-01"))
        .map(|o| o.event_index)
        .collect();
    assert_eq!(in_2030, vec![0, 1, 2]);
}

#[test]
fn test_housing_purchase_requires_price_fields() {
    let mut event = LifeEvent::housing_purchase(
        ym("2030-04"),
        Money::new(-5_000_000),
        Money::new(20_000_000),
        Money::new(10_000_000),
        Money::new(5_000_000),
    );
    event.down_payment = None;
    let events = vec![
        LifeEvent::new(LifeEventCategory::Car, Money::new(-1), ym("2026-01")),
        event,
    ];

    let err = expand_life_events(&events, ym("2025-01"), ym("2040-01"), &profile()).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::MissingEventField {
            event_index: 1,
            field: EventField::DownPayment
        }
    ));
}

#[test]
fn test_stop_after_age_needs_birth_date() {
    let event = LifeEvent::new(LifeEventCategory::Car, Money::new(-1), ym("2026-01"))
        .every_years(1)
        .stop_after_age(40);
    let result = occurrence_months(&event, ym("2025-01"), ym("2040-01"), &Profile::default());
    assert!(matches!(result, Err(SimulationError::MissingBirthDate)));
}
