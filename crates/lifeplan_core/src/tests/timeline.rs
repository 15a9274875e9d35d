//! Tests for the projection window
//!
//! These tests verify:
//! - The window is non-empty exactly when start <= end
//! - Months are strictly ordered and contiguous
//! - Ages step on the birth month and stop at the end age

use super::ym;
use crate::error::{CalendarError, SimulationError};
use crate::model::Profile;
use crate::timeline::build_timeline;

#[test]
fn test_timeline_is_contiguous_and_ordered() {
    let profile = Profile::new(ym("1990-06"));
    let months = build_timeline(ym("2025-01"), 0, 40, &profile).unwrap();

    assert_eq!(months.first().unwrap().year_month, ym("2025-01"));
    assert_eq!(months.last().unwrap().year_month, ym("2030-06"));
    assert_eq!(months.len(), 66);
    for pair in months.windows(2) {
        assert_eq!(
            pair[1].year_month.elapsed_months() - pair[0].year_month.elapsed_months(),
            1,
            "gap between {} and {}",
            pair[0].year_month,
            pair[1].year_month
        );
    }
}

#[test]
fn test_timeline_empty_when_start_after_end() {
    let profile = Profile::new(ym("1990-06"));
    assert!(build_timeline(ym("2030-07"), 0, 40, &profile).unwrap().is_empty());
    // Offset alone can push the start past the end
    assert!(build_timeline(ym("2030-01"), 6, 40, &profile).unwrap().is_empty());
}

#[test]
fn test_timeline_single_month_when_start_equals_end() {
    let profile = Profile::new(ym("1990-06"));
    let months = build_timeline(ym("2030-06"), 0, 40, &profile).unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].age, 40);
}

#[test]
fn test_start_offset_shifts_first_month() {
    let profile = Profile::new(ym("1990-06"));
    let months = build_timeline(ym("2025-01"), 3, 40, &profile).unwrap();
    assert_eq!(months[0].year_month, ym("2025-04"));

    let months = build_timeline(ym("2025-01"), -2, 40, &profile).unwrap();
    assert_eq!(months[0].year_month, ym("2024-11"));
}

#[test]
fn test_end_age_is_reached_but_not_exceeded() {
    let profile = Profile::new(ym("1990-06"));
    let months = build_timeline(ym("2025-01"), 0, 100, &profile).unwrap();

    let last = months.last().unwrap();
    assert_eq!(last.year_month, ym("2090-06"));
    assert_eq!(last.age, 100);
    assert!(months.iter().all(|m| m.age <= 100));
}

#[test]
fn test_ages_step_on_birth_month() {
    let profile = Profile::new(ym("1990-06")).with_spouse(ym("1992-02"));
    let months = build_timeline(ym("2025-01"), 0, 40, &profile).unwrap();

    let at = |s: &str| months.iter().find(|m| m.year_month == ym(s)).unwrap();
    assert_eq!(at("2025-05").age, 34);
    assert_eq!(at("2025-06").age, 35);
    assert_eq!(at("2025-01").spouse_age, Some(32));
    assert_eq!(at("2025-02").spouse_age, Some(33));
}

#[test]
fn test_spouse_age_absent_without_spouse() {
    let profile = Profile::new(ym("1990-06"));
    let months = build_timeline(ym("2025-01"), 0, 36, &profile).unwrap();
    assert!(months.iter().all(|m| m.spouse_age.is_none()));

    // A half-filled spouse birth date counts as no spouse
    let mut profile = Profile::new(ym("1990-06"));
    profile.spouse_birth_year = Some(1991);
    let months = build_timeline(ym("2025-01"), 0, 36, &profile).unwrap();
    assert!(months.iter().all(|m| m.spouse_age.is_none()));
}

#[test]
fn test_missing_birth_date_is_fatal() {
    let profile = Profile {
        birth_year: Some(1990),
        ..Default::default()
    };
    assert!(matches!(
        build_timeline(ym("2025-01"), 0, 90, &profile),
        Err(SimulationError::MissingBirthDate)
    ));
}

#[test]
fn test_out_of_range_birth_month_is_fatal() {
    let profile = Profile {
        birth_year: Some(1990),
        birth_month: Some(13),
        ..Default::default()
    };
    assert!(matches!(
        build_timeline(ym("2025-01"), 0, 90, &profile),
        Err(SimulationError::Calendar(CalendarError::MonthOutOfRange(13)))
    ));
}
