//! Integration tests for the life-plan simulation engine
//!
//! Tests are organized by topic:
//! - `timeline` - Window bounds, ordering, ages
//! - `income` - Raises, bonuses, expense and rent schedules
//! - `life_events` - Recurrence and the two stop conditions
//! - `housing` - Principal and property-tax rounding chain
//! - `projection` - Month-by-month balances, pensions, rental auto-stop
//! - `simulation_result` - Result structure and helper methods
//! - `builder_dsl` - Builder DSL for fluent simulation setup

mod life_events;
mod timeline;

use crate::year_month::YearMonth;

pub(crate) fn ym(s: &str) -> YearMonth {
    YearMonth::parse(s).unwrap()
}
