//! Life-plan simulation library
//!
//! This crate projects a household's cash and investment balances month by
//! month, from the current month until the primary member reaches a target
//! age. It supports:
//! - Calendar-month arithmetic through an elapsed-month index (`YearMonth`)
//! - Exact monetary amounts with caller-chosen rounding (`Money`)
//! - Salaries with annual raises and bonus schedules that change over time
//! - Inflating expenses, rentals that stop when a home is bought
//! - One-off and recurring life events with age and count limits
//! - Housing purchases with mortgage principal and property tax derivation
//! - Pensions for both partners and a severance (retirement bonus) lump sum
//!
//! # Builder DSL
//!
//! ```ignore
//! use lifeplan_core::{SimulationBuilder, simulate};
//!
//! let config = SimulationBuilder::new()
//!     .current(ym("2025-04"))
//!     .birth(ym("1990-06"))
//!     .pension(65, Money::new(150_000), Money::new(70_000))
//!     .assets(Money::new(2_000_000), Money::new(3_000_000), dec!(0.03))
//!     .income(IncomeStream::new("Salary", Money::new(300_000), ym("2025-04")))
//!     .build();
//! let result = simulate(&config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Value types
// ============================================================================

pub mod money;
pub mod year_month;

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod housing;
pub mod income;
pub mod life_events;
pub mod simulation;
pub mod simulation_state;
pub mod timeline;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SimulationBuilder, SimulationConfig};
pub use error::{CalendarError, MoneyError, SimulationError};
pub use money::{Money, Rounding};
pub use simulation::{simulate, simulate_batch};
pub use year_month::YearMonth;
