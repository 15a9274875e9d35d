//! Simulation configuration
//!
//! The main configuration type is `SimulationConfig`, which bundles everything
//! a run needs: the household profile, the simulation-wide coefficients and
//! every income, expense, rental, asset, mortgage and life-event record.
//!
//! # Builder DSL
//!
//! ```ignore
//! use lifeplan_core::config::SimulationBuilder;
//! use lifeplan_core::model::{IncomeStream, LifeEvent, LifeEventCategory};
//!
//! let config = SimulationBuilder::new()
//!     .current(ym("2025-04"))
//!     .birth(ym("1990-06"))
//!     .end_age(90)
//!     .assets(Money::new(3_000_000), Money::new(5_000_000), dec!(0.04))
//!     .income(IncomeStream::new("Salary", Money::new(320_000), ym("2025-04"))
//!         .raise_rate(dec!(0.015))
//!         .bonus([6, 12], Money::new(400_000)))
//!     .event(LifeEvent::new(LifeEventCategory::Car, Money::new(-2_500_000), ym("2027-04"))
//!         .every_years(8)
//!         .stop_after_age(75))
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{
    Asset, Expense, IncomeStream, LifeEvent, Mortgage, Profile, Rental, SimulationSettings,
};
use crate::year_month::YearMonth;

pub mod builder;

pub use builder::SimulationBuilder;

/// Complete simulation input
///
/// **Your situation**:
/// - `profile` - birth dates and pension age
/// - `current` - the month the projection is relative to
/// - `assets` - current balances
///
/// **Your plan**:
/// - `incomes`, `expenses`, `rentals`, `mortgages` - monthly streams
/// - `life_events` - lump sums (weddings, cars, housing purchase, severance)
///
/// **World assumptions**:
/// - `settings` - pension amounts, tax and cost coefficients, end age
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Origin month; defaults to the current month when absent
    #[serde(default)]
    pub current: Option<YearMonth>,

    pub profile: Profile,

    #[serde(default)]
    pub settings: SimulationSettings,

    #[serde(default)]
    pub incomes: Vec<IncomeStream>,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub rentals: Vec<Rental>,

    #[serde(default)]
    pub assets: Vec<Asset>,

    #[serde(default)]
    pub mortgages: Vec<Mortgage>,

    #[serde(default)]
    pub life_events: Vec<LifeEvent>,
}

impl SimulationConfig {
    /// Create a new empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The month the projection is relative to.
    pub fn origin(&self) -> YearMonth {
        self.current.unwrap_or_else(YearMonth::now)
    }

    /// Create a variant with a different end age
    #[must_use]
    pub fn with_end_age(&self, end_age: u32) -> Self {
        let mut config = self.clone();
        config.settings.end_age = end_age;
        config
    }

    /// Create a variant anchored at a different origin month
    #[must_use]
    pub fn with_current(&self, current: YearMonth) -> Self {
        let mut config = self.clone();
        config.current = Some(current);
        config
    }
}
