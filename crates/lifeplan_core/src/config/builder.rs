//! Simulation Builder
//!
//! Fluent construction of a [`SimulationConfig`]. Records are passed in fully
//! formed (see the `#[must_use]` helpers on `IncomeStream`, `LifeEvent`, etc.);
//! the builder only collects them and fills in the profile and settings.

use rust_decimal::Decimal;

use super::SimulationConfig;
use crate::model::{Asset, Expense, IncomeStream, LifeEvent, Mortgage, Profile, Rental};
use crate::money::Money;
use crate::year_month::YearMonth;

/// Builder for creating simulation inputs
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl SimulationBuilder {
    /// Create a new simulation builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Basic Configuration
    // =========================================================================

    /// Set the origin month
    #[must_use]
    pub fn current(mut self, current: YearMonth) -> Self {
        self.config.current = Some(current);
        self
    }

    /// Set the primary member's birth month
    #[must_use]
    pub fn birth(mut self, birth: YearMonth) -> Self {
        self.config.profile.birth_year = Some(birth.year());
        self.config.profile.birth_month = Some(birth.month());
        self
    }

    #[must_use]
    pub fn spouse_birth(mut self, birth: YearMonth) -> Self {
        self.config.profile = self.config.profile.with_spouse(birth);
        self
    }

    #[must_use]
    pub fn profile(mut self, profile: Profile) -> Self {
        self.config.profile = profile;
        self
    }

    #[must_use]
    pub fn start_offset_months(mut self, months: i64) -> Self {
        self.config.settings.start_offset_months = months;
        self
    }

    #[must_use]
    pub fn end_age(mut self, age: u32) -> Self {
        self.config.settings.end_age = age;
        self
    }

    // =========================================================================
    // Pensions and housing coefficients
    // =========================================================================

    /// Monthly pensions paid once each partner reaches `start_age`
    #[must_use]
    pub fn pension(mut self, start_age: i32, amount: Money, spouse_amount: Money) -> Self {
        self.config.profile.pension_start_age = Some(start_age);
        self.config.settings.pension_amount = amount;
        self.config.settings.spouse_pension_amount = spouse_amount;
        self
    }

    #[must_use]
    pub fn housing_rates(
        mut self,
        transaction_cost_rate: Decimal,
        evaluation_rate: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        self.config.settings.mortgage_transaction_cost_rate = transaction_cost_rate;
        self.config.settings.real_estate_evaluation_rate = evaluation_rate;
        self.config.settings.real_estate_tax_rate = tax_rate;
        self
    }

    // =========================================================================
    // Records
    // =========================================================================

    #[must_use]
    pub fn assets(mut self, cash: Money, investment: Money, return_rate: Decimal) -> Self {
        self.config.assets.push(Asset {
            cash,
            investment,
            return_rate,
        });
        self
    }

    #[must_use]
    pub fn income(mut self, income: IncomeStream) -> Self {
        self.config.incomes.push(income);
        self
    }

    #[must_use]
    pub fn expense(mut self, expense: Expense) -> Self {
        self.config.expenses.push(expense);
        self
    }

    #[must_use]
    pub fn rental(mut self, rental: Rental) -> Self {
        self.config.rentals.push(rental);
        self
    }

    #[must_use]
    pub fn mortgage(mut self, mortgage: Mortgage) -> Self {
        self.config.mortgages.push(mortgage);
        self
    }

    #[must_use]
    pub fn event(mut self, event: LifeEvent) -> Self {
        self.config.life_events.push(event);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> SimulationConfig {
        self.config
    }
}
