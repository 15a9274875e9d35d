//! Household profile and simulation-wide coefficients

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::money::Money;
use crate::year_month::YearMonth;

/// Who the plan is for. Birth year and month anchor every age calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub birth_year: Option<i32>,
    pub birth_month: Option<u8>,
    #[serde(default)]
    pub spouse_birth_year: Option<i32>,
    #[serde(default)]
    pub spouse_birth_month: Option<u8>,
    /// Age at which pensions start paying, for both partners
    #[serde(default)]
    pub pension_start_age: Option<i32>,
}

impl Profile {
    #[must_use]
    pub fn new(birth: YearMonth) -> Self {
        Self {
            birth_year: Some(birth.year()),
            birth_month: Some(birth.month()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_spouse(mut self, birth: YearMonth) -> Self {
        self.spouse_birth_year = Some(birth.year());
        self.spouse_birth_month = Some(birth.month());
        self
    }

    #[must_use]
    pub fn with_pension_start_age(mut self, age: i32) -> Self {
        self.pension_start_age = Some(age);
        self
    }

    /// Birth month of the primary household member.
    ///
    /// Missing parts and out-of-range months are both fatal for a run.
    pub fn birth(&self) -> Result<YearMonth, SimulationError> {
        match (self.birth_year, self.birth_month) {
            (Some(year), Some(month)) => {
                Ok(YearMonth::from_parts(i64::from(year), i64::from(month))?)
            }
            _ => Err(SimulationError::MissingBirthDate),
        }
    }

    /// Spouse birth month; `None` unless both parts are present.
    pub fn spouse_birth(&self) -> Result<Option<YearMonth>, SimulationError> {
        match (self.spouse_birth_year, self.spouse_birth_month) {
            (Some(year), Some(month)) => Ok(Some(YearMonth::from_parts(
                i64::from(year),
                i64::from(month),
            )?)),
            _ => Ok(None),
        }
    }
}

fn default_end_age() -> u32 {
    100
}

fn default_transaction_cost_rate() -> Decimal {
    Decimal::ONE
}

fn default_real_estate_tax_rate() -> Decimal {
    // 1.4% standard fixed-asset tax rate
    Decimal::new(14, 3)
}

fn default_real_estate_evaluation_rate() -> Decimal {
    Decimal::new(7, 1)
}

/// Scalar coefficients shared by the whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Months between the current month and the first projected month
    #[serde(default)]
    pub start_offset_months: i64,

    /// Age of the primary member at the last projected month
    #[serde(default = "default_end_age")]
    pub end_age: u32,

    /// Monthly pension paid to the primary member
    #[serde(default)]
    pub pension_amount: Money,

    /// Monthly pension paid to the spouse
    #[serde(default)]
    pub spouse_pension_amount: Money,

    /// Multiplier over the purchase price covering fees and closing costs
    #[serde(
        default = "default_transaction_cost_rate",
        with = "rust_decimal::serde::float"
    )]
    pub mortgage_transaction_cost_rate: Decimal,

    #[serde(
        default = "default_real_estate_tax_rate",
        with = "rust_decimal::serde::float"
    )]
    pub real_estate_tax_rate: Decimal,

    /// Share of the purchase price used as the assessed value
    #[serde(
        default = "default_real_estate_evaluation_rate",
        with = "rust_decimal::serde::float"
    )]
    pub real_estate_evaluation_rate: Decimal,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            start_offset_months: 0,
            end_age: default_end_age(),
            pension_amount: Money::ZERO,
            spouse_pension_amount: Money::ZERO,
            mortgage_transaction_cost_rate: default_transaction_cost_rate(),
            real_estate_tax_rate: default_real_estate_tax_rate(),
            real_estate_evaluation_rate: default_real_estate_evaluation_rate(),
        }
    }
}
