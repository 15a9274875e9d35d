//! Recurring monthly streams and starting balances
//!
//! Income, expense and rental records all share the same shape: an amount
//! active over an inclusive month range, optionally compounding once per
//! elapsed year since the start month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::year_month::YearMonth;

/// A salary-like income with optional bonuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStream {
    #[serde(default)]
    pub name: String,
    /// Monthly take-home pay at the start month
    pub take_home: Money,
    /// Annual raise, compounded per whole year since `start`
    #[serde(default, with = "rust_decimal::serde::float")]
    pub raise_rate: Decimal,
    pub start: YearMonth,
    /// Last paid month, inclusive. `None` pays forever.
    #[serde(default)]
    pub end: Option<YearMonth>,
    /// Calendar months (1-12) that pay a bonus
    #[serde(default)]
    pub bonus_months: Vec<u8>,
    #[serde(default)]
    pub bonus_amount: Money,
    /// First month the `bonus_amount_after` figure applies
    #[serde(default)]
    pub change_year_month: Option<YearMonth>,
    #[serde(default)]
    pub bonus_amount_after: Option<Money>,
}

impl IncomeStream {
    #[must_use]
    pub fn new(name: impl Into<String>, take_home: Money, start: YearMonth) -> Self {
        Self {
            name: name.into(),
            take_home,
            raise_rate: Decimal::ZERO,
            start,
            end: None,
            bonus_months: Vec::new(),
            bonus_amount: Money::ZERO,
            change_year_month: None,
            bonus_amount_after: None,
        }
    }

    #[must_use]
    pub fn raise_rate(mut self, rate: Decimal) -> Self {
        self.raise_rate = rate;
        self
    }

    #[must_use]
    pub fn until(mut self, end: YearMonth) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn bonus(mut self, months: impl IntoIterator<Item = u8>, amount: Money) -> Self {
        self.bonus_months = months.into_iter().collect();
        self.bonus_amount = amount;
        self
    }

    /// Switch to `amount` for bonuses paid on or after `from`.
    #[must_use]
    pub fn bonus_change(mut self, from: YearMonth, amount: Money) -> Self {
        self.change_year_month = Some(from);
        self.bonus_amount_after = Some(amount);
        self
    }
}

/// A living cost that grows with inflation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub category: String,
    pub amount: Money,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub inflation_rate: Decimal,
    pub start: YearMonth,
    #[serde(default)]
    pub end: Option<YearMonth>,
}

impl Expense {
    #[must_use]
    pub fn new(category: impl Into<String>, amount: Money, start: YearMonth) -> Self {
        Self {
            category: category.into(),
            amount,
            inflation_rate: Decimal::ZERO,
            start,
            end: None,
        }
    }

    #[must_use]
    pub fn inflation_rate(mut self, rate: Decimal) -> Self {
        self.inflation_rate = rate;
        self
    }

    #[must_use]
    pub fn until(mut self, end: YearMonth) -> Self {
        self.end = Some(end);
        self
    }
}

/// Rent paid for a home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    #[serde(default)]
    pub name: String,
    pub monthly_rent: Money,
    pub start: YearMonth,
    #[serde(default)]
    pub end: Option<YearMonth>,
    /// Rent stops once a housing purchase with the same key happens
    #[serde(default)]
    pub auto_toggle_key: Option<String>,
}

impl Rental {
    #[must_use]
    pub fn new(name: impl Into<String>, monthly_rent: Money, start: YearMonth) -> Self {
        Self {
            name: name.into(),
            monthly_rent,
            start,
            end: None,
            auto_toggle_key: None,
        }
    }

    #[must_use]
    pub fn until(mut self, end: YearMonth) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn auto_toggle_key(mut self, key: impl Into<String>) -> Self {
        self.auto_toggle_key = Some(key.into());
        self
    }
}

/// Starting balances and the return earned on investments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub cash: Money,
    #[serde(default)]
    pub investment: Money,
    /// Annual return, applied monthly as `rate / 12`
    #[serde(default, with = "rust_decimal::serde::float")]
    pub return_rate: Decimal,
}

/// An amortizing home loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mortgage {
    pub principal: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_interest_rate: Decimal,
    pub years: u32,
    pub start: YearMonth,
}
