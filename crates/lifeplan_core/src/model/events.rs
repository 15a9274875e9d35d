//! Life events - one-off or recurring lump sums
//!
//! A `LifeEvent` is a template. The expander in [`crate::life_events`] turns
//! each template into concrete [`EventOccurrence`]s inside the projection
//! window.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::year_month::YearMonth;

/// Closed set of event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeEventCategory {
    Marriage,
    Childbirth,
    Education,
    Car,
    Travel,
    Medical,
    Caregiving,
    /// Buying a home; carries price and down-payment fields
    HousingPurchase,
    /// Severance lump sum, counted as income
    RetirementBonus,
    #[default]
    Other,
}

/// Fields a category may require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    BuildingPrice,
    LandPrice,
    DownPayment,
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventField::BuildingPrice => "building_price",
            EventField::LandPrice => "land_price",
            EventField::DownPayment => "down_payment",
        };
        f.write_str(name)
    }
}

/// A lump sum anchored at a month, optionally repeating
///
/// `amount` is signed: costs are negative, windfalls positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    #[serde(default)]
    pub name: String,
    pub amount: Money,
    pub year_month: YearMonth,
    #[serde(default)]
    pub category: LifeEventCategory,
    /// Years between occurrences; `None` or `<= 0` means one-off
    #[serde(default)]
    pub repeat_interval_years: Option<i32>,
    /// Last age (inclusive) at which the event still occurs
    #[serde(default)]
    pub stop_after_age: Option<i32>,
    #[serde(default)]
    pub stop_after_occurrences: Option<u32>,
    #[serde(default)]
    pub building_price: Option<Money>,
    #[serde(default)]
    pub land_price: Option<Money>,
    #[serde(default)]
    pub down_payment: Option<Money>,
    /// Links a housing purchase to the rental it replaces
    #[serde(default)]
    pub auto_toggle_key: Option<String>,
}

impl LifeEvent {
    #[must_use]
    pub fn new(category: LifeEventCategory, amount: Money, year_month: YearMonth) -> Self {
        Self {
            name: String::new(),
            amount,
            year_month,
            category,
            repeat_interval_years: None,
            stop_after_age: None,
            stop_after_occurrences: None,
            building_price: None,
            land_price: None,
            down_payment: None,
            auto_toggle_key: None,
        }
    }

    /// A home purchase. `amount` is the cash moved in the purchase month
    /// (typically the negative down payment).
    #[must_use]
    pub fn housing_purchase(
        year_month: YearMonth,
        amount: Money,
        building_price: Money,
        land_price: Money,
        down_payment: Money,
    ) -> Self {
        Self {
            building_price: Some(building_price),
            land_price: Some(land_price),
            down_payment: Some(down_payment),
            ..Self::new(LifeEventCategory::HousingPurchase, amount, year_month)
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn every_years(mut self, years: i32) -> Self {
        self.repeat_interval_years = Some(years);
        self
    }

    #[must_use]
    pub fn stop_after_age(mut self, age: i32) -> Self {
        self.stop_after_age = Some(age);
        self
    }

    #[must_use]
    pub fn stop_after_occurrences(mut self, count: u32) -> Self {
        self.stop_after_occurrences = Some(count);
        self
    }

    #[must_use]
    pub fn auto_toggle_key(mut self, key: impl Into<String>) -> Self {
        self.auto_toggle_key = Some(key.into());
        self
    }

    pub fn is_housing_purchase(&self) -> bool {
        self.category == LifeEventCategory::HousingPurchase
    }

    pub fn is_retirement_bonus(&self) -> bool {
        self.category == LifeEventCategory::RetirementBonus
    }

    /// Recurrence step in months, if the event repeats.
    pub fn interval_months(&self) -> Option<i64> {
        self.repeat_interval_years
            .filter(|years| *years > 0)
            .map(|years| i64::from(years) * 12)
    }
}

/// One concrete occurrence of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOccurrence {
    /// Position of the template in the input list
    pub event_index: usize,
    pub year_month: YearMonth,
    /// 1-based count, including occurrences before the window
    pub occurrence: u32,
}
