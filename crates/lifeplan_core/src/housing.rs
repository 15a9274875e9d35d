//! Housing purchase derivation
//!
//! A housing purchase turns into a loan principal and a recurring monthly
//! property tax. The principal is rounded once, as
//! `round((building + land) * transaction_rate - down_payment)`. The tax
//! chain follows the tax office convention and rounds three different ways:
//!
//! ```text
//! assessed    = truncate((building + land) * evaluation_rate)
//! annual_tax  = truncate(assessed * tax_rate)
//! monthly_tax = ceiling(annual_tax / 12)
//! ```
//!
//! Changing the step at which any of these rounds shifts the totals.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, Result, SimulationError};
use crate::model::{EventField, LifeEvent, Mortgage, SimulationSettings};
use crate::money::{Money, Rounding};
use crate::year_month::YearMonth;

/// Price fields every housing purchase must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HousingTerms {
    pub building_price: Money,
    pub land_price: Money,
    pub down_payment: Money,
}

impl HousingTerms {
    /// Pull the price fields off a housing-purchase event.
    ///
    /// A missing field is a data error, never a zero.
    pub fn from_event(event: &LifeEvent, event_index: usize) -> Result<Self> {
        let require = |value: Option<Money>, field: EventField| {
            value.ok_or(SimulationError::MissingEventField { event_index, field })
        };
        Ok(Self {
            building_price: require(event.building_price, EventField::BuildingPrice)?,
            land_price: require(event.land_price, EventField::LandPrice)?,
            down_payment: require(event.down_payment, EventField::DownPayment)?,
        })
    }

    pub fn purchase_price(&self) -> std::result::Result<Money, MoneyError> {
        self.building_price.checked_add(self.land_price)
    }
}

/// Financial figures derived from one housing purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingDerivation {
    pub event_index: usize,
    pub purchase_month: YearMonth,
    pub auto_toggle_key: Option<String>,
    pub principal: Money,
    pub assessed_value: Money,
    pub annual_tax: Money,
    pub monthly_tax: Money,
}

impl HousingDerivation {
    /// Property tax is charged from the purchase month onward.
    pub fn tax_for_month(&self, month: YearMonth) -> Money {
        if month.is_before(self.purchase_month) {
            Money::ZERO
        } else {
            self.monthly_tax
        }
    }
}

/// Derive principal and property tax for the housing purchase at `event_index`.
pub fn derive_housing(
    event: &LifeEvent,
    event_index: usize,
    settings: &SimulationSettings,
) -> Result<HousingDerivation> {
    let terms = HousingTerms::from_event(event, event_index)?;
    let price = terms.purchase_price()?;

    // Rounded once, after the down payment comes off
    let gross = price
        .as_decimal()
        .checked_mul(settings.mortgage_transaction_cost_rate)
        .ok_or(MoneyError::Overflow)?;
    let principal = Money::from_decimal(gross)
        .checked_sub(terms.down_payment)?
        .round(Rounding::Round);
    let assessed_value = price.mul(settings.real_estate_evaluation_rate, Rounding::Truncate)?;
    let annual_tax = assessed_value.mul(settings.real_estate_tax_rate, Rounding::Truncate)?;
    let monthly_tax = annual_tax.div(Decimal::from(12), Rounding::Ceiling)?;

    Ok(HousingDerivation {
        event_index,
        purchase_month: event.year_month,
        auto_toggle_key: event.auto_toggle_key.clone(),
        principal,
        assessed_value,
        annual_tax,
        monthly_tax,
    })
}

/// Derivations for every housing purchase in `events`, in input order.
pub fn derive_all(
    events: &[LifeEvent],
    settings: &SimulationSettings,
) -> Result<Vec<HousingDerivation>> {
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.is_housing_purchase())
        .map(|(index, event)| derive_housing(event, index, settings))
        .collect()
}

/// Month from which a rental keyed `key` stops: the earliest purchase sharing
/// the key. Later purchases with the same key do not move it.
pub fn rental_stop_month(derivations: &[HousingDerivation], key: &str) -> Option<YearMonth> {
    derivations
        .iter()
        .filter(|d| d.auto_toggle_key.as_deref() == Some(key))
        .map(|d| d.purchase_month)
        .min()
}

impl Mortgage {
    fn payment_count(&self) -> u32 {
        self.years.saturating_mul(12)
    }

    /// Level monthly payment for a fully amortizing loan, rounded up.
    pub fn monthly_payment(&self) -> std::result::Result<Money, MoneyError> {
        let payments = self.payment_count();
        if payments == 0 {
            return Ok(self.principal);
        }
        let monthly_rate = self.annual_interest_rate / Decimal::from(12);
        if monthly_rate.is_zero() {
            return self
                .principal
                .div(Decimal::from(payments), Rounding::Ceiling);
        }
        let growth = (Decimal::ONE + monthly_rate)
            .checked_powu(u64::from(payments))
            .ok_or(MoneyError::Overflow)?;
        let factor = monthly_rate
            .checked_mul(growth)
            .and_then(|n| n.checked_div(growth - Decimal::ONE))
            .ok_or(MoneyError::Overflow)?;
        self.principal.mul(factor, Rounding::Ceiling)
    }

    /// Whether a payment falls due in `month`.
    pub fn is_active(&self, month: YearMonth) -> bool {
        let elapsed = month.months_since(self.start);
        elapsed >= 0 && elapsed < i64::from(self.payment_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LifeEventCategory;
    use rust_decimal_macros::dec;

    fn ym(s: &str) -> YearMonth {
        YearMonth::parse(s).unwrap()
    }

    #[test]
    fn test_missing_field_is_reported_by_name() {
        let mut event = LifeEvent::housing_purchase(
            ym("2030-04"),
            Money::new(-5_000_000),
            Money::new(20_000_000),
            Money::new(10_000_000),
            Money::new(5_000_000),
        );
        event.land_price = None;
        let err = HousingTerms::from_event(&event, 3).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::MissingEventField {
                event_index: 3,
                field: EventField::LandPrice
            }
        ));
        assert!(err.to_string().contains("land_price"));
    }

    #[test]
    fn test_non_housing_event_has_no_terms() {
        let event = LifeEvent::new(LifeEventCategory::Car, Money::new(-1), ym("2030-04"));
        assert!(HousingTerms::from_event(&event, 0).is_err());
    }

    #[test]
    fn test_mortgage_payment_zero_rate() {
        let mortgage = Mortgage {
            principal: Money::new(1_200_000),
            annual_interest_rate: Decimal::ZERO,
            years: 10,
            start: ym("2030-01"),
        };
        assert_eq!(mortgage.monthly_payment().unwrap(), Money::new(10_000));
    }

    #[test]
    fn test_mortgage_payment_with_interest() {
        // 30M over 35 years at 1.2%: about 87,510 per month
        let mortgage = Mortgage {
            principal: Money::new(30_000_000),
            annual_interest_rate: dec!(0.012),
            years: 35,
            start: ym("2030-01"),
        };
        let payment = mortgage.monthly_payment().unwrap();
        assert!(
            payment > Money::new(87_400) && payment < Money::new(87_600),
            "unexpected payment {payment}"
        );
    }

    #[test]
    fn test_mortgage_active_range() {
        let mortgage = Mortgage {
            principal: Money::new(1_200_000),
            annual_interest_rate: Decimal::ZERO,
            years: 1,
            start: ym("2030-01"),
        };
        assert!(!mortgage.is_active(ym("2029-12")));
        assert!(mortgage.is_active(ym("2030-01")));
        assert!(mortgage.is_active(ym("2030-12")));
        assert!(!mortgage.is_active(ym("2031-01")));
    }
}
