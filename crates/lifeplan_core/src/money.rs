//! Fixed-point monetary amounts.
//!
//! Amounts are held as exact decimals. Multiplying or dividing by a rate can
//! produce fractional currency units, so those operations take a [`Rounding`]
//! from the caller and always land on whole units. There is deliberately no
//! `Mul`/`Div` operator for `Money`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// How a fractional result is resolved to whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rounding {
    /// Toward zero
    Truncate,
    /// Nearest unit, halves away from zero
    Round,
    /// Toward positive infinity
    Ceiling,
}

impl Rounding {
    fn apply(self, value: Decimal) -> Decimal {
        match self {
            Rounding::Truncate => value.trunc(),
            Rounding::Round => {
                value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
            Rounding::Ceiling => value.ceil(),
        }
    }
}

/// An exact monetary amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Money(value)
    }

    /// Convert a plain number, keeping its shortest decimal representation.
    pub fn from_f64(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite(value));
        }
        Decimal::from_f64(value)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(self) -> Self {
        Money(self.0.abs())
    }

    pub fn checked_add(self, other: Money) -> Result<Self, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    pub fn checked_sub(self, other: Money) -> Result<Self, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Resolve any fractional part to whole units.
    pub fn round(self, rounding: Rounding) -> Self {
        Money(rounding.apply(self.0))
    }

    /// Multiply by a scalar, resolving the product to whole units.
    pub fn mul(self, factor: Decimal, rounding: Rounding) -> Result<Self, MoneyError> {
        self.0
            .checked_mul(factor)
            .map(|v| Money(rounding.apply(v)))
            .ok_or(MoneyError::Overflow)
    }

    /// Divide by a scalar, resolving the quotient to whole units.
    pub fn div(self, divisor: Decimal, rounding: Rounding) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.0
            .checked_div(divisor)
            .map(|v| Money(rounding.apply(v)))
            .ok_or(MoneyError::Overflow)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money::new(units)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounding_modes_on_positive_fraction() {
        let amount = Money::new(10);
        assert_eq!(amount.mul(dec!(0.25), Rounding::Truncate).unwrap(), Money::new(2));
        assert_eq!(amount.mul(dec!(0.25), Rounding::Round).unwrap(), Money::new(3));
        assert_eq!(amount.mul(dec!(0.25), Rounding::Ceiling).unwrap(), Money::new(3));
        assert_eq!(amount.mul(dec!(0.21), Rounding::Round).unwrap(), Money::new(2));
    }

    #[test]
    fn test_rounding_modes_on_negative_fraction() {
        let amount = Money::new(-10);
        assert_eq!(amount.mul(dec!(0.25), Rounding::Truncate).unwrap(), Money::new(-2));
        assert_eq!(amount.mul(dec!(0.25), Rounding::Round).unwrap(), Money::new(-3));
        assert_eq!(amount.mul(dec!(0.25), Rounding::Ceiling).unwrap(), Money::new(-2));
    }

    #[test]
    fn test_division() {
        let annual = Money::new(294_001);
        assert_eq!(annual.div(dec!(12), Rounding::Ceiling).unwrap(), Money::new(24_501));
        assert_eq!(annual.div(dec!(12), Rounding::Truncate).unwrap(), Money::new(24_500));
        assert_eq!(
            annual.div(Decimal::ZERO, Rounding::Round),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_no_float_drift_across_additions() {
        let tenth = Money::from_f64(0.1).unwrap();
        let total: Money = std::iter::repeat_n(tenth, 10).sum();
        assert_eq!(total, Money::new(1));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(matches!(Money::from_f64(f64::NAN), Err(MoneyError::NotFinite(_))));
        assert!(Money::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_arithmetic_and_comparison() {
        let a = Money::new(1_000);
        let b = Money::new(1_500);
        assert_eq!(b - a, Money::new(500));
        assert_eq!(a - b, Money::new(-500));
        assert!((a - b).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(a < b);
        assert_eq!(-a, Money::new(-1_000));
        assert_eq!((a - b).abs(), Money::new(500));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Money::from_decimal(Decimal::MAX);
        assert_eq!(max.checked_add(Money::new(1)), Err(MoneyError::Overflow));
        assert_eq!(
            Money::from_decimal(Decimal::MIN).checked_sub(Money::new(1)),
            Err(MoneyError::Overflow)
        );
        assert_eq!(
            Money::new(1_000).checked_sub(Money::new(1_500)),
            Ok(Money::new(-500))
        );
        assert_eq!(max.checked_sub(Money::new(1)).unwrap() + Money::new(1), max);
    }

    #[test]
    fn test_round_resolves_fraction_once() {
        let amount = Money::from_decimal(dec!(1001.0005));
        assert_eq!(amount.round(Rounding::Round), Money::new(1_001));
        assert_eq!(amount.round(Rounding::Ceiling), Money::new(1_002));
        assert_eq!(Money::from_decimal(dec!(-2.5)).round(Rounding::Round), Money::new(-3));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::new(24_500)).unwrap();
        assert_eq!(json, "24500.0");
        let parsed: Money = serde_json::from_str("1234.5").unwrap();
        assert_eq!(parsed, Money::from_decimal(dec!(1234.5)));
        let parsed: Money = serde_json::from_str("300").unwrap();
        assert_eq!(parsed, Money::new(300));
    }
}
