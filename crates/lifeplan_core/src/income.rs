//! Monthly stream evaluation
//!
//! Incomes, expenses and rentals share one shape: an amount active over an
//! inclusive month range that compounds once per whole year since its start.
//! Incomes add the bonus schedule on top.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::MoneyError;
use crate::model::{Expense, IncomeStream, Rental};
use crate::money::{Money, Rounding};
use crate::year_month::YearMonth;

/// `amount * (1 + rate)^years`, rounded to whole units.
pub fn compound(amount: Money, rate: Decimal, years: u32) -> Result<Money, MoneyError> {
    if years == 0 || rate.is_zero() {
        return Ok(amount);
    }
    let factor = (Decimal::ONE + rate)
        .checked_powu(u64::from(years))
        .ok_or(MoneyError::Overflow)?;
    amount.mul(factor, Rounding::Round)
}

/// Contribution of a ranged, compounding amount for `month`; zero outside
/// `[start, end]`.
pub fn scheduled_amount(
    amount: Money,
    rate: Decimal,
    start: YearMonth,
    end: Option<YearMonth>,
    month: YearMonth,
) -> Result<Money, MoneyError> {
    if !month.is_within(start, end) {
        return Ok(Money::ZERO);
    }
    compound(amount, rate, month.elapsed_years_since(start))
}

/// Bonus paid by `stream` in `month`, ignoring the stream's active range.
///
/// The post-change amount applies from the change month itself onward.
pub fn bonus_for_month(stream: &IncomeStream, month: YearMonth) -> Money {
    if !stream.bonus_months.contains(&month.month()) {
        return Money::ZERO;
    }
    match (stream.change_year_month, stream.bonus_amount_after) {
        (Some(change), Some(after)) if !month.is_before(change) => after,
        _ => stream.bonus_amount,
    }
}

/// Take-home pay (with raises) plus any bonus for `month`.
pub fn income_for_month(stream: &IncomeStream, month: YearMonth) -> Result<Money, MoneyError> {
    if !month.is_within(stream.start, stream.end) {
        return Ok(Money::ZERO);
    }
    let base = scheduled_amount(
        stream.take_home,
        stream.raise_rate,
        stream.start,
        stream.end,
        month,
    )?;
    base.checked_add(bonus_for_month(stream, month))
}

/// Inflated expense amount for `month`.
pub fn expense_for_month(expense: &Expense, month: YearMonth) -> Result<Money, MoneyError> {
    scheduled_amount(
        expense.amount,
        expense.inflation_rate,
        expense.start,
        expense.end,
        month,
    )
}

/// Rent due in `month`. `stop_from` ends the rental early, starting that month.
pub fn rent_for_month(rental: &Rental, month: YearMonth, stop_from: Option<YearMonth>) -> Money {
    if stop_from.is_some_and(|stop| !month.is_before(stop)) {
        return Money::ZERO;
    }
    if month.is_within(rental.start, rental.end) {
        rental.monthly_rent
    } else {
        Money::ZERO
    }
}
