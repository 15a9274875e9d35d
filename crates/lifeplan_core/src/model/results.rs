//! Simulation results
//!
//! One `TimelineMonth` per projected calendar month, in order, plus the first
//! month at which the household's total balance turns negative.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::year_month::YearMonth;

/// A single projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMonth {
    pub year_month: YearMonth,
    pub age: i32,
    pub spouse_age: Option<i32>,
    pub total_income: Money,
    pub total_expense: Money,
    /// Net of all non-income life events this month
    pub event_amount: Money,
    pub net_cashflow: Money,
    pub cash_balance: Money,
    pub investment_balance: Money,
    pub total_balance: Money,
}

impl TimelineMonth {
    /// A month with ages set and every amount zero, filled in by the projector.
    pub fn skeleton(year_month: YearMonth, age: i32, spouse_age: Option<i32>) -> Self {
        Self {
            year_month,
            age,
            spouse_age,
            total_income: Money::ZERO,
            total_expense: Money::ZERO,
            event_amount: Money::ZERO,
            net_cashflow: Money::ZERO,
            cash_balance: Money::ZERO,
            investment_balance: Money::ZERO,
            total_balance: Money::ZERO,
        }
    }
}

/// Calendar-year roll-up of the monthly rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    /// Age in the last projected month of the year
    pub age: i32,
    pub total_income: Money,
    pub total_expense: Money,
    pub event_amount: Money,
    pub net_cashflow: Money,
    pub cash_balance: Money,
    pub investment_balance: Money,
    pub total_balance: Money,
}

/// Complete results from a single simulation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub months: Vec<TimelineMonth>,
    /// First month with a negative total balance
    pub depletion_year_month: Option<YearMonth>,
}

impl SimulationResult {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Row for a specific month, if it is inside the window
    pub fn month(&self, year_month: YearMonth) -> Option<&TimelineMonth> {
        let first = self.months.first()?;
        let offset = usize::try_from(year_month.months_since(first.year_month)).ok()?;
        self.months.get(offset)
    }

    pub fn final_month(&self) -> Option<&TimelineMonth> {
        self.months.last()
    }

    /// Age of the primary member in the depletion month
    pub fn depletion_age(&self) -> Option<i32> {
        self.month(self.depletion_year_month?).map(|m| m.age)
    }

    /// Roll the monthly rows up into calendar years.
    ///
    /// Flows are summed; balances are taken from the last month of the year.
    pub fn yearly_summaries(&self) -> Vec<YearlySummary> {
        let mut summaries: Vec<YearlySummary> = Vec::new();
        for month in &self.months {
            match summaries.last_mut() {
                Some(summary) if summary.year == month.year_month.year() => {
                    summary.age = month.age;
                    summary.total_income += month.total_income;
                    summary.total_expense += month.total_expense;
                    summary.event_amount += month.event_amount;
                    summary.net_cashflow += month.net_cashflow;
                    summary.cash_balance = month.cash_balance;
                    summary.investment_balance = month.investment_balance;
                    summary.total_balance = month.total_balance;
                }
                _ => summaries.push(YearlySummary {
                    year: month.year_month.year(),
                    age: month.age,
                    total_income: month.total_income,
                    total_expense: month.total_expense,
                    event_amount: month.event_amount,
                    net_cashflow: month.net_cashflow,
                    cash_balance: month.cash_balance,
                    investment_balance: month.investment_balance,
                    total_balance: month.total_balance,
                }),
            }
        }
        summaries
    }
}
