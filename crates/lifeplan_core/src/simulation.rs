use crate::config::SimulationConfig;
use crate::error::Result;
use crate::income::{expense_for_month, income_for_month, rent_for_month};
use crate::model::{SimulationResult, TimelineMonth};
use crate::money::Money;
use crate::simulation_state::{Balances, ProjectionContext};
use crate::timeline::{build_timeline, window};

/// Project the household month by month from the origin to the end age.
///
/// Deterministic: identical inputs (with `current` set) give identical output.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationResult> {
    let current = config.origin();
    let settings = &config.settings;

    let skeletons = build_timeline(
        current,
        settings.start_offset_months,
        settings.end_age,
        &config.profile,
    )?;
    let bounds = window(
        current,
        settings.start_offset_months,
        settings.end_age,
        &config.profile,
    )?;
    let ctx = ProjectionContext::from_config(config, bounds)?;

    let _span = tracing::debug_span!(
        "simulate",
        %current,
        months = skeletons.len(),
        occurrences = ctx.occurrences.len()
    )
    .entered();

    let mut months = Vec::with_capacity(skeletons.len());
    skeletons
        .into_iter()
        .try_fold(ctx.opening, |balances, skeleton| -> Result<Balances> {
            let (row, next) = project_month(&ctx, skeleton, balances)?;
            months.push(row);
            Ok(next)
        })?;

    let depletion_year_month = months
        .iter()
        .find(|m| m.total_balance.is_negative())
        .map(|m| m.year_month);
    if let Some(depleted) = depletion_year_month {
        tracing::debug!(%depleted, "total balance turns negative");
    }

    Ok(SimulationResult {
        months,
        depletion_year_month,
    })
}

/// Fill in one skeleton row and return the balances carried into the next month.
fn project_month(
    ctx: &ProjectionContext<'_>,
    skeleton: TimelineMonth,
    balances: Balances,
) -> Result<(TimelineMonth, Balances)> {
    let config = ctx.config;
    let month = skeleton.year_month;

    let mut total_income = Money::ZERO;
    for stream in &config.incomes {
        total_income = total_income.checked_add(income_for_month(stream, month)?)?;
    }
    if let Some(pension_age) = config.profile.pension_start_age {
        if skeleton.age >= pension_age {
            total_income = total_income.checked_add(config.settings.pension_amount)?;
        }
        if skeleton.spouse_age.is_some_and(|age| age >= pension_age) {
            total_income = total_income.checked_add(config.settings.spouse_pension_amount)?;
        }
    }

    let mut event_amount = Money::ZERO;
    for event in ctx.events_in(month) {
        if event.is_retirement_bonus() {
            total_income = total_income.checked_add(event.amount)?;
        } else {
            event_amount = event_amount.checked_add(event.amount)?;
        }
    }

    let mut total_expense = Money::ZERO;
    for expense in &config.expenses {
        total_expense = total_expense.checked_add(expense_for_month(expense, month)?)?;
    }
    for (rental, stop) in config.rentals.iter().zip(&ctx.rental_stops) {
        total_expense = total_expense.checked_add(rent_for_month(rental, month, *stop))?;
    }
    for housing in &ctx.housing {
        total_expense = total_expense.checked_add(housing.tax_for_month(month))?;
    }

    let net_cashflow = total_income
        .checked_sub(total_expense)?
        .checked_add(event_amount)?;
    let next = balances.advance(net_cashflow, ctx.monthly_return)?;

    let row = TimelineMonth {
        total_income,
        total_expense,
        event_amount,
        net_cashflow,
        cash_balance: next.cash,
        investment_balance: next.investment,
        total_balance: next.total()?,
        ..skeleton
    };
    Ok((row, next))
}

/// Run independent households, preserving input order.
#[cfg(feature = "parallel")]
pub fn simulate_batch(configs: &[SimulationConfig]) -> Vec<Result<SimulationResult>> {
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    configs.par_iter().map(simulate).collect()
}

/// Run independent households, preserving input order.
#[cfg(not(feature = "parallel"))]
pub fn simulate_batch(configs: &[SimulationConfig]) -> Vec<Result<SimulationResult>> {
    configs.iter().map(simulate).collect()
}
