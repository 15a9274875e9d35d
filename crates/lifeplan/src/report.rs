//! Rendering simulation results for the terminal

use clap::ValueEnum;
use color_eyre::eyre::{WrapErr, eyre};
use lifeplan_core::Money;
use lifeplan_core::model::{SimulationResult, TimelineMonth, YearlySummary};

/// How the result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per month
    Table,
    /// One row per calendar year
    Yearly,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn is_table(self) -> bool {
        matches!(self, OutputFormat::Table | OutputFormat::Yearly)
    }
}

const COLUMNS: [&str; 7] = [
    "Income",
    "Expense",
    "Events",
    "Net",
    "Cash",
    "Investment",
    "Total",
];

/// Whole units with thousands separators, e.g. `-1,234,567`
pub fn format_amount(value: Money) -> String {
    let whole = value.as_decimal().round();
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn header(first: &str) -> String {
    let mut line = format!("{first:<8} {:>4}", "Age");
    for column in COLUMNS {
        line.push_str(&format!(" {column:>15}"));
    }
    line
}

fn line(label: &str, age: i32, amounts: [Money; 7]) -> String {
    let mut line = format!("{label:<8} {age:>4}");
    for amount in amounts {
        line.push_str(&format!(" {:>15}", format_amount(amount)));
    }
    line
}

fn monthly_table(months: &[TimelineMonth]) -> String {
    let mut out = header("Month");
    out.push('\n');
    for m in months {
        out.push_str(&line(
            &m.year_month.to_string(),
            m.age,
            [
                m.total_income,
                m.total_expense,
                m.event_amount,
                m.net_cashflow,
                m.cash_balance,
                m.investment_balance,
                m.total_balance,
            ],
        ));
        out.push('\n');
    }
    out
}

fn yearly_table(years: &[YearlySummary]) -> String {
    let mut out = header("Year");
    out.push('\n');
    for y in years {
        out.push_str(&line(
            &y.year.to_string(),
            y.age,
            [
                y.total_income,
                y.total_expense,
                y.event_amount,
                y.net_cashflow,
                y.cash_balance,
                y.investment_balance,
                y.total_balance,
            ],
        ));
        out.push('\n');
    }
    out
}

pub fn render(result: &SimulationResult, format: OutputFormat) -> color_eyre::Result<String> {
    match format {
        OutputFormat::Table => Ok(monthly_table(&result.months)),
        OutputFormat::Yearly => Ok(yearly_table(&result.yearly_summaries())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).wrap_err("serializing result as JSON")
        }
        OutputFormat::Yaml => {
            serde_saphyr::to_string(result).map_err(|e| eyre!("serializing result as YAML: {e}"))
        }
    }
}

/// One-line verdict on whether the household runs out of money
pub fn depletion_line(result: &SimulationResult) -> String {
    match (result.depletion_year_month, result.depletion_age()) {
        (Some(month), Some(age)) => format!("Balance turns negative in {month} (age {age})"),
        (Some(month), None) => format!("Balance turns negative in {month}"),
        _ => "Balance stays non-negative through the end age".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeplan_core::model::{Expense, IncomeStream};
    use lifeplan_core::{SimulationBuilder, YearMonth, simulate};

    fn ym(s: &str) -> YearMonth {
        YearMonth::parse(s).unwrap()
    }

    fn sample_result() -> SimulationResult {
        let config = SimulationBuilder::new()
            .current(ym("2025-10"))
            .birth(ym("1990-01"))
            .end_age(36)
            .income(IncomeStream::new("Salary", Money::new(300_000), ym("2025-10")))
            .expense(Expense::new("Living", Money::new(1_250_000), ym("2026-01")))
            .build();
        simulate(&config).unwrap()
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(Money::ZERO), "0");
        assert_eq!(format_amount(Money::new(100)), "100");
        assert_eq!(format_amount(Money::new(1_000)), "1,000");
        assert_eq!(format_amount(Money::new(1_234_567)), "1,234,567");
        assert_eq!(format_amount(Money::new(-202)), "-202");
        assert_eq!(format_amount(Money::new(-12_345)), "-12,345");
    }

    #[test]
    fn test_monthly_table_has_row_per_month() {
        let result = sample_result();
        let table = render(&result, OutputFormat::Table).unwrap();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), result.months.len() + 1);
        assert!(lines[0].starts_with("Month"));
        assert!(lines[1].starts_with("2025-10"));
        assert!(lines[1].contains("300,000"));
    }

    #[test]
    fn test_yearly_table_has_row_per_year() {
        let result = sample_result();
        let table = render(&result, OutputFormat::Yearly).unwrap();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2025"));
        // Three months of salary
        assert!(lines[1].contains("900,000"));
        assert!(lines[2].starts_with("2026"));
    }

    #[test]
    fn test_json_output() {
        let result = sample_result();
        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["months"][0]["year_month"], "2025-10");
        assert_eq!(value["depletion_year_month"], "2026-01");
    }

    #[test]
    fn test_depletion_line() {
        let result = sample_result();
        assert_eq!(
            depletion_line(&result),
            "Balance turns negative in 2026-01 (age 36)"
        );
        assert_eq!(
            depletion_line(&SimulationResult::default()),
            "Balance stays non-negative through the end age"
        );
    }
}
