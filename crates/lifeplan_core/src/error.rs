use std::fmt;

use crate::model::EventField;

/// Errors related to calendar values
#[derive(Debug)]
pub enum CalendarError {
    /// String is neither `YYYY-MM` nor an ISO date
    Malformed(String),
    MonthOutOfRange(i64),
    YearOutOfRange(i64),
    /// Month arithmetic left the supported year range
    Overflow { base: String, months: i64 },
    /// ISO date string rejected by the date parser
    InvalidDate { input: String, source: jiff::Error },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::Malformed(input) => {
                write!(f, "malformed year-month {input:?} (expected YYYY-MM)")
            }
            CalendarError::MonthOutOfRange(month) => {
                write!(f, "month {month} is outside 1-12")
            }
            CalendarError::YearOutOfRange(year) => write!(f, "year {year} is out of range"),
            CalendarError::Overflow { base, months } => {
                write!(f, "adding {months} months to {base} leaves the calendar range")
            }
            CalendarError::InvalidDate { input, source } => {
                write!(f, "invalid date {input:?}: {source}")
            }
        }
    }
}

impl std::error::Error for CalendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalendarError::InvalidDate { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors related to monetary arithmetic
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyError {
    NotFinite(f64),
    DivisionByZero,
    Overflow,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::NotFinite(value) => write!(f, "{value} is not a finite amount"),
            MoneyError::DivisionByZero => write!(f, "division of an amount by zero"),
            MoneyError::Overflow => write!(f, "amount overflowed the decimal range"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Reasons a simulation input cannot be projected
#[derive(Debug)]
pub enum SimulationError {
    Calendar(CalendarError),
    Money(MoneyError),
    /// Profile has no birth year/month to anchor ages on
    MissingBirthDate,
    /// A life event lacks a field its category requires
    MissingEventField {
        event_index: usize,
        field: EventField,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Calendar(e) => write!(f, "{e}"),
            SimulationError::Money(e) => write!(f, "{e}"),
            SimulationError::MissingBirthDate => {
                write!(f, "profile birth year and month are required")
            }
            SimulationError::MissingEventField { event_index, field } => {
                write!(f, "life event #{event_index} is missing required field {field}")
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Calendar(e) => Some(e),
            SimulationError::Money(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for SimulationError {
    fn from(err: CalendarError) -> Self {
        SimulationError::Calendar(err)
    }
}

impl From<MoneyError> for SimulationError {
    fn from(err: MoneyError) -> Self {
        SimulationError::Money(err)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
