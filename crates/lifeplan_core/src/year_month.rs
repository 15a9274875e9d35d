//! Calendar month value type.
//!
//! `YearMonth` is the only date type the engine reasons with. Everything that
//! orders, offsets or ranges months goes through the elapsed-month index
//! (`year * 12 + month - 1`), so month arithmetic never touches day-level
//! calendar rules. `jiff` is only consulted at the edges: parsing ISO date
//! strings and reading the current date.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A specific calendar month, e.g. `2025-06`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Build from explicit parts, rejecting anything outside the calendar.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(i64::from(month)));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(i64::from(year)));
        }
        Ok(Self { year, month })
    }

    /// Build from wide integers as they arrive from untyped input.
    pub fn from_parts(year: i64, month: i64) -> Result<Self, CalendarError> {
        let month = u8::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(CalendarError::MonthOutOfRange(month))?;
        let year = i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange(year))?;
        Self::new(year, month)
    }

    /// Inverse of [`YearMonth::elapsed_months`].
    pub fn from_elapsed_months(index: i64) -> Result<Self, CalendarError> {
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) + 1;
        Self::from_parts(year, month)
    }

    /// Truncate a civil date to its month.
    pub fn from_date(date: jiff::civil::Date) -> Self {
        // jiff dates are always within 1..=12 and -9999..=9999
        Self {
            year: i32::from(date.year()),
            month: date.month() as u8,
        }
    }

    /// The current month in the system time zone.
    pub fn now() -> Self {
        Self::from_date(jiff::Zoned::now().date())
    }

    /// Parse `YYYY-MM`, or an ISO date / datetime / timestamp truncated to its month.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let trimmed = input.trim();
        match trimmed.split_once('-') {
            Some((year, month)) if !month.contains(['-', 'T', 't', ' ']) => {
                parse_year_month(year, month, input)
            }
            Some(_) => parse_iso(trimmed),
            None => Err(CalendarError::Malformed(input.to_string())),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Monotonic index used for ordering and arithmetic.
    #[inline]
    pub fn elapsed_months(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Offset by a signed number of months.
    pub fn add_months(self, months: i64) -> Result<Self, CalendarError> {
        self.elapsed_months()
            .checked_add(months)
            .ok_or(CalendarError::Overflow {
                base: self.to_string(),
                months,
            })
            .and_then(Self::from_elapsed_months)
            .map_err(|_| CalendarError::Overflow {
                base: self.to_string(),
                months,
            })
    }

    /// Signed month difference `self - other`.
    #[inline]
    pub fn months_since(&self, other: YearMonth) -> i64 {
        self.elapsed_months() - other.elapsed_months()
    }

    /// Whole years elapsed since `other`; zero when `other` is later.
    pub fn elapsed_years_since(&self, other: YearMonth) -> u32 {
        let months = self.months_since(other).max(0);
        // MAX_YEAR bounds the difference well within u32
        (months / 12) as u32
    }

    pub fn is_before(&self, other: YearMonth) -> bool {
        self.elapsed_months() < other.elapsed_months()
    }

    pub fn is_after(&self, other: YearMonth) -> bool {
        self.elapsed_months() > other.elapsed_months()
    }

    /// Inclusive range check; `end = None` means unbounded.
    pub fn is_within(&self, start: YearMonth, end: Option<YearMonth>) -> bool {
        !self.is_before(start) && end.is_none_or(|end| !self.is_after(end))
    }

    /// First day of the month.
    pub fn to_date(&self) -> jiff::civil::Date {
        // Constructor invariants keep year and month inside jiff's range
        jiff::civil::date(self.year as i16, self.month as i8, 1)
    }

    /// `YYYY-MM-01`
    pub fn month_start_string(&self) -> String {
        format!("{:04}-{:02}-01", self.year, self.month)
    }

    /// `YYYY/MM`, used for table output.
    pub fn display_label(&self) -> String {
        format!("{:04}/{:02}", self.year, self.month)
    }
}

fn parse_year_month(year: &str, month: &str, input: &str) -> Result<YearMonth, CalendarError> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || month.len() != 2 || !is_digits(year) || !is_digits(month) {
        return Err(CalendarError::Malformed(input.to_string()));
    }
    let year: i64 = year
        .parse()
        .map_err(|_| CalendarError::Malformed(input.to_string()))?;
    let month: i64 = month
        .parse()
        .map_err(|_| CalendarError::Malformed(input.to_string()))?;
    YearMonth::from_parts(year, month)
}

fn parse_iso(input: &str) -> Result<YearMonth, CalendarError> {
    let date = match input.parse::<jiff::civil::Date>() {
        Ok(date) => date,
        Err(date_err) => {
            if let Ok(datetime) = input.parse::<jiff::civil::DateTime>() {
                datetime.date()
            } else if let Ok(timestamp) = input.parse::<jiff::Timestamp>() {
                timestamp.to_zoned(jiff::tz::TimeZone::UTC).date()
            } else {
                return Err(CalendarError::InvalidDate {
                    input: input.to_string(),
                    source: date_err,
                });
            }
        }
    };
    // jiff accepts years down to -9999
    YearMonth::new(i32::from(date.year()), date.month() as u8)
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elapsed_months().cmp(&other.elapsed_months())
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
