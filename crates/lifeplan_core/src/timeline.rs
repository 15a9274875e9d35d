//! Projection window and per-month ages

use crate::error::Result;
use crate::model::{Profile, TimelineMonth};
use crate::year_month::YearMonth;

/// Age in completed years at `at` for someone born in `birth`.
///
/// Only months are known, so the birthday counts as reached from the birth
/// month onward.
#[inline]
pub fn age_at(birth: YearMonth, at: YearMonth) -> i32 {
    let years = at.year() - birth.year();
    if at.month() < birth.month() {
        years - 1
    } else {
        years
    }
}

/// Inclusive `(first, last)` months of the projection window, or `None` when
/// the start lies after the end.
pub fn window(
    current: YearMonth,
    start_offset_months: i64,
    end_age: u32,
    profile: &Profile,
) -> Result<Option<(YearMonth, YearMonth)>> {
    let birth = profile.birth()?;
    let start = current.add_months(start_offset_months)?;
    let end = YearMonth::from_parts(
        i64::from(birth.year()) + i64::from(end_age),
        i64::from(birth.month()),
    )?;
    if start.is_after(end) {
        return Ok(None);
    }
    Ok(Some((start, end)))
}

/// Materialize one skeleton row per month from `current + offset` through the
/// month the primary member turns `end_age`.
pub fn build_timeline(
    current: YearMonth,
    start_offset_months: i64,
    end_age: u32,
    profile: &Profile,
) -> Result<Vec<TimelineMonth>> {
    let birth = profile.birth()?;
    let spouse_birth = profile.spouse_birth()?;
    let Some((start, end)) = window(current, start_offset_months, end_age, profile)? else {
        return Ok(Vec::new());
    };

    (start.elapsed_months()..=end.elapsed_months())
        .map(|index| -> Result<TimelineMonth> {
            let year_month = YearMonth::from_elapsed_months(index)?;
            Ok(TimelineMonth::skeleton(
                year_month,
                age_at(birth, year_month),
                spouse_birth.map(|spouse| age_at(spouse, year_month)),
            ))
        })
        .collect()
}
