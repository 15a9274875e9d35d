//! Life-event expansion
//!
//! Each template is walked forward from its own anchor month, not from the
//! window start, so occurrences before the window still count toward
//! `stop_after_occurrences`. Only occurrences inside the window are emitted.
//! Expansion always terminates: every step advances by at least a year and
//! stops once it passes the window end.

use crate::error::Result;
use crate::housing::HousingTerms;
use crate::model::{EventOccurrence, LifeEvent, Profile};
use crate::timeline::age_at;
use crate::year_month::YearMonth;

/// Expand every template into its occurrences within `[window_start, window_end]`,
/// sorted chronologically (template order within a month).
///
/// Housing purchases are checked for their price fields here; a missing field
/// fails the whole expansion.
pub fn expand_life_events(
    events: &[LifeEvent],
    window_start: YearMonth,
    window_end: YearMonth,
    profile: &Profile,
) -> Result<Vec<EventOccurrence>> {
    let mut occurrences = Vec::new();
    for (event_index, event) in events.iter().enumerate() {
        if event.is_housing_purchase() {
            HousingTerms::from_event(event, event_index)?;
        }
        expand_one(
            event,
            event_index,
            window_start,
            window_end,
            profile,
            &mut occurrences,
        )?;
    }
    occurrences.sort_by_key(|o| o.year_month);
    Ok(occurrences)
}

fn expand_one(
    event: &LifeEvent,
    event_index: usize,
    window_start: YearMonth,
    window_end: YearMonth,
    profile: &Profile,
    out: &mut Vec<EventOccurrence>,
) -> Result<()> {
    let birth = match event.stop_after_age {
        Some(_) => Some(profile.birth()?),
        None => None,
    };

    let mut count: u32 = 0;
    let mut current = event.year_month;
    loop {
        if current.is_after(window_end) {
            break;
        }
        if let (Some(stop_age), Some(birth)) = (event.stop_after_age, birth)
            && age_at(birth, current) > stop_age
        {
            break;
        }

        count += 1;
        if !current.is_before(window_start) {
            out.push(EventOccurrence {
                event_index,
                year_month: current,
                occurrence: count,
            });
        }

        let Some(step) = event.interval_months() else {
            break;
        };
        if event.stop_after_occurrences.is_some_and(|limit| count >= limit) {
            break;
        }
        current = match current.add_months(step) {
            Ok(next) => next,
            // Past the last representable year, so past any window
            Err(_) => break,
        };
    }

    tracing::trace!(event_index, count, "expanded life event");
    Ok(())
}

/// Convenience for callers that only need the months an event lands on.
pub fn occurrence_months(
    event: &LifeEvent,
    window_start: YearMonth,
    window_end: YearMonth,
    profile: &Profile,
) -> Result<Vec<YearMonth>> {
    let mut out = Vec::new();
    expand_one(event, 0, window_start, window_end, profile, &mut out)?;
    Ok(out.into_iter().map(|o| o.year_month).collect())
}
