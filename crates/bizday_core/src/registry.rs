//! Business day queries over an injected holiday source.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::trace;

use crate::error::CalendarError;

/// Source of holiday information.
///
/// This is the sole extension point of the crate: any backing store
/// (static list, database, remote service) can be substituted behind it
/// without changing registry behaviour.
pub trait HolidayGetter {
    /// Check if a holiday exists on the given date.
    fn has_holiday(&self, date: NaiveDate) -> bool;
}

/// Business day calculations over a holiday source.
///
/// The registry composes the fixed weekend rule with the injected
/// holiday source and holds no other state. Queries are pure reads;
/// one registry may serve concurrent callers as long as the source
/// itself tolerates concurrent reads.
pub struct HolidayRegistry {
    repository: Arc<dyn HolidayGetter + Send + Sync>,
}

impl std::fmt::Debug for HolidayRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayRegistry").finish_non_exhaustive()
    }
}

impl HolidayRegistry {
    /// Build a registry around a holiday source.
    ///
    /// Fails with [`CalendarError::InvalidService`] if no source is
    /// supplied.
    pub fn new(
        repository: Option<Arc<dyn HolidayGetter + Send + Sync>>,
    ) -> Result<Self, CalendarError> {
        let repository = repository.ok_or(CalendarError::InvalidService)?;

        Ok(Self { repository })
    }

    /// Check if a date is a business day.
    ///
    /// Weekends are never business days; the holiday source is not
    /// consulted for them.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        if date.weekday() == Weekday::Sat || date.weekday() == Weekday::Sun {
            return false;
        }

        !self.repository.has_holiday(date)
    }

    /// Get the next business day strictly after the given date.
    ///
    /// Candidates are produced by a weekend-skipping step, so only the
    /// holiday condition is re-checked per candidate. The search is
    /// unbounded: a source that flags every future weekday as a holiday
    /// will never return. Use
    /// [`next_business_day_within`](HolidayRegistry::next_business_day_within)
    /// to bound the search instead.
    pub fn next_business_day_from(&self, initial_date: NaiveDate) -> NaiveDate {
        let mut current = initial_date;

        loop {
            current = next_weekday(current);

            if self.repository.has_holiday(current) {
                trace!(date = %current, "holiday, advancing");
                continue;
            }

            return current;
        }
    }

    /// Get the previous business day strictly before the given date.
    pub fn previous_business_day_from(&self, initial_date: NaiveDate) -> NaiveDate {
        let mut current = initial_date;

        loop {
            current = previous_weekday(current);

            if self.repository.has_holiday(current) {
                trace!(date = %current, "holiday, rewinding");
                continue;
            }

            return current;
        }
    }

    /// Bounded variant of
    /// [`next_business_day_from`](HolidayRegistry::next_business_day_from).
    ///
    /// Fails with [`CalendarError::LookaheadExhausted`] when no business
    /// day is found within `max_lookahead` calendar days of the input.
    pub fn next_business_day_within(
        &self,
        initial_date: NaiveDate,
        max_lookahead: u32,
    ) -> Result<NaiveDate, CalendarError> {
        let limit = initial_date
            .checked_add_days(Days::new(u64::from(max_lookahead)))
            .unwrap_or(NaiveDate::MAX);
        let mut current = initial_date;

        loop {
            current = next_weekday(current);

            if current > limit {
                return Err(CalendarError::LookaheadExhausted(max_lookahead));
            }

            if self.repository.has_holiday(current) {
                trace!(date = %current, "holiday, advancing");
                continue;
            }

            return Ok(current);
        }
    }
}

/// Single-day logical successor, skipping weekends.
///
/// Friday advances 3 days and Saturday 2, so every candidate lands on a
/// Monday to Friday weekday.
fn next_weekday(current: NaiveDate) -> NaiveDate {
    let step = match current.weekday() {
        Weekday::Fri => 3,
        Weekday::Sat => 2,
        _ => 1,
    };

    current.checked_add_days(Days::new(step)).unwrap_or(current)
}

/// Single-day logical predecessor, skipping weekends.
fn previous_weekday(current: NaiveDate) -> NaiveDate {
    let step = match current.weekday() {
        Weekday::Mon => 3,
        Weekday::Sun => 2,
        _ => 1,
    };

    current.checked_sub_days(Days::new(step)).unwrap_or(current)
}
