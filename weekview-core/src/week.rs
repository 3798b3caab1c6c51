//! Week navigation.
//!
//! A `WeekStart` is the canonical Monday beginning a calendar week, the sole
//! piece of navigable state in the engine. Arithmetic is calendar-day based
//! (never raw millisecond addition), so it stays correct across month
//! boundaries and daylight-saving transitions.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::index::DayKey;

/// The Monday-aligned start of a calendar week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct WeekStart(NaiveDate);

impl WeekStart {
    /// The Monday beginning the week that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        // Sunday indexes as 0 but belongs at the END of a Monday-first week,
        // so it maps 6 days back instead of forward.
        let day = date.weekday().num_days_from_sunday() as i64;
        let diff = if day == 0 { -6 } else { 1 - day };
        WeekStart(date + Duration::days(diff))
    }

    /// The week containing an instant's calendar day.
    pub fn of_instant(instant: DateTime<Utc>) -> Self {
        Self::containing(instant.date_naive())
    }

    /// Move forward (positive) or back (negative) by whole weeks.
    pub fn shift(self, delta_weeks: i64) -> Self {
        WeekStart(self.0 + Duration::days(7 * delta_weeks))
    }

    pub fn monday(&self) -> NaiveDate {
        self.0
    }

    /// Whether the given day falls inside this week.
    pub fn contains(&self, key: DayKey) -> bool {
        WeekStart::containing(key.date()) == *self
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%a %-d %b %Y"))
    }
}

/// Monday-first sort rank for a date's weekday: Monday..Sunday map to 0..6.
/// Display/sort key only, never stored.
pub fn weekday_rank(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}
