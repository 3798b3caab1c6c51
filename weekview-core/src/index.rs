//! Day-keyed occurrence index.
//!
//! Groups a flat occurrence sequence by calendar day. Order across days is
//! irrelevant (the map is sorted by key anyway); order within a day is a
//! strict invariant: ascending by start instant.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::occurrence::EventOccurrence;

/// Canonical calendar-day identifier.
///
/// Derived from an occurrence's start instant with the time of day stripped,
/// so two instants on the same calendar day always produce equal keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        DayKey(instant.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight UTC of this day, the canonical instant form of the key.
    pub fn to_instant(&self) -> DateTime<Utc> {
        self.0.and_hms_opt(0, 0, 0).unwrap().and_utc()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Mapping from calendar day to its occurrences, sorted by start time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalendarIndex {
    days: BTreeMap<DayKey, Vec<EventOccurrence>>,
}

impl CalendarIndex {
    /// Build an index from a flat occurrence sequence.
    ///
    /// Identical occurrences are NOT deduplicated; repeated uids and even
    /// byte-identical entries all persist.
    pub fn from_occurrences(occurrences: Vec<EventOccurrence>) -> Self {
        let mut index = CalendarIndex::default();
        for occurrence in occurrences {
            index.insert(occurrence);
        }
        index
    }

    fn insert(&mut self, occurrence: EventOccurrence) {
        let key = DayKey::from_instant(occurrence.start);
        let day = self.days.entry(key).or_default();
        day.push(occurrence);
        // Stable sort: equal starts keep their insertion order.
        day.sort_by_key(|occurrence| occurrence.start);
    }

    pub fn day(&self, key: DayKey) -> Option<&[EventOccurrence]> {
        self.days.get(&key).map(Vec::as_slice)
    }

    pub fn days(&self) -> impl Iterator<Item = (DayKey, &[EventOccurrence])> + '_ {
        self.days.iter().map(|(key, day)| (*key, day.as_slice()))
    }

    /// Number of days carrying at least one occurrence.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn occurrence_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn occurrence(uid: &str, start: DateTime<Utc>) -> EventOccurrence {
        EventOccurrence {
            name: uid.to_string(),
            description: String::new(),
            uid: uid.to_string(),
            start,
            end: start,
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_same_day_groups_under_one_key() {
        let index =
            CalendarIndex::from_occurrences(vec![occurrence("a", at(8, 9)), occurrence("b", at(8, 17))]);

        assert_eq!(index.day_count(), 1);
        let day = index
            .day(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().into())
            .expect("day should exist");
        assert_eq!(day.len(), 2);
    }

    #[test]
    fn test_day_sequences_are_sorted_by_start() {
        let index = CalendarIndex::from_occurrences(vec![
            occurrence("late", at(8, 17)),
            occurrence("early", at(8, 9)),
            occurrence("mid", at(8, 12)),
        ]);

        for (_, day) in index.days() {
            for pair in day.windows(2) {
                assert!(
                    pair[0].start <= pair[1].start,
                    "day sequence must be non-decreasing by start"
                );
            }
        }

        let day = index
            .day(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().into())
            .unwrap();
        assert_eq!(day[0].uid, "early");
        assert_eq!(day[2].uid, "late");
    }

    #[test]
    fn test_identical_occurrences_are_not_deduplicated() {
        let index = CalendarIndex::from_occurrences(vec![
            occurrence("dup", at(8, 9)),
            occurrence("dup", at(8, 9)),
        ]);

        assert_eq!(index.occurrence_count(), 2);
    }

    #[test]
    fn test_day_key_ignores_time_of_day() {
        assert_eq!(
            DayKey::from_instant(at(8, 0)),
            DayKey::from_instant(at(8, 23))
        );
        assert_eq!(
            DayKey::from_instant(at(8, 12)).to_instant(),
            at(8, 0),
            "canonical instant form is midnight"
        );
    }

    #[test]
    fn test_day_key_display() {
        assert_eq!(DayKey::from_instant(at(8, 12)).to_string(), "2024-01-08");
    }
}
