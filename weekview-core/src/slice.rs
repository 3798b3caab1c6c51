//! Week slicing.
//!
//! Answers "which days of the displayed week have events" against a built
//! `CalendarIndex`. The result is sparse: days without occurrences are
//! simply absent, never padded out to a fixed 7-slot array.

use serde::Serialize;

use crate::index::{CalendarIndex, DayKey};
use crate::occurrence::EventOccurrence;
use crate::week::{weekday_rank, WeekStart};

/// All occurrences of one day, in ascending start order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub day: DayKey,
    pub events: Vec<EventOccurrence>,
}

/// One displayed week: day groups ordered Monday-first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekView {
    pub week: WeekStart,
    pub days: Vec<DayGroup>,
}

impl WeekView {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(|group| group.events.len()).sum()
    }
}

/// Select the days of `week` that carry occurrences, Monday first.
pub fn slice_week(index: &CalendarIndex, week: WeekStart) -> WeekView {
    let mut days: Vec<DayGroup> = index
        .days()
        .filter(|(key, _)| week.contains(*key))
        .map(|(key, events)| DayGroup {
            day: key,
            events: events.to_vec(),
        })
        .collect();

    days.sort_by_key(|group| weekday_rank(group.day.date()));

    WeekView { week, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn occurrence(name: &str, start: DateTime<Utc>) -> EventOccurrence {
        EventOccurrence {
            name: name.to_string(),
            description: String::new(),
            uid: name.to_string(),
            start,
            end: start,
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn week_of(day: u32) -> WeekStart {
        WeekStart::containing(NaiveDate::from_ymd_opt(2024, 1, day).unwrap())
    }

    #[test]
    fn test_single_event_week() {
        // 2024-01-08 is a Monday
        let index = CalendarIndex::from_occurrences(vec![occurrence("Standup", at(8, 9))]);

        let view = slice_week(&index, week_of(8));

        assert_eq!(view.days.len(), 1);
        assert_eq!(view.days[0].events.len(), 1);
        assert_eq!(view.days[0].events[0].name, "Standup");
    }

    #[test]
    fn test_slice_includes_whole_week_and_excludes_the_rest() {
        let index = CalendarIndex::from_occurrences(vec![
            occurrence("mon", at(8, 9)),
            occurrence("sun", at(14, 9)),
            occurrence("next-week", at(15, 9)),
        ]);

        let view = slice_week(&index, week_of(8));

        let names: Vec<&str> = view
            .days
            .iter()
            .flat_map(|group| group.events.iter().map(|e| e.name.as_str()))
            .collect();
        assert_eq!(names, vec!["mon", "sun"]);
    }

    #[test]
    fn test_days_come_out_monday_first_and_sparse() {
        let index = CalendarIndex::from_occurrences(vec![
            occurrence("fri", at(12, 9)),
            occurrence("tue", at(9, 9)),
        ]);

        let view = slice_week(&index, week_of(8));

        assert_eq!(view.days.len(), 2, "empty days are absent, not padded");
        assert_eq!(view.days[0].events[0].name, "tue");
        assert_eq!(view.days[1].events[0].name, "fri");
    }

    #[test]
    fn test_empty_index_yields_empty_view() {
        let view = slice_week(&CalendarIndex::default(), week_of(8));

        assert!(view.is_empty());
        assert_eq!(view.event_count(), 0);
    }
}
