//! ICS boundary adapter, using the icalendar crate's parser.
//!
//! Produces the raw entry mapping the engine consumes. The adapter only
//! resolves text into values (instants, recurrence rules); filtering and
//! defaulting belong to the expander. Timezone math is out of scope here:
//! floating and zoned times are taken at face value as UTC.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use icalendar::{
    parser::{read_calendar, unfold, Property},
    CalendarDateTime, DatePerhapsTime,
};

use crate::entry::{EntryKind, RawEntry};
use crate::error::{WeekViewError, WeekViewResult};
use crate::recurrence::{RecurrenceRule, RruleRecurrence};

/// Parse ICS text into the engine's raw entry mapping.
///
/// Unreadable calendar text and invalid RRULEs fail the whole load; a
/// missing UID does not (the entry is carried through and dropped later by
/// the expander, mirroring where the filtering rule lives).
pub fn parse_entries(content: &str) -> WeekViewResult<BTreeMap<String, RawEntry>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| WeekViewError::IcsParse(e.to_string()))?;

    let mut entries = BTreeMap::new();

    for (position, component) in calendar.components.iter().enumerate() {
        let kind = if component.name == "VEVENT" {
            EntryKind::Event
        } else {
            EntryKind::Other
        };

        let uid = component.find_prop("UID").map(|p| p.val.to_string());
        let summary = component.find_prop("SUMMARY").map(|p| p.val.to_string());
        let description = component
            .find_prop("DESCRIPTION")
            .map(|p| p.val.to_string());
        let start = component.find_prop("DTSTART").and_then(prop_to_instant);
        let end = component.find_prop("DTEND").and_then(prop_to_instant);

        let recurrence: Option<Box<dyn RecurrenceRule>> =
            match (component.find_prop("RRULE"), start) {
                (Some(prop), Some(dtstart)) => {
                    Some(Box::new(RruleRecurrence::new(dtstart, prop.val.as_ref())?))
                }
                // An RRULE with no DTSTART has nothing to anchor to.
                _ => None,
            };

        // Entries without a UID still need a distinct key in the mapping.
        let key = uid
            .clone()
            .unwrap_or_else(|| format!("entry-{}", position));

        entries.insert(
            key,
            RawEntry {
                kind,
                summary,
                description,
                uid,
                start,
                end,
                recurrence,
            },
        );
    }

    Ok(entries)
}

/// Resolve a DTSTART/DTEND property into an instant. All-day dates become
/// midnight; floating and zoned date-times are treated as already UTC.
fn prop_to_instant(prop: &Property) -> Option<DateTime<Utc>> {
    let dpt = DatePerhapsTime::try_from(prop).ok()?;

    Some(match dpt {
        DatePerhapsTime::Date(date) => date.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => dt,
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => naive.and_utc(),
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, .. }) => {
            date_time.and_utc()
        }
    })
}
