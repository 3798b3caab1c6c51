//! Occurrence expansion.
//!
//! Converts raw calendar entries into concrete `EventOccurrence` values,
//! expanding recurrence rules into one occurrence per start instant. Entries
//! that are not events, or that carry no UID, are dropped silently; missing
//! optional fields resolve through documented defaults.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::entry::{EntryKind, RawEntry};
use crate::occurrence::EventOccurrence;

/// Hard cap on occurrences generated per recurring entry. An unterminated
/// RRULE (no COUNT, no UNTIL) would otherwise never finish expanding.
pub const DEFAULT_MAX_OCCURRENCES: u16 = 365;

/// Non-fatal conditions encountered during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandWarning {
    /// The entry had no DTSTART; the current instant was substituted.
    MissingStart { uid: String },
    /// The recurrence rule produced more instants than the cap allows.
    RecurrenceTruncated { uid: String, cap: u16 },
}

impl fmt::Display for ExpandWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandWarning::MissingStart { uid } => {
                write!(f, "event '{}' has no start date, using the current time", uid)
            }
            ExpandWarning::RecurrenceTruncated { uid, cap } => {
                write!(
                    f,
                    "recurrence expansion for event '{}' exceeded the maximum of {} occurrences",
                    uid, cap
                )
            }
        }
    }
}

/// Result of expanding a full entry mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Expanded {
    pub occurrences: Vec<EventOccurrence>,
    pub warnings: Vec<ExpandWarning>,
}

/// Expand with the wall clock as the fallback for entries missing a start.
pub fn expand(entries: &BTreeMap<String, RawEntry>, cap: u16) -> Expanded {
    expand_at(entries, cap, Utc::now())
}

/// Expand every event entry into its concrete occurrences.
///
/// `now` is only used as the start of malformed entries that carry no
/// DTSTART (reported via `ExpandWarning::MissingStart`); for well-formed
/// input this is a pure function of `entries` and `cap`.
pub fn expand_at(
    entries: &BTreeMap<String, RawEntry>,
    cap: u16,
    now: DateTime<Utc>,
) -> Expanded {
    let mut occurrences = Vec::new();
    let mut warnings = Vec::new();

    for entry in entries.values() {
        // Only schedulable events with a UID make it into the index.
        if entry.kind != EntryKind::Event || entry.uid.is_none() {
            continue;
        }

        let uid = entry.uid.clone().unwrap_or_default();
        let description = entry.description.clone().unwrap_or_default();

        let start = match entry.start {
            Some(start) => start,
            None => {
                warnings.push(ExpandWarning::MissingStart { uid: uid.clone() });
                now
            }
        };

        // With a summary, the description stays as-is. Without one, the
        // description is promoted to the name and cleared, so the same text
        // is never displayed twice.
        let (name, description) = match &entry.summary {
            Some(summary) => (summary.clone(), description),
            None => (description, String::new()),
        };

        let end = entry.end.unwrap_or(start);

        let base = EventOccurrence {
            name,
            description,
            uid,
            start,
            end,
        };

        match &entry.recurrence {
            Some(rule) => {
                // Absolute span, so an inverted entry still yields a
                // non-negative duration for every occurrence.
                let span = (base.end - base.start).abs();

                let expansion = rule.occurrences(cap);
                if expansion.truncated {
                    warnings.push(ExpandWarning::RecurrenceTruncated {
                        uid: base.uid.clone(),
                        cap,
                    });
                }

                for start in expansion.starts {
                    occurrences.push(EventOccurrence {
                        start,
                        end: start + span,
                        ..base.clone()
                    });
                }
            }
            None => occurrences.push(base),
        }
    }

    Expanded {
        occurrences,
        warnings,
    }
}
