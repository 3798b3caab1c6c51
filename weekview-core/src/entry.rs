//! Raw calendar entries, as handed over by the ICS parsing boundary.
//!
//! Every field a real-world feed can omit is optional here; the occurrence
//! expander owns the defaulting rules, not the parser.

use chrono::{DateTime, Utc};

use crate::recurrence::RecurrenceRule;

/// Component kind of a parsed entry. Only events are schedulable; everything
/// else (VTODO, VTIMEZONE, ...) is carried through so the expander can drop
/// it in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Event,
    Other,
}

/// A raw calendar entry before normalization.
#[derive(Debug)]
pub struct RawEntry {
    pub kind: EntryKind,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub uid: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub recurrence: Option<Box<dyn RecurrenceRule>>,
}

impl RawEntry {
    /// An event-kind entry with every optional field unset.
    pub fn event() -> Self {
        RawEntry {
            kind: EntryKind::Event,
            summary: None,
            description: None,
            uid: None,
            start: None,
            end: None,
            recurrence: None,
        }
    }
}
