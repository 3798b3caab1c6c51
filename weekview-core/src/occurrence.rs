//! Concrete event occurrences.
//!
//! An `EventOccurrence` is one dated instance of an event: a single meeting
//! on a single day. Recurring entries expand into many of these.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One concrete, dated instance of a calendar event.
///
/// `name` falls back through summary → description → empty string when the
/// source entry lacks a summary; `uid` may be empty or shared between
/// occurrences of the same recurring event. `end >= start` is NOT guaranteed
/// and downstream code must tolerate inverted spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOccurrence {
    pub name: String,
    pub description: String,
    pub uid: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EventOccurrence {
    /// Signed span from start to end. Negative for inverted entries.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
