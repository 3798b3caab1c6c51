//! Calendar normalization engine for weekview.
//!
//! Turns raw parsed iCalendar entries (including recurrence rules) into a
//! deterministic, week-addressable index of concrete event occurrences:
//! - `expand` flattens raw entries into `EventOccurrence` values
//! - `index` groups occurrences by calendar day, sorted by start time
//! - `week` computes Monday-aligned week pointers and navigation
//! - `slice` answers "which days of this week have events"
//! - `session` owns the index and the week pointer for a coordinating caller

pub mod entry;
pub mod error;
pub mod expand;
pub mod ics;
pub mod index;
pub mod occurrence;
pub mod recurrence;
pub mod session;
pub mod slice;
pub mod week;

pub use entry::{EntryKind, RawEntry};
pub use error::{WeekViewError, WeekViewResult};
pub use expand::{expand, expand_at, ExpandWarning, Expanded, DEFAULT_MAX_OCCURRENCES};
pub use index::{CalendarIndex, DayKey};
pub use occurrence::EventOccurrence;
pub use recurrence::{Expansion, RecurrenceRule, RruleRecurrence};
pub use session::{LoadReport, Session};
pub use slice::{slice_week, DayGroup, WeekView};
pub use week::{weekday_rank, WeekStart};
