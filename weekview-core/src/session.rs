//! Engine session: owns the calendar index and the week pointer.
//!
//! The session is the single coordinating owner of the engine's mutable
//! state. Loading replaces the index wholesale and only on success, so a
//! failed load never leaves a partially rebuilt index behind. The week
//! pointer lives independently of the index and survives reloads.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::entry::RawEntry;
use crate::error::WeekViewResult;
use crate::expand::{expand, ExpandWarning, DEFAULT_MAX_OCCURRENCES};
use crate::ics;
use crate::index::CalendarIndex;
use crate::slice::{slice_week, WeekView};
use crate::week::WeekStart;

/// What a successful load produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub entries: usize,
    pub occurrences: usize,
    pub days: usize,
    pub warnings: Vec<ExpandWarning>,
}

/// A loaded (or not-yet-loaded) calendar plus the displayed week.
#[derive(Debug)]
pub struct Session {
    index: CalendarIndex,
    week: WeekStart,
    max_occurrences: u16,
}

impl Session {
    /// An empty session showing the week containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_cap(today, DEFAULT_MAX_OCCURRENCES)
    }

    pub fn with_cap(today: NaiveDate, max_occurrences: u16) -> Self {
        Session {
            index: CalendarIndex::default(),
            week: WeekStart::containing(today),
            max_occurrences,
        }
    }

    /// Parse ICS text and rebuild the index from it.
    ///
    /// On a parse failure the previous index stays in place untouched.
    pub fn load_ics(&mut self, content: &str) -> WeekViewResult<LoadReport> {
        let entries = ics::parse_entries(content)?;
        Ok(self.load_entries(&entries))
    }

    /// Rebuild the index from already-parsed entries, replacing the previous
    /// one wholesale.
    pub fn load_entries(&mut self, entries: &BTreeMap<String, RawEntry>) -> LoadReport {
        let expanded = expand(entries, self.max_occurrences);

        let index = CalendarIndex::from_occurrences(expanded.occurrences);
        let report = LoadReport {
            entries: entries.len(),
            occurrences: index.occurrence_count(),
            days: index.day_count(),
            warnings: expanded.warnings,
        };

        self.index = index;
        report
    }

    /// Shift the displayed week forward or back.
    pub fn navigate(&mut self, delta_weeks: i64) {
        self.week = self.week.shift(delta_weeks);
    }

    pub fn set_week(&mut self, week: WeekStart) {
        self.week = week;
    }

    pub fn week(&self) -> WeekStart {
        self.week
    }

    pub fn index(&self) -> &CalendarIndex {
        &self.index
    }

    /// The displayed week's events, Monday first.
    pub fn week_view(&self) -> WeekView {
        slice_week(&self.index, self.week)
    }
}
