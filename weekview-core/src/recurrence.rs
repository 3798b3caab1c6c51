//! Recurrence rule expansion.
//!
//! The engine is decoupled from any particular rule-text grammar through the
//! `RecurrenceRule` trait; `RruleRecurrence` is the concrete implementation
//! backed by the rrule crate's `RRuleSet`.

use std::fmt;

use chrono::{DateTime, Utc};
use rrule::RRuleSet;

use crate::error::{WeekViewError, WeekViewResult};

/// The concrete start instants a recurrence rule expands to.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub starts: Vec<DateTime<Utc>>,
    /// True when the rule produced more instants than the requested cap.
    pub truncated: bool,
}

/// A recurrence specification that can enumerate its occurrence starts.
///
/// Implementations must terminate: `cap` is a hard upper bound on the number
/// of instants returned, and hitting it is reported via `Expansion::truncated`
/// rather than silently.
pub trait RecurrenceRule: fmt::Debug {
    fn occurrences(&self, cap: u16) -> Expansion;
}

/// An RRULE-backed recurrence, anchored at the entry's DTSTART.
#[derive(Debug, Clone)]
pub struct RruleRecurrence {
    set: RRuleSet,
}

impl RruleRecurrence {
    /// Build from an RRULE property value (e.g. `FREQ=WEEKLY;COUNT=3`) and
    /// the start instant of the entry carrying it.
    pub fn new(dtstart: DateTime<Utc>, rrule: &str) -> WeekViewResult<Self> {
        let source = format!(
            "DTSTART:{}\nRRULE:{}",
            dtstart.format("%Y%m%dT%H%M%SZ"),
            rrule
        );

        let set: RRuleSet = source
            .parse()
            .map_err(|e| WeekViewError::Rrule(format!("{}: {}", rrule, e)))?;

        Ok(RruleRecurrence { set })
    }
}

impl RecurrenceRule for RruleRecurrence {
    fn occurrences(&self, cap: u16) -> Expansion {
        let result = self.set.clone().all(cap);

        Expansion {
            starts: result
                .dates
                .iter()
                .map(|dt| dt.with_timezone(&Utc))
                .collect(),
            truncated: result.limited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weekly_count_rule_expands_to_each_week() {
        let dtstart = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let rule = RruleRecurrence::new(dtstart, "FREQ=WEEKLY;COUNT=3").expect("valid rule");

        let expansion = rule.occurrences(365);

        assert_eq!(expansion.starts.len(), 3, "COUNT=3 should yield 3 starts");
        assert!(!expansion.truncated);
        assert_eq!(
            expansion.starts,
            vec![
                Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_cap_truncates_and_reports() {
        let dtstart = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let rule = RruleRecurrence::new(dtstart, "FREQ=DAILY;COUNT=10").expect("valid rule");

        let expansion = rule.occurrences(4);

        assert_eq!(expansion.starts.len(), 4);
        assert!(
            expansion.truncated,
            "hitting the cap must be reported, not silent"
        );
    }

    #[test]
    fn test_invalid_rrule_is_an_error() {
        let dtstart = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let result = RruleRecurrence::new(dtstart, "FREQ=SOMETIMES");

        assert!(matches!(result, Err(WeekViewError::Rrule(_))));
    }
}
