//! Terminal rendering for week views.
//!
//! Extension trait adding colored output to weekview-core types using
//! owo_colors.

use owo_colors::OwoColorize;
use weekview_core::{DayGroup, EventOccurrence, WeekView};

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventOccurrence {
    fn render(&self) -> String {
        let time = format!(
            "{} to {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        );

        if self.description.is_empty() {
            format!("  {} - {}", self.name.bold(), time.dimmed())
        } else {
            format!(
                "  {} ({}) - {}",
                self.name.bold(),
                self.description,
                time.dimmed()
            )
        }
    }
}

impl Render for DayGroup {
    fn render(&self) -> String {
        let heading = self.day.date().format("%A %-d %B").to_string();

        let mut lines = vec![heading.bold().to_string()];
        for event in &self.events {
            lines.push(event.render());
        }
        lines.join("\n")
    }
}

impl Render for WeekView {
    fn render(&self) -> String {
        let mut lines = vec![format!("Week of {}", self.week)];

        if self.days.is_empty() {
            lines.push("No events this week".dimmed().to_string());
        }

        for group in &self.days {
            lines.push(String::new());
            lines.push(group.render());
        }

        lines.join("\n")
    }
}
