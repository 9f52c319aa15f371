//! Day plans -- the time-ordered merge of resolved anchors and events.

use crate::scheduler::ScheduledSlot;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use std::fmt;

/// Where a plan entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A resolved anchor (a meal).
    Anchor,
    /// A fixed calendar event.
    Event,
}

/// One line of a day plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub label: String,
    pub time: DateTime<Tz>,
    pub kind: EntryKind,
}

impl PlanEntry {
    /// Label as shown to the user; events are prefixed with `Event: `.
    pub fn display_label(&self) -> String {
        match self.kind {
            EntryKind::Anchor => self.label.clone(),
            EntryKind::Event => format!("Event: {}", self.label),
        }
    }
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} at {}",
            self.display_label(),
            format_clock(self.time)
        )
    }
}

/// A day plan sorted ascending by time, plus the slots it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub entries: Vec<PlanEntry>,
    pub slots: Vec<ScheduledSlot>,
}

impl DayPlan {
    /// One `- <label> at <HH:MM AM/PM>` line per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// The plan headed with `Plan for YYYY-MM-DD:` and a blank line.
    pub fn render(&self, date: NaiveDate) -> String {
        let mut out = vec![format!("Plan for {}:\n", date.format("%Y-%m-%d"))];
        out.extend(self.lines());
        out.join("\n")
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// 12-hour clock time, e.g. `07:05 AM`.
pub fn format_clock(time: DateTime<Tz>) -> String {
    time.format("%I:%M %p").to_string()
}
