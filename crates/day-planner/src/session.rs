//! Planning sessions -- the numbered event listing a caller acts on.
//!
//! "Delete event 2" refers to the second entry of the listing the user last
//! saw. The session keeps that listing (and its date) as an explicit value,
//! so deleting and re-planning always use the same snapshot.

use crate::calendar::{busy_events, CalendarEntry, CalendarSource, CalendarStore};
use crate::day::DayWindow;
use crate::error::{PlannerError, Result};
use crate::interval::{Anchor, Event, TimeInterval};
use crate::plan::DayPlan;
use crate::scheduler::Scheduler;
use chrono::NaiveDate;

/// The calendar listing for one day.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    window: DayWindow,
    entries: Vec<CalendarEntry>,
}

impl PlanningSession {
    /// Fetch the day's entries from `source`.
    pub fn open(source: &impl CalendarSource, window: DayWindow) -> Result<Self> {
        let entries = source.entries_on(&window)?;
        Ok(Self { window, entries })
    }

    pub fn date(&self) -> NaiveDate {
        self.window.date
    }

    pub fn window(&self) -> &DayWindow {
        &self.window
    }

    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    /// `Events for YYYY-MM-DD:` followed by `N. <summary> at <time>` lines.
    pub fn render_listing(&self) -> String {
        let date = self.date().format("%Y-%m-%d");
        if self.entries.is_empty() {
            return format!("No events found for {}.", date);
        }
        let mut lines = vec![format!("Events for {}:\n", date)];
        lines.extend(self.numbered_lines());
        lines.join("\n")
    }

    pub fn numbered_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {} at {}", i + 1, entry.summary, entry.display_time()))
            .collect()
    }

    /// The entry shown as number `number` (1-based).
    pub fn select(&self, number: usize) -> Result<&CalendarEntry> {
        number
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .ok_or(PlannerError::InvalidSelection {
                number,
                available: self.entries.len(),
            })
    }

    /// Plan the session's day around its timed entries.
    ///
    /// Events carried over from the previous day appear at the start of the
    /// window, so every time in the plan falls on the session's date.
    pub fn plan(&self, anchors: &[Anchor], scheduler: &Scheduler) -> DayPlan {
        let events: Vec<Event> = busy_events(&self.entries)
            .into_iter()
            .map(|event| self.clip_to_day(event))
            .collect();
        scheduler.plan(anchors, &events)
    }

    fn clip_to_day(&self, event: Event) -> Event {
        if event.start() >= self.window.start {
            return event;
        }
        match TimeInterval::new(self.window.start, event.interval.end()) {
            Ok(interval) => Event { interval, ..event },
            Err(_) => event,
        }
    }

    /// Delete entry `number` from `store` and return a fresh session for the same day.
    ///
    /// An occurrence of a recurring item is excluded from its series; the
    /// other days keep theirs.
    pub fn delete<S: CalendarStore>(&self, number: usize, store: &S) -> Result<Self> {
        let entry = self.select(number)?;
        match entry.occurrence {
            Some(occurrence) => store.exclude(&entry.id, occurrence)?,
            None => store.delete(&entry.id)?,
        }
        Self::open(store, self.window)
    }
}
