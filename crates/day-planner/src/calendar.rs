//! Calendar source -- the events a day plan is built around.
//!
//! The on-disk format mirrors a Google Calendar `events.list` response
//! (`{"items": [...]}`), so an exported response can be used directly.
//! Items are parsed into typed structs with explicit fallbacks instead of
//! being probed key by key.

use crate::day::DayWindow;
use crate::dst::DstPolicy;
use crate::error::{PlannerError, Result};
use crate::interval::{Event, TimeInterval};
use crate::plan::format_clock;
use crate::recurrence::{exdate_line, expand_in_window};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Shown for items without a summary.
pub const UNTITLED: &str = "No Title";

/// Used when a new event is added without an explicit duration.
pub const DEFAULT_EVENT_MINUTES: u32 = 60;

// ── Wire format ─────────────────────────────────────────────────────────────

/// An `events.list` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub items: Vec<CalendarItem>,
}

/// One stored calendar item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItem {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub start: EventTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence: Vec<String>,
}

/// Either a timed `dateTime` or an all-day `date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl CalendarItem {
    pub fn title(&self) -> &str {
        self.summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNTITLED)
    }

    fn malformed(&self, reason: impl Into<String>) -> PlannerError {
        PlannerError::MalformedEvent {
            id: self.id.clone(),
            reason: reason.into(),
        }
    }

    /// The item's own timezone, falling back to the window's.
    fn zone(&self, fallback: Tz) -> Result<Tz> {
        match self.start.time_zone.as_deref() {
            Some(name) => name
                .parse()
                .map_err(|_| PlannerError::InvalidTimezone(name.to_string())),
            None => Ok(fallback),
        }
    }

    /// Occurrences of this item that touch the window.
    fn entries_on(&self, window: &DayWindow) -> Result<Vec<CalendarEntry>> {
        match (self.start.date_time, self.start.date) {
            (Some(start), _) => self.timed_entries(start, window),
            (None, Some(date)) => Ok(self.all_day_entry(date, window).into_iter().collect()),
            (None, None) => Err(self.malformed("start has neither dateTime nor date")),
        }
    }

    fn timed_entries(
        &self,
        start: DateTime<FixedOffset>,
        window: &DayWindow,
    ) -> Result<Vec<CalendarEntry>> {
        let end = self.end.as_ref().and_then(|e| e.date_time);

        let Some(end) = end else {
            // Listed but never blocks a meal.
            let start = start.with_timezone(&window.tz);
            if !window.contains(start) {
                return Ok(Vec::new());
            }
            return Ok(vec![self.entry(EntryTime::Open(start), None)]);
        };

        if end <= start {
            return Err(self.malformed(format!("end {} is not after start {}", end, start)));
        }
        let duration = end - start;

        if self.recurrence.is_empty() {
            let interval = TimeInterval::new(
                start.with_timezone(&window.tz),
                end.with_timezone(&window.tz),
            )?;
            if !interval.overlaps(window.start, window.end) {
                return Ok(Vec::new());
            }
            return Ok(vec![self.entry(EntryTime::Timed(interval), None)]);
        }

        let zone = self.zone(window.tz)?;
        let intervals =
            expand_in_window(&self.recurrence, start.with_timezone(&zone), duration, window)?;
        Ok(intervals
            .into_iter()
            .map(|interval| {
                let occurrence = interval.start().with_timezone(&zone);
                self.entry(EntryTime::Timed(interval), Some(occurrence))
            })
            .collect())
    }

    fn all_day_entry(&self, date: NaiveDate, window: &DayWindow) -> Option<CalendarEntry> {
        // All-day end dates are exclusive.
        let next = date.succ_opt().unwrap_or(date);
        let end = self
            .end
            .as_ref()
            .and_then(|e| e.date)
            .filter(|end| *end > date)
            .unwrap_or(next);
        let covers = date <= window.date && window.date < end;
        covers.then(|| self.entry(EntryTime::AllDay(date), None))
    }

    fn entry(&self, time: EntryTime, occurrence: Option<DateTime<Tz>>) -> CalendarEntry {
        CalendarEntry {
            id: self.id.clone(),
            summary: self.title().to_string(),
            time,
            occurrence,
        }
    }
}

// ── Listing ─────────────────────────────────────────────────────────────────

/// When a listed entry happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryTime {
    /// A timed occurrence with a start and end.
    Timed(TimeInterval),
    /// A timed item with no end time.
    Open(DateTime<Tz>),
    /// An all-day item.
    AllDay(NaiveDate),
}

/// One calendar entry on a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: String,
    pub summary: String,
    pub time: EntryTime,
    /// Start of this occurrence in the item's own timezone, set only for
    /// entries expanded from a recurring item.
    pub occurrence: Option<DateTime<Tz>>,
}

impl CalendarEntry {
    /// Sort key within a day; all-day entries sort to the start of the window.
    fn sort_key(&self, window: &DayWindow) -> DateTime<Tz> {
        match self.time {
            EntryTime::Timed(interval) => interval.start(),
            EntryTime::Open(start) => start,
            EntryTime::AllDay(_) => window.start,
        }
    }

    /// Start shown in listings: `HH:MM AM/PM`, or the date for all-day entries.
    pub fn display_time(&self) -> String {
        match self.time {
            EntryTime::Timed(interval) => format_clock(interval.start()),
            EntryTime::Open(start) => format_clock(start),
            EntryTime::AllDay(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Timed entries as scheduler events. All-day and open-ended entries never block.
pub fn busy_events(entries: &[CalendarEntry]) -> Vec<Event> {
    entries
        .iter()
        .filter_map(|entry| match entry.time {
            EntryTime::Timed(interval) => Some(Event::new(entry.summary.clone(), interval)),
            EntryTime::Open(_) | EntryTime::AllDay(_) => None,
        })
        .collect()
}

/// Expand and order every item of a list for one day.
pub fn entries_for_day(list: &EventList, window: &DayWindow) -> Result<Vec<CalendarEntry>> {
    let mut entries = Vec::new();
    for item in &list.items {
        entries.extend(item.entries_on(window)?);
    }
    entries.sort_by_key(|entry| entry.sort_key(window));
    Ok(entries)
}

// ── Sources ─────────────────────────────────────────────────────────────────

/// Supplies the entries of a day.
pub trait CalendarSource {
    fn entries_on(&self, window: &DayWindow) -> Result<Vec<CalendarEntry>>;
}

/// A calendar that can also be edited.
pub trait CalendarStore: CalendarSource {
    /// Insert an event and return its id.
    fn add(&self, event: &NewEvent) -> Result<String>;

    /// Remove the item and, for a recurring item, every occurrence.
    fn delete(&self, id: &str) -> Result<()>;

    /// Cancel one occurrence of a recurring item, keeping the rest of the series.
    fn exclude(&self, id: &str, occurrence: DateTime<Tz>) -> Result<()>;
}

impl CalendarSource for EventList {
    fn entries_on(&self, window: &DayWindow) -> Result<Vec<CalendarEntry>> {
        entries_for_day(self, window)
    }
}

/// A new single (non-recurring) event.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub tz: Tz,
}

impl NewEvent {
    fn into_item(self) -> Result<CalendarItem> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::MalformedEvent {
                id: String::new(),
                reason: "title is required".to_string(),
            });
        }
        if self.duration_minutes == 0 {
            return Err(PlannerError::InvalidDuration(
                "event duration must be at least one minute".to_string(),
            ));
        }
        let window = DayWindow::new(self.date, self.tz)?;
        let start = window.at(self.time, DstPolicy::Skip)?;
        let end = start + Duration::minutes(i64::from(self.duration_minutes));
        let zone = Some(self.tz.name().to_string());

        Ok(CalendarItem {
            id: uuid::Uuid::new_v4().simple().to_string(),
            summary: Some(self.title.trim().to_string()),
            start: EventTime {
                date_time: Some(start.fixed_offset()),
                date: None,
                time_zone: zone.clone(),
            },
            end: Some(EventTime {
                date_time: Some(end.fixed_offset()),
                date: None,
                time_zone: zone,
            }),
            recurrence: Vec::new(),
        })
    }
}

/// A calendar stored as an `events.list` JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonCalendar {
    path: PathBuf,
}

impl JsonCalendar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. A missing file is an empty calendar.
    pub fn load(&self) -> Result<EventList> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "calendar file missing, starting empty");
                Ok(EventList::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, list: &EventList) -> Result<()> {
        let json = serde_json::to_string_pretty(list)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl CalendarSource for JsonCalendar {
    fn entries_on(&self, window: &DayWindow) -> Result<Vec<CalendarEntry>> {
        entries_for_day(&self.load()?, window)
    }
}

impl CalendarStore for JsonCalendar {
    fn add(&self, event: &NewEvent) -> Result<String> {
        let item = event.clone().into_item()?;
        let id = item.id.clone();
        let mut list = self.load()?;
        list.items.push(item);
        self.save(&list)?;
        info!(id = %id, title = %event.title, "event added");
        Ok(id)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut list = self.load()?;
        let before = list.items.len();
        list.items.retain(|item| item.id != id);
        if list.items.len() == before {
            return Err(PlannerError::EventNotFound(id.to_string()));
        }
        self.save(&list)?;
        info!(id = %id, "event deleted");
        Ok(())
    }

    fn exclude(&self, id: &str, occurrence: DateTime<Tz>) -> Result<()> {
        let mut list = self.load()?;
        let item = list
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| PlannerError::EventNotFound(id.to_string()))?;
        if item.recurrence.is_empty() {
            return Err(item.malformed("only recurring items have occurrences to exclude"));
        }
        item.recurrence.push(exdate_line(occurrence));
        self.save(&list)?;
        info!(id = %id, occurrence = %occurrence, "occurrence excluded");
        Ok(())
    }
}
