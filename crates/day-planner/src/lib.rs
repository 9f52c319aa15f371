//! # day-planner
//!
//! Conflict-free meal scheduling around a day's calendar events.
//!
//! Given the events of one day and a set of anchors (breakfast, lunch and
//! dinner at their usual times), the scheduler pushes every anchor past the
//! events it collides with, leaving a 5-minute buffer, until it no longer
//! overlaps anything. The resolved anchors and the events are then merged
//! into a single time-ordered [`DayPlan`].
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use day_planner::{default_meals, plan, DayWindow, Event, TimeInterval};
//!
//! let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let day = DayWindow::new(date, chrono_tz::Asia::Kolkata).unwrap();
//! let at = |h, m| day.at(NaiveTime::from_hms_opt(h, m, 0).unwrap(), Default::default()).unwrap();
//!
//! let meeting = Event::new("Meeting", TimeInterval::new(at(7, 0), at(8, 0)).unwrap());
//! let plan = plan(&default_meals(&day).unwrap(), &[meeting]);
//!
//! assert_eq!(plan.lines()[1], "- Breakfast at 08:05 AM");
//! ```
//!
//! ## Modules
//!
//! - [`scheduler`] — fixed-point anchor resolution and plan merging
//! - [`conflict`] — overlap detection between a candidate slot and busy intervals
//! - [`plan`] — `DayPlan` and its text rendering
//! - [`interval`] — validated `TimeInterval`, `Event` and `Anchor`
//! - [`day`] — day windows, input parsing, default meals
//! - [`dst`] — DST gap/overlap policies
//! - [`recurrence`] — RRULE expansion into a day window
//! - [`calendar`] — calendar DTOs, sources and the JSON-file store
//! - [`session`] — numbered listings for select/delete flows
//! - [`error`] — Error types

pub mod calendar;
pub mod conflict;
pub mod day;
pub mod dst;
pub mod error;
pub mod interval;
pub mod plan;
pub mod recurrence;
pub mod scheduler;
pub mod session;

pub use calendar::{busy_events, CalendarEntry, CalendarSource, CalendarStore, JsonCalendar, NewEvent};
pub use conflict::find_conflicts;
pub use day::{default_meals, parse_date, parse_time, parse_timezone, DayWindow};
pub use dst::DstPolicy;
pub use error::PlannerError;
pub use interval::{Anchor, Event, TimeInterval};
pub use plan::{DayPlan, EntryKind, PlanEntry};
pub use scheduler::{plan, resolve, ScheduledSlot, Scheduler};
pub use session::PlanningSession;
