//! Calendar days in a timezone, input parsing, and the default meal anchors.

use crate::dst::{localize, DstPolicy};
use crate::error::{PlannerError, Result};
use crate::interval::Anchor;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

/// Default meals: name, local start time (hour, minute).
pub const DEFAULT_MEALS: [(&str, u32, u32); 3] =
    [("Breakfast", 7, 0), ("Lunch", 13, 0), ("Dinner", 20, 0)];

/// Default meal length in minutes.
pub const DEFAULT_MEAL_MINUTES: u32 = 30;

/// The local day `[midnight, next midnight)` for a date in a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub tz: Tz,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl DayWindow {
    pub fn new(date: NaiveDate, tz: Tz) -> Result<Self> {
        let next = date
            .succ_opt()
            .ok_or_else(|| PlannerError::InvalidDate(date.to_string()))?;
        let start = localize(tz, date.and_time(NaiveTime::MIN), DstPolicy::ShiftForward)?;
        let end = localize(tz, next.and_time(NaiveTime::MIN), DstPolicy::ShiftForward)?;
        Ok(Self {
            date,
            tz,
            start,
            end,
        })
    }

    /// The window for the current date in `tz`.
    pub fn today(tz: Tz) -> Result<Self> {
        Self::new(Utc::now().with_timezone(&tz).date_naive(), tz)
    }

    /// The instant of a wall-clock time on this day.
    pub fn at(&self, time: NaiveTime, policy: DstPolicy) -> Result<DateTime<Tz>> {
        localize(self.tz, self.date.and_time(time), policy)
    }

    /// An anchor at a wall-clock time on this day. Gaps shift forward.
    pub fn anchor(&self, name: &str, time: NaiveTime, duration_minutes: u32) -> Result<Anchor> {
        let start = self.at(time, DstPolicy::ShiftForward)?;
        Anchor::new(name, start, Duration::minutes(i64::from(duration_minutes)))
    }

    pub fn contains(&self, instant: DateTime<Tz>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Breakfast 07:00, lunch 13:00 and dinner 20:00, 30 minutes each.
pub fn default_meals(window: &DayWindow) -> Result<Vec<Anchor>> {
    DEFAULT_MEALS
        .iter()
        .map(|&(name, hour, minute)| {
            let time = NaiveTime::from_hms_opt(hour, minute, 0)
                .ok_or_else(|| PlannerError::InvalidTime(format!("{hour:02}:{minute:02}")))?;
            window.anchor(name, time, DEFAULT_MEAL_MINUTES)
        })
        .collect()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(input.to_string()))
}

/// Parse a 24-hour `HH:MM` time.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| PlannerError::InvalidTime(input.to_string()))
}

/// Parse an IANA timezone name such as `Asia/Kolkata`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse()
        .map_err(|_| PlannerError::InvalidTimezone(name.to_string()))
}
