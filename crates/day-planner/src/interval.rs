//! Validated time model shared by the scheduler and the calendar source.
//!
//! Every timestamp is a `DateTime<Tz>` so a day plan stays in a single IANA
//! timezone. Constructors reject malformed input up front, which keeps
//! [`crate::scheduler`] infallible.

use crate::error::{PlannerError, Result};
use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// A busy period `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl TimeInterval {
    /// Build an interval, failing with `PlannerError::InvalidInterval` unless `start < end`.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self> {
        if start >= end {
            return Err(PlannerError::InvalidInterval {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    /// Strict overlap with `[start, end)`. Adjacent intervals do not overlap.
    pub fn overlaps(&self, start: DateTime<Tz>, end: DateTime<Tz>) -> bool {
        self.start < end && self.end > start
    }
}

/// A calendar event the scheduler must plan around.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub interval: TimeInterval,
    pub label: String,
}

impl Event {
    pub fn new(label: impl Into<String>, interval: TimeInterval) -> Self {
        Self {
            interval,
            label: label.into(),
        }
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.interval.start()
    }
}

/// A desired activity (a meal) with an ideal start time and a positive duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    name: String,
    default_start: DateTime<Tz>,
    duration: Duration,
}

impl Anchor {
    /// Build an anchor, failing with `PlannerError::InvalidDuration` if `duration <= 0`.
    pub fn new(
        name: impl Into<String>,
        default_start: DateTime<Tz>,
        duration: Duration,
    ) -> Result<Self> {
        let name = name.into();
        if duration <= Duration::zero() {
            return Err(PlannerError::InvalidDuration(format!(
                "anchor '{}' must last longer than zero minutes (got {} minutes)",
                name,
                duration.num_minutes()
            )));
        }
        Ok(Self {
            name,
            default_start,
            duration,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_start(&self) -> DateTime<Tz> {
        self.default_start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
