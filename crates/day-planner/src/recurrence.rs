//! Recurrence expansion -- turns a recurring calendar item into the concrete
//! occurrences that touch one day.
//!
//! Calendar items carry RFC 5545 lines (`RRULE:...`, `EXDATE;TZID=...:...`).
//! Expansion goes through the `rrule` crate with a `DTSTART;TZID=` line built
//! from the item's own timezone, so wall-clock times survive DST changes.

use crate::day::DayWindow;
use crate::error::{PlannerError, Result};
use crate::interval::TimeInterval;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use rrule::RRuleSet;
use tracing::debug;

const ICAL_LOCAL: &str = "%Y%m%dT%H%M%S";

/// An `EXDATE` line cancelling the occurrence that starts at `occurrence`.
pub fn exdate_line(occurrence: DateTime<Tz>) -> String {
    format!(
        "EXDATE;TZID={}:{}",
        occurrence.timezone().name(),
        occurrence.format(ICAL_LOCAL)
    )
}

/// Expand a recurring item into every occurrence overlapping `window`.
///
/// # Arguments
/// - `lines` -- recurrence lines as stored on the item (must include one `RRULE:` line)
/// - `start` -- first occurrence, in the item's own timezone
/// - `duration` -- length of each occurrence
/// - `window` -- the day being planned
///
/// Rules without COUNT or UNTIL are bounded with a UTC UNTIL at the window end.
///
/// # Errors
/// Returns `PlannerError::InvalidRule` if the RRULE line is missing, empty, or unparseable.
pub fn expand_in_window(
    lines: &[String],
    start: DateTime<Tz>,
    duration: Duration,
    window: &DayWindow,
) -> Result<Vec<TimeInterval>> {
    let tz = start.timezone();

    let mut rule: Option<String> = None;
    let mut extra: Vec<&str> = Vec::new();
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        if line.to_uppercase().starts_with("RRULE:") {
            rule = Some(line["RRULE:".len()..].to_string());
        } else {
            extra.push(line);
        }
    }
    let mut rule = rule.ok_or_else(|| PlannerError::InvalidRule("missing RRULE line".into()))?;
    if rule.trim().is_empty() {
        return Err(PlannerError::InvalidRule("empty RRULE string".to_string()));
    }

    // Nothing can start inside a window that ends before the series begins.
    if start >= window.end {
        return Ok(Vec::new());
    }

    let upper = rule.to_uppercase();
    if !upper.contains("COUNT=") && !upper.contains("UNTIL=") {
        // A zoned DTSTART only accepts a UTC UNTIL.
        let until = window.end.with_timezone(&Utc).format(ICAL_LOCAL);
        rule = format!("{};UNTIL={}Z", rule, until);
    }

    let mut text = format!(
        "DTSTART;TZID={}:{}\nRRULE:{}",
        tz.name(),
        start.format(ICAL_LOCAL),
        rule
    );
    for line in extra {
        text.push('\n');
        text.push_str(line);
    }

    let set: RRuleSet = text
        .parse()
        .map_err(|e| PlannerError::InvalidRule(format!("{}", e)))?;

    let instances = set.all(u16::MAX);
    debug!(
        occurrences = instances.dates.len(),
        limited = instances.limited,
        "expanded recurrence"
    );

    instances
        .dates
        .into_iter()
        .map(|dt| dt.with_timezone(&window.tz))
        .filter(|occurrence| *occurrence < window.end && *occurrence + duration > window.start)
        .map(|occurrence| TimeInterval::new(occurrence, occurrence + duration))
        .collect()
}
