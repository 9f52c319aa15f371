//! DST transition policies for wall-clock times.

use crate::error::{PlannerError, Result};
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Policy for wall-clock times that fall during DST transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DstPolicy {
    /// Reject times that fall in the DST gap (e.g., 2:30 AM during spring forward)
    Skip,
    /// Shift to the next valid minute after the gap
    #[default]
    ShiftForward,
}

/// Longest gap we walk across. Real-world transitions are at most two hours.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Convert a naive wall-clock time in `tz` to an instant.
///
/// Ambiguous times (fall back) resolve to the earlier instant.
pub fn localize(tz: Tz, naive: NaiveDateTime, policy: DstPolicy) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => match policy {
            DstPolicy::Skip => Err(nonexistent(tz, naive)),
            DstPolicy::ShiftForward => shift_past_gap(tz, naive),
        },
    }
}

fn shift_past_gap(tz: Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    for minutes in 1..=MAX_GAP_MINUTES {
        let candidate = naive + Duration::minutes(minutes);
        if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
            return Ok(dt);
        }
    }
    Err(nonexistent(tz, naive))
}

fn nonexistent(tz: Tz, naive: NaiveDateTime) -> PlannerError {
    PlannerError::NonexistentLocalTime(naive.to_string(), tz.name().to_string())
}
