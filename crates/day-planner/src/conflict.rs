//! Detect which busy intervals a candidate slot collides with.
//!
//! Two ranges overlap when `a.start < b.end && b.start < a.end`.
//! Adjacent ranges (where one ends exactly when another starts) are NOT conflicts.

use crate::interval::TimeInterval;
use chrono::DateTime;
use chrono_tz::Tz;

/// A busy interval that overlaps a candidate slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub busy: TimeInterval,
    pub overlap_minutes: i64,
}

/// Find every busy interval overlapping the candidate `[start, end)`.
///
/// Busy intervals may overlap each other; each one is reported separately.
pub fn find_conflicts(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    busy: &[TimeInterval],
) -> Vec<Conflict> {
    busy.iter()
        .filter(|b| b.overlaps(start, end))
        .map(|b| {
            let overlap_start = b.start().max(start);
            let overlap_end = b.end().min(end);
            Conflict {
                busy: *b,
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            }
        })
        .collect()
}
