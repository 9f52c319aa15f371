//! Free-slot scheduling -- push each anchor past the events it collides with.
//!
//! Resolution is a fixed-point iteration: while the candidate slot overlaps any
//! busy interval, restart it `gap` after the latest-ending overlapping interval.
//! Every jump lands strictly after at least one interval that can then never
//! overlap again, so the loop runs at most `busy.len()` times.
//!
//! Anchors never block each other; each one is resolved against the fixed
//! events only.

use crate::conflict::find_conflicts;
use crate::interval::{Anchor, Event, TimeInterval};
use crate::plan::{DayPlan, EntryKind, PlanEntry};
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use tracing::debug;

/// Buffer left between the end of a conflicting event and a rescheduled anchor.
pub const DEFAULT_GAP_MINUTES: u32 = 5;

/// An anchor after conflict resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledSlot {
    pub name: String,
    pub resolved_start: DateTime<Tz>,
    pub default_start: DateTime<Tz>,
    pub duration: Duration,
}

impl ScheduledSlot {
    /// Whether resolution moved the anchor away from its default start.
    pub fn moved(&self) -> bool {
        self.resolved_start != self.default_start
    }

    pub fn resolved_end(&self) -> DateTime<Tz> {
        self.resolved_start + self.duration
    }
}

/// Free-slot scheduler with a fixed post-event gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    gap: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_GAP_MINUTES)
    }
}

impl Scheduler {
    /// A scheduler leaving `gap_minutes` after each conflicting event.
    ///
    /// The gap is unsigned, so every jump moves the candidate forward.
    pub fn new(gap_minutes: u32) -> Self {
        Self {
            gap: Duration::minutes(i64::from(gap_minutes)),
        }
    }

    pub fn gap(&self) -> Duration {
        self.gap
    }

    /// Find the earliest start at or after the anchor's default that overlaps no busy interval.
    pub fn resolve(&self, anchor: &Anchor, busy: &[TimeInterval]) -> DateTime<Tz> {
        let mut start = anchor.default_start();

        loop {
            let end = start + anchor.duration();
            let conflicts = find_conflicts(start, end, busy);
            let Some(latest_end) = conflicts.iter().map(|c| c.busy.end()).max() else {
                return start;
            };

            let next = latest_end + self.gap;
            debug!(
                anchor = anchor.name(),
                conflicts = conflicts.len(),
                from = %start,
                to = %next,
                "anchor pushed past conflicting events"
            );
            start = next;
        }
    }

    /// Resolve every anchor against the same fixed event set.
    pub fn schedule(&self, anchors: &[Anchor], events: &[Event]) -> Vec<ScheduledSlot> {
        let busy: Vec<TimeInterval> = events.iter().map(|e| e.interval).collect();

        anchors
            .iter()
            .map(|anchor| ScheduledSlot {
                name: anchor.name().to_string(),
                resolved_start: self.resolve(anchor, &busy),
                default_start: anchor.default_start(),
                duration: anchor.duration(),
            })
            .collect()
    }

    /// Merge resolved anchors with the events into one time-ordered plan.
    ///
    /// Anchors are appended before events and the sort is stable, so an anchor
    /// and an event at the same instant list the anchor first.
    pub fn plan(&self, anchors: &[Anchor], events: &[Event]) -> DayPlan {
        let slots = self.schedule(anchors, events);

        let mut entries: Vec<PlanEntry> = slots
            .iter()
            .map(|slot| PlanEntry {
                label: slot.name.clone(),
                time: slot.resolved_start,
                kind: EntryKind::Anchor,
            })
            .chain(events.iter().map(|event| PlanEntry {
                label: event.label.clone(),
                time: event.start(),
                kind: EntryKind::Event,
            }))
            .collect();
        entries.sort_by_key(|entry| entry.time);

        DayPlan { entries, slots }
    }
}

/// Resolve one anchor with the default 5-minute gap.
pub fn resolve(anchor: &Anchor, busy: &[TimeInterval]) -> DateTime<Tz> {
    Scheduler::default().resolve(anchor, busy)
}

/// Build a day plan with the default 5-minute gap.
pub fn plan(anchors: &[Anchor], events: &[Event]) -> DayPlan {
    Scheduler::default().plan(anchors, events)
}
