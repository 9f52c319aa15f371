//! Tests for candidate-slot conflict detection.

use chrono::{DateTime, TimeZone};
use chrono_tz::Europe::Berlin;
use chrono_tz::Tz;
use day_planner::find_conflicts;
use day_planner::TimeInterval;

/// Helper to build a wall-clock instant on 2026-03-01 in Berlin.
fn at(hour: u32, minute: u32) -> DateTime<Tz> {
    Berlin
        .with_ymd_and_hms(2026, 3, 1, hour, minute, 0)
        .unwrap()
}

fn busy(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeInterval {
    TimeInterval::new(at(start_hour, start_min), at(end_hour, end_min)).unwrap()
}

#[test]
fn partial_overlap_detected() {
    // Candidate 09:00-10:00, busy 09:30-10:30 → 30-min overlap
    let conflicts = find_conflicts(at(9, 0), at(10, 0), &[busy(9, 30, 10, 30)]);

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn disjoint_interval_no_conflict() {
    let conflicts = find_conflicts(at(9, 0), at(10, 0), &[busy(11, 0, 12, 0)]);
    assert!(conflicts.is_empty(), "disjoint intervals should not conflict");
}

#[test]
fn adjacent_intervals_not_a_conflict() {
    // Busy ends exactly at candidate start, another starts exactly at candidate end.
    let conflicts = find_conflicts(
        at(9, 0),
        at(10, 0),
        &[busy(8, 0, 9, 0), busy(10, 0, 11, 0)],
    );
    assert!(
        conflicts.is_empty(),
        "adjacent intervals (end == start) should not be conflicts"
    );
}

#[test]
fn every_overlapping_interval_reported() {
    let conflicts = find_conflicts(
        at(13, 0),
        at(13, 30),
        &[busy(12, 0, 13, 10), busy(12, 45, 14, 30), busy(15, 0, 16, 0)],
    );

    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].overlap_minutes, 10);
    assert_eq!(conflicts[1].overlap_minutes, 30);
    assert_eq!(conflicts[1].busy.end(), at(14, 30));
}

#[test]
fn candidate_inside_long_event() {
    // Busy 09:00-12:00, candidate 10:00-10:30 fully inside.
    let conflicts = find_conflicts(at(10, 0), at(10, 30), &[busy(9, 0, 12, 0)]);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].overlap_minutes, 30,
        "overlap should be the candidate's own length"
    );
}

#[test]
fn no_busy_intervals_no_conflicts() {
    assert!(find_conflicts(at(9, 0), at(10, 0), &[]).is_empty());
}
