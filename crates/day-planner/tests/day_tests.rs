//! Tests for day windows, DST localisation and input parsing.

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Asia::Kolkata;
use day_planner::dst::localize;
use day_planner::{default_meals, parse_date, parse_time, parse_timezone, DayWindow, DstPolicy, PlannerError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// ── Day windows ─────────────────────────────────────────────────────────────

#[test]
fn window_spans_local_midnight_to_midnight() {
    let day = DayWindow::new(date(2026, 3, 2), Kolkata).unwrap();
    assert_eq!(day.start, Kolkata.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap());
    assert_eq!(day.end, Kolkata.with_ymd_and_hms(2026, 3, 3, 0, 0, 0).unwrap());
    assert_eq!(day.end - day.start, Duration::hours(24));
}

#[test]
fn spring_forward_day_is_23_hours() {
    let day = DayWindow::new(date(2026, 3, 8), New_York).unwrap();
    assert_eq!(day.end - day.start, Duration::hours(23));
}

#[test]
fn fall_back_day_is_25_hours() {
    let day = DayWindow::new(date(2026, 11, 1), New_York).unwrap();
    assert_eq!(day.end - day.start, Duration::hours(25));
}

#[test]
fn contains_is_half_open() {
    let day = DayWindow::new(date(2026, 3, 2), Kolkata).unwrap();
    assert!(day.contains(day.start));
    assert!(!day.contains(day.end));
}

// ── DST policies ────────────────────────────────────────────────────────────

#[test]
fn gap_time_shifts_forward_by_default() {
    let naive = date(2026, 3, 8).and_time(time(2, 30));
    let dt = localize(New_York, naive, DstPolicy::default()).unwrap();
    assert_eq!(dt.hour(), 3);
    assert_eq!(dt.minute(), 0);
}

#[test]
fn gap_time_rejected_with_skip() {
    let naive = date(2026, 3, 8).and_time(time(2, 30));
    let err = localize(New_York, naive, DstPolicy::Skip).unwrap_err();
    assert!(matches!(err, PlannerError::NonexistentLocalTime(_, _)));
}

#[test]
fn ambiguous_time_takes_earliest_instant() {
    // 01:30 happens twice on 2026-11-01; the first is EDT (UTC-4).
    let naive = date(2026, 11, 1).and_time(time(1, 30));
    let dt = localize(New_York, naive, DstPolicy::Skip).unwrap();
    assert_eq!(
        dt.with_timezone(&Utc),
        Utc.with_ymd_and_hms(2026, 11, 1, 5, 30, 0).unwrap()
    );
}

// ── Default meals ───────────────────────────────────────────────────────────

#[test]
fn default_meals_are_breakfast_lunch_dinner() {
    let day = DayWindow::new(date(2026, 3, 2), Kolkata).unwrap();
    let meals = default_meals(&day).unwrap();

    let summary: Vec<(&str, u32, i64)> = meals
        .iter()
        .map(|m| (m.name(), m.default_start().hour(), m.duration().num_minutes()))
        .collect();
    assert_eq!(
        summary,
        vec![("Breakfast", 7, 30), ("Lunch", 13, 30), ("Dinner", 20, 30)]
    );
}

#[test]
fn anchor_with_zero_minutes_rejected() {
    let day = DayWindow::new(date(2026, 3, 2), Kolkata).unwrap();
    assert!(matches!(
        day.anchor("Snack", time(16, 0), 0),
        Err(PlannerError::InvalidDuration(_))
    ));
}

// ── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn parses_valid_inputs() {
    assert_eq!(parse_date("2026-03-02").unwrap(), date(2026, 3, 2));
    assert_eq!(parse_time("07:05").unwrap(), time(7, 5));
    assert_eq!(parse_timezone("Asia/Kolkata").unwrap(), Kolkata);
}

#[test]
fn rejects_malformed_inputs() {
    assert!(matches!(parse_date("02/03/2026"), Err(PlannerError::InvalidDate(_))));
    assert!(matches!(parse_date("2026-02-30"), Err(PlannerError::InvalidDate(_))));
    assert!(matches!(parse_time("7pm"), Err(PlannerError::InvalidTime(_))));
    assert!(matches!(parse_time("25:00"), Err(PlannerError::InvalidTime(_))));
    assert!(matches!(parse_timezone("Mars/Olympus"), Err(PlannerError::InvalidTimezone(_))));
}
