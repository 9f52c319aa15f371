//! Tests for numbered listings, selection and delete-then-refresh.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Asia::Kolkata;
use day_planner::calendar::EventList;
use day_planner::{default_meals, CalendarSource, CalendarStore, DayWindow, JsonCalendar, NewEvent, PlannerError, PlanningSession, Scheduler};

fn window() -> DayWindow {
    DayWindow::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), Kolkata).unwrap()
}

fn list() -> EventList {
    serde_json::from_str(
        r#"{"items":[
            {"id":"a","summary":"Meeting","start":{"dateTime":"2026-03-02T07:00:00+05:30"},"end":{"dateTime":"2026-03-02T08:00:00+05:30"}},
            {"id":"b","summary":"Review","start":{"dateTime":"2026-03-02T15:00:00+05:30"},"end":{"dateTime":"2026-03-02T16:00:00+05:30"}}
        ]}"#,
    )
    .unwrap()
}

#[test]
fn listing_is_numbered_from_one() {
    let session = PlanningSession::open(&list(), window()).unwrap();
    assert_eq!(
        session.render_listing(),
        "Events for 2026-03-02:\n\n1. Meeting at 07:00 AM\n2. Review at 03:00 PM"
    );
}

#[test]
fn empty_listing_says_so() {
    let session = PlanningSession::open(&EventList::default(), window()).unwrap();
    assert_eq!(session.render_listing(), "No events found for 2026-03-02.");
}

#[test]
fn select_is_one_based_and_bounded() {
    let session = PlanningSession::open(&list(), window()).unwrap();
    assert_eq!(session.select(2).unwrap().id, "b");
    assert!(matches!(
        session.select(0),
        Err(PlannerError::InvalidSelection { number: 0, available: 2 })
    ));
    assert!(matches!(
        session.select(3),
        Err(PlannerError::InvalidSelection { number: 3, available: 2 })
    ));
}

#[test]
fn session_plan_uses_its_listing() {
    let session = PlanningSession::open(&list(), window()).unwrap();
    let meals = default_meals(session.window()).unwrap();
    let plan = session.plan(&meals, &Scheduler::default());

    assert_eq!(
        plan.lines(),
        vec![
            "- Event: Meeting at 07:00 AM",
            "- Breakfast at 08:05 AM",
            "- Lunch at 01:00 PM",
            "- Event: Review at 03:00 PM",
            "- Dinner at 08:00 PM",
        ]
    );
}

#[test]
fn delete_refreshes_the_same_day() {
    let path = std::env::temp_dir().join(format!("day-planner-session-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let calendar = JsonCalendar::new(&path);
    for (title, hour) in [("Yoga", 6), ("Call", 11)] {
        calendar
            .add(&NewEvent {
                title: title.to_string(),
                date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
                duration_minutes: 30,
                tz: Kolkata,
            })
            .unwrap();
    }

    let session = PlanningSession::open(&calendar, window()).unwrap();
    let refreshed = session.delete(1, &calendar).unwrap();

    assert_eq!(refreshed.date(), session.date());
    assert_eq!(refreshed.numbered_lines(), vec!["1. Call at 11:00 AM"]);
    assert!(session.delete(5, &calendar).is_err());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn deleting_an_occurrence_keeps_the_rest_of_the_series() {
    let path = std::env::temp_dir().join(format!("day-planner-series-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"items":[
            {"id":"standup","summary":"Standup",
             "start":{"dateTime":"2026-03-02T10:00:00+05:30","timeZone":"Asia/Kolkata"},
             "end":{"dateTime":"2026-03-02T10:15:00+05:30","timeZone":"Asia/Kolkata"},
             "recurrence":["RRULE:FREQ=DAILY"]}
        ]}"#,
    )
    .unwrap();
    let calendar = JsonCalendar::new(&path);
    let day = |d| DayWindow::new(NaiveDate::from_ymd_opt(2026, 3, d).unwrap(), Kolkata).unwrap();

    let session = PlanningSession::open(&calendar, day(3)).unwrap();
    assert_eq!(session.numbered_lines(), vec!["1. Standup at 10:00 AM"]);

    let refreshed = session.delete(1, &calendar).unwrap();
    assert!(refreshed.entries().is_empty());

    assert_eq!(calendar.entries_on(&day(2)).unwrap().len(), 1);
    assert_eq!(calendar.entries_on(&day(4)).unwrap().len(), 1);
    assert_eq!(
        calendar.load().unwrap().items[0].recurrence,
        vec!["RRULE:FREQ=DAILY", "EXDATE;TZID=Asia/Kolkata:20260303T100000"]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn event_from_previous_night_is_planned_from_midnight() {
    let overnight: EventList = serde_json::from_str(
        r#"{"items":[
            {"id":"n","summary":"Night shift","start":{"dateTime":"2026-03-01T23:00:00+05:30"},"end":{"dateTime":"2026-03-02T07:10:00+05:30"}}
        ]}"#,
    )
    .unwrap();
    let session = PlanningSession::open(&overnight, window()).unwrap();
    let plan = session.plan(&default_meals(session.window()).unwrap(), &Scheduler::default());

    assert_eq!(plan.lines()[0], "- Event: Night shift at 12:00 AM");
    assert_eq!(plan.lines()[1], "- Breakfast at 07:15 AM");
    // The listing still shows when the event really began.
    assert_eq!(session.numbered_lines(), vec!["1. Night shift at 11:00 PM"]);
}
