//! Behaviours that the cards of the directory rely on.

use chrono::{Duration, NaiveDateTime};
use venue_hours_syntax::WEEK;

use crate::status::{OpenStatus, StatusMessage};
use crate::{datetime, status_at, VenueHours, WeeklySchedule};

/// Dates of the reference week, indexed like `WEEK`.
fn reference_day(idx: usize) -> NaiveDateTime {
    datetime!("2024-06-02 00:00") + Duration::days(idx as i64)
}

#[test]
fn open_strictly_inside_single_day_block() {
    for (idx, day) in WEEK.into_iter().enumerate() {
        let hours = VenueHours::parse(&format!("{day:?}: 9:15 AM to 4:45 PM"));
        let start = reference_day(idx);

        for minutes in [9 * 60 + 16, 12 * 60, 16 * 60 + 44] {
            let now = start + Duration::minutes(minutes);
            assert!(hours.is_open(now), "should be open on {day} at {now}");
        }
    }
}

#[test]
fn inclusive_opening_exclusive_closing() {
    let hours = VenueHours::parse("Monday - Friday 8:00 AM to 5:00 PM");
    assert_eq!(hours.status(datetime!("2024-06-05 08:00")).status, OpenStatus::Open);
    assert!(!hours.is_open(datetime!("2024-06-05 07:59")));
    assert!(!hours.is_open(datetime!("2024-06-05 17:00")));
    assert!(hours.is_open(datetime!("2024-06-05 16:59")));
}

#[test]
fn overnight_wraparound() {
    let hours = VenueHours::parse("Friday: 9:00 PM to 2:00 AM");
    let status = hours.status(datetime!("2024-06-08 01:00"));
    assert!(status.is_open());

    // One hour before closing also falls in the closing soon window.
    assert_eq!(status.status, OpenStatus::ClosingSoon);
}

#[test]
fn unparsable_input_is_unavailable() {
    for raw in [Some(""), Some("garbage text"), None] {
        let status = status_at(raw, datetime!("2024-06-05 12:00"));
        assert_eq!(status.status, OpenStatus::Closed);
        assert_eq!(status.message, StatusMessage::Unavailable);
    }
}

#[test]
fn parsing_is_idempotent() {
    let raw = "Mon - Fri 8 AM to 5 PM, Sat: 10 AM to 2 PM, Sun: Closed, Fri: 9 PM to 1 AM";
    assert_eq!(WeeklySchedule::parse(raw), WeeklySchedule::parse(raw));
    assert_eq!(VenueHours::parse(raw), VenueHours::parse(raw));
}

#[test]
fn closing_soon_boundary() {
    let hours = VenueHours::parse("Wednesday: 8:00 AM to 5:00 PM");
    assert_eq!(hours.status(datetime!("2024-06-05 16:00")).status, OpenStatus::ClosingSoon);
    assert_eq!(hours.status(datetime!("2024-06-05 15:59")).status, OpenStatus::Open);
}

#[test]
fn weekdays_and_saturday_scenario() {
    let hours = VenueHours::parse("Monday - Friday 8:00 AM to 5:00 PM, Saturday: 10:00 AM to 2:00 PM");

    let status = hours.status(datetime!("2024-06-08 13:30"));
    assert!(status.is_open());
    assert!(status.to_string().contains("2:00 PM"));

    let status = hours.status(datetime!("2024-06-08 11:00"));
    assert_eq!(status.status, OpenStatus::Open);
    assert!(status.to_string().contains("2:00 PM"));

    for minutes in (0..24 * 60).step_by(17) {
        let now = datetime!("2024-06-09 00:00") + Duration::minutes(minutes);
        let status = hours.status(now);
        assert_eq!(status.status, OpenStatus::Closed, "should be closed at {now}");
        assert_eq!(status.to_string(), "Closed today");
    }
}

#[test]
fn evaluation_never_fails() {
    let inputs = [
        "Monday: 99 PM to 5 PM",
        "Monday - : 9 AM to 5 PM",
        "- Friday 9 AM to 5 PM",
        ":,:,:;\n\n",
        "Friday: 12 AM to 12 AM, Saturday: 12 AM to 12 AM",
        "Tue: 5 PM to 5 PM",
        "\u{202F}\u{A0}",
        "日曜日: 9 AM to 5 PM",
    ];

    for raw in inputs {
        let hours = VenueHours::parse(raw);

        for idx in 0..7 {
            let now = reference_day(idx) + Duration::minutes(13 * 60 + 7);
            let status = hours.status(now);
            assert_eq!(status.is_open(), status.status.is_open());
            let _ = hours.next_opening(now);
            let _ = hours.next_closing(now);
        }
    }
}
