//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;
use chrono::{DateTime, Datelike, Duration};

use std::fmt::Debug;

use venue_hours::{Context, VenueHours, WeeklySchedule};

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_secs: i64,
    pub hours: String,
    pub soon: u8,
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = DateTime::from_timestamp(self.date_secs, 0) {
            debug.field("date", &date.naive_utc());
        }

        debug.field("hours", &self.hours);
        debug.field("soon", &self.soon);
        debug.finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_hours(data: Data) -> bool {
    let Some(date) = DateTime::from_timestamp(data.date_secs, 0) else {
        return false;
    };

    let date = date.naive_utc();

    if date.year() < 1900 || date.year() > 9999 {
        return false;
    }

    let schedule = WeeklySchedule::parse(&data.hours);

    if !schedule.is_available() {
        return false;
    }

    // The weekly listing must be read back into the same schedule.
    let normalized = schedule.to_string();

    assert_eq!(
        schedule,
        WeeklySchedule::parse(&normalized),
        "listing `{normalized}` of `{}` differs",
        data.hours,
    );

    let ctx = Context::default().with_soon(Duration::minutes(data.soon.into()));
    let hours = VenueHours::from_schedule(schedule).with_context(ctx);
    let status = hours.status(date);
    let next_closing = hours.next_closing(date);
    let next_opening = hours.next_opening(date);

    assert_eq!(status.is_open(), status.status.is_open());

    if let Some(closing) = next_closing {
        assert!(closing > date);
    }

    if let Some(opening) = next_opening {
        assert!(opening > date);

        if status.is_open() {
            // The venue must close before it opens again.
            assert!(next_closing.is_some_and(|closing| closing <= opening));
        }
    }

    true
}
