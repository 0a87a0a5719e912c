use std::convert::Infallible;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};

use venue_hours_syntax::{ClockTime, MINUTES_PER_DAY};

use crate::localization::{Localize, NoLocation};
use crate::schedule::{WeeklySchedule, MINUTES_PER_WEEK};
use crate::status::{OpenStatus, OpenStatusResult, StatusMessage};
use crate::Context;

/// Evaluate raw hours of a venue at a given time of the caller's clock.
///
/// ```
/// use venue_hours::{status_at, OpenStatus};
///
/// let now = "2024-06-05T10:00:00".parse().unwrap(); // a Wednesday
/// assert!(status_at(Some("Mon - Fri 8 AM to 5 PM"), now).is_open());
/// assert_eq!(status_at(None, now).to_string(), "Hours unavailable");
/// ```
pub fn status_at(raw: Option<&str>, now: NaiveDateTime) -> OpenStatusResult {
    VenueHours::from_optional(raw).status(now)
}

// VenueHours

/// Parsed hours of a venue and their evaluation context.
///
/// Note that the schedule is immutable and wrapped by an `Arc` so this is
/// safe and fast to clone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct VenueHours<L: Localize = NoLocation> {
    /// Opening intervals for each day of the week
    schedule: Arc<WeeklySchedule>,
    /// Evaluation context
    pub(crate) ctx: Context<L>,
}

impl VenueHours<NoLocation> {
    /// Parse raw hours, parts of the input that can't be read are ignored.
    ///
    /// ```
    /// use venue_hours::VenueHours;
    ///
    /// assert!(VenueHours::parse("Monday: 8 AM to 5 PM").schedule().is_available());
    /// assert!(!VenueHours::parse("call us").schedule().is_available());
    /// ```
    pub fn parse(raw: &str) -> Self {
        Self::from_schedule(WeeklySchedule::parse(raw))
    }

    /// Same as [`VenueHours::parse`] for a listing that may have no hours.
    pub fn from_optional(raw: Option<&str>) -> Self {
        Self::from_schedule(WeeklySchedule::from_optional(raw))
    }

    pub fn from_schedule(schedule: WeeklySchedule) -> Self {
        Self { schedule: Arc::new(schedule), ctx: Context::default() }
    }
}

impl<L: Localize> VenueHours<L> {
    // --
    // -- Builder Methods
    // --

    /// Set a new evaluation context for these hours.
    ///
    /// ```
    /// use venue_hours::localization::TzLocation;
    /// use venue_hours::{Context, VenueHours};
    ///
    /// let hours = VenueHours::parse("Mon - Fri 8 AM to 5 PM")
    ///     .with_context(Context::default().with_locale(TzLocation::new(chrono_tz::Europe::Paris)));
    /// ```
    pub fn with_context<L2: Localize>(self, ctx: Context<L2>) -> VenueHours<L2> {
        VenueHours { schedule: self.schedule, ctx }
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn context(&self) -> &Context<L> {
        &self.ctx
    }

    // --
    // -- High level implementations
    // --

    /// Evaluate the status of the venue at given time.
    ///
    /// ```
    /// use venue_hours::{OpenStatus, VenueHours};
    ///
    /// let hours = VenueHours::parse("Saturday: 10:00 AM to 2:00 PM");
    /// let status = hours.status("2024-06-08T11:00:00".parse().unwrap());
    ///
    /// assert_eq!(status.status, OpenStatus::Open);
    /// assert_eq!(status.to_string(), "Open now — until 2:00 PM");
    /// ```
    pub fn status(&self, now: L::DateTime) -> OpenStatusResult {
        let now = self.ctx.locale.naive(now);

        if !self.schedule.is_available() {
            return OpenStatusResult::closed(StatusMessage::Unavailable);
        }

        let reading = Reading::new(&self.schedule, now);
        let soon = self.ctx.soon_minutes();

        if let Some(current) = reading.current() {
            let remaining = current.end - reading.minute;

            if remaining >= MINUTES_PER_WEEK {
                return OpenStatusResult::new(OpenStatus::Open, StatusMessage::OpenAllWeek);
            }

            let close = clock_time_at(current.end);

            return if remaining <= soon {
                let minutes = remaining.unsigned_abs();
                OpenStatusResult::new(
                    OpenStatus::ClosingSoon,
                    StatusMessage::ClosesIn { minutes, close },
                )
            } else {
                OpenStatusResult::new(OpenStatus::Open, StatusMessage::OpenUntil(close))
            };
        }

        // Listed intervals repeat every week: no next opening means that the
        // venue never opens.
        let Some(start) = reading.next_start_after(reading.minute) else {
            return OpenStatusResult::closed(StatusMessage::Closed);
        };

        let minutes = (start - reading.minute).unsigned_abs();

        if minutes <= soon.unsigned_abs() {
            OpenStatusResult::new(OpenStatus::OpeningSoon, StatusMessage::OpensIn { minutes })
        } else if self.schedule.day(now.weekday()).is_empty() {
            OpenStatusResult::closed(StatusMessage::ClosedToday)
        } else {
            OpenStatusResult::closed(StatusMessage::ClosedOpensIn { minutes })
        }
    }

    /// Check if the venue accepts visitors at given time.
    ///
    /// ```
    /// use venue_hours::VenueHours;
    ///
    /// let hours = VenueHours::parse("Friday: 9:00 PM to 2:00 AM");
    /// assert!(hours.is_open("2024-06-08T01:00:00".parse().unwrap())); // a Saturday
    /// assert!(!hours.is_open("2024-06-08T02:00:00".parse().unwrap()));
    /// ```
    pub fn is_open(&self, now: L::DateTime) -> bool {
        self.status(now).is_open()
    }

    /// Get the next time the venue opens, within the coming week.
    ///
    /// If the venue is currently open, this is the first opening after it
    /// closes.
    pub fn next_opening(&self, now: L::DateTime) -> Option<L::DateTime> {
        let now = self.ctx.locale.naive(now);
        let reading = Reading::new(&self.schedule, now);

        let after = match reading.opening_at(reading.minute) {
            Some(opening) => opening.end,
            None => reading.minute,
        };

        let start = reading.next_start_after(after)?;
        reading.datetime(&self.ctx.locale, start)
    }

    /// Get the next time the venue closes, within the coming week.
    ///
    /// If the venue is currently closed, this is the end of the next opening.
    pub fn next_closing(&self, now: L::DateTime) -> Option<L::DateTime> {
        let now = self.ctx.locale.naive(now);
        let reading = Reading::new(&self.schedule, now);

        let opening = match reading.opening_at(reading.minute) {
            Some(opening) => opening,
            None => reading.opening_at(reading.next_start_after(reading.minute)?)?,
        };

        if opening.end - reading.minute >= MINUTES_PER_WEEK {
            return None;
        }

        reading.datetime(&self.ctx.locale, opening.end)
    }
}

impl FromStr for VenueHours {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

// Reading

/// Opening intervals around a single reading of the clock.
struct Reading {
    /// Midnight of the current day
    day_start: NaiveDateTime,
    /// Minutes elapsed since the start of the day
    minute: i32,
    /// Intervals relative to the start of the day, see
    /// [`WeeklySchedule::timeline`]
    timeline: Vec<Range<i32>>,
}

impl Reading {
    fn new(schedule: &WeeklySchedule, now: NaiveDateTime) -> Self {
        Self {
            day_start: now.date().and_time(NaiveTime::from(ClockTime::MIDNIGHT)),
            minute: (now.hour() * 60 + now.minute()) as i32,
            timeline: schedule.timeline(now.weekday()),
        }
    }

    /// Get the interval that the status reports at current minute.
    ///
    /// When several intervals overlap, the one that closes first is picked.
    /// Its end is then pushed further by intervals starting exactly when it
    /// closes, such as consecutive full days.
    fn current(&self) -> Option<Range<i32>> {
        let first = self
            .timeline
            .iter()
            .filter(|range| range.contains(&self.minute))
            .min_by_key(|range| range.end)?;

        let mut end = first.end;

        while let Some(next) = self.timeline.iter().find(|range| range.start == end) {
            end = next.end;
        }

        Some(first.start..end)
    }

    /// Get the whole opening containing given minute, merging all intervals
    /// that overlap or touch each other.
    fn opening_at(&self, minute: i32) -> Option<Range<i32>> {
        let mut opening = self
            .timeline
            .iter()
            .find(|range| range.contains(&minute))?
            .clone();

        for range in &self.timeline {
            if range.start > opening.end {
                break;
            }

            opening.end = opening.end.max(range.end);
        }

        Some(opening)
    }

    /// Get the first opening strictly after given minute.
    fn next_start_after(&self, minute: i32) -> Option<i32> {
        self.timeline
            .iter()
            .map(|range| range.start)
            .find(|start| *start > minute)
    }

    fn datetime<L: Localize>(&self, locale: &L, minute: i32) -> Option<L::DateTime> {
        let naive = self
            .day_start
            .checked_add_signed(Duration::minutes(minute.into()))?;

        Some(locale.datetime(naive))
    }
}

fn clock_time_at(minute: i32) -> ClockTime {
    let minute = minute.rem_euclid(i32::from(MINUTES_PER_DAY));
    ClockTime::from_mins_from_midnight(minute as u16).expect("minute out of the day")
}
