use std::convert::Infallible;
use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

use chrono::Weekday;

use venue_hours_syntax::rules::day::weekday_name;
use venue_hours_syntax::{HoursExpression, TimeSpan, MINUTES_PER_DAY, WEEK};

/// Number of minutes in a week.
pub(crate) const MINUTES_PER_WEEK: i32 = 7 * MINUTES_PER_DAY as i32;

/// Opening intervals for each day of the week.
///
/// Intervals are kept in the order they were listed, they are neither sorted
/// nor merged. An interval that doesn't close before midnight belongs to the
/// day it opens on.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct WeeklySchedule {
    /// Indexed by number of days from Sunday
    days: [Vec<TimeSpan>; 7],
    /// Set as soon as some hours could be read from the input
    available: bool,
}

impl WeeklySchedule {
    /// Creates a new schedule with no known hours.
    ///
    /// ```
    /// use venue_hours::WeeklySchedule;
    ///
    /// assert!(!WeeklySchedule::new().is_available());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw hours string, ignoring the parts that can't be read.
    ///
    /// ```
    /// use venue_hours::{Weekday, WeeklySchedule};
    ///
    /// let schedule = WeeklySchedule::parse("Friday - Monday 9 AM to 5 PM");
    /// assert_eq!(schedule.day(Weekday::Sun).len(), 1);
    /// assert!(schedule.day(Weekday::Wed).is_empty());
    /// ```
    pub fn parse(raw: &str) -> Self {
        Self::from(&venue_hours_syntax::parse(raw))
    }

    /// Same as [`WeeklySchedule::parse`] for a listing that may have no
    /// hours at all.
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    /// Add an interval to a day of the week.
    pub fn push(&mut self, day: Weekday, span: TimeSpan) {
        self.available = true;
        self.days[day.num_days_from_sunday() as usize].push(span);
    }

    /// Mark the hours as known, even if no interval was added.
    pub fn mark_available(&mut self) {
        self.available = true;
    }

    /// Return `false` if nothing could be read from the input hours.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Return `true` if there is no opening interval on any day.
    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Opening intervals listed for a day of the week.
    pub fn day(&self, day: Weekday) -> &[TimeSpan] {
        &self.days[day.num_days_from_sunday() as usize]
    }

    /// Iterate over days of the week, from Sunday to Saturday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[TimeSpan])> + '_ {
        WEEK.into_iter().map(|day| (day, self.day(day)))
    }

    /// List opening intervals from the day before `today` and for the next
    /// seven days, as ranges of minutes relative to the start of `today`.
    ///
    /// The result is sorted by start.
    pub(crate) fn timeline(&self, today: Weekday) -> Vec<Range<i32>> {
        let mut timeline: Vec<_> = (-1..=7)
            .flat_map(|offset: i32| {
                let day_idx = (today.num_days_from_sunday() as i32 + offset).rem_euclid(7);
                let day_start = offset * i32::from(MINUTES_PER_DAY);

                self.day(WEEK[day_idx as usize]).iter().map(move |span| {
                    let start = day_start + i32::from(span.open.mins_from_midnight());
                    start..start + i32::from(span.len_minutes())
                })
            })
            .collect();

        timeline.sort_unstable_by_key(|range| (range.start, range.end));
        timeline
    }
}

impl From<&HoursExpression> for WeeklySchedule {
    fn from(expr: &HoursExpression) -> Self {
        let mut schedule = Self::new();

        for block in &expr.blocks {
            schedule.mark_available();

            let Some(span) = block.hours.span() else {
                continue;
            };

            for day in block.days.days() {
                schedule.push(day, span);
            }
        }

        schedule
    }
}

impl FromStr for WeeklySchedule {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for WeeklySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.available {
            return write!(f, "Hours unavailable");
        }

        for (idx, (day, spans)) in self.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }

            write!(f, "{}: ", weekday_name(day))?;

            if spans.is_empty() {
                write!(f, "Closed")?;
                continue;
            }

            for (idx, span) in spans.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }

                write!(f, "{span}")?;
            }
        }

        Ok(())
    }
}
