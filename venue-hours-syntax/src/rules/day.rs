use std::fmt::Display;
use std::iter::successors;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

/// Days of the week in the order listings are read, starting on Sunday.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

// Display

fn wday_str(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Full english name of a day of the week.
///
/// ```
/// use venue_hours_syntax::rules::day::{weekday_name, Weekday};
///
/// assert_eq!(weekday_name(Weekday::Thu), "Thursday");
/// ```
pub fn weekday_name(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// DayRange

/// A range of consecutive days, walking forward through the week from
/// `start` to `end` and wrapping around the weekend if needed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DayRange {
    pub start: Weekday,
    pub end: Weekday,
}

impl DayRange {
    #[inline]
    pub fn new(start: Weekday, end: Weekday) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn single(day: Weekday) -> Self {
        Self::new(day, day)
    }

    /// Number of days covered by this range, from 1 to 7.
    #[inline]
    pub fn num_days(&self) -> usize {
        let offset = 7 + self.end.num_days_from_sunday() - self.start.num_days_from_sunday();
        (offset % 7) as usize + 1
    }

    /// Iterate over covered days, in order, starting from `start`.
    ///
    /// ```
    /// use venue_hours_syntax::rules::day::{DayRange, Weekday};
    ///
    /// let days: Vec<_> = DayRange::new(Weekday::Fri, Weekday::Mon).days().collect();
    /// assert_eq!(days, [Weekday::Fri, Weekday::Sat, Weekday::Sun, Weekday::Mon]);
    /// ```
    pub fn days(&self) -> impl Iterator<Item = Weekday> {
        successors(Some(self.start), |day| Some(day.succ())).take(self.num_days())
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days().any(|covered| covered == day)
    }
}

impl Display for DayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", wday_str(self.start))?;

        if self.start != self.end {
            write!(f, "-{}", wday_str(self.end))?;
        }

        Ok(())
    }
}
