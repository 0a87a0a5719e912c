use std::fmt::Display;

use crate::clock_time::{ClockTime, MINUTES_PER_DAY};

// TimeSpan

/// An opening interval within a day.
///
/// When `close` is not after `open`, the interval runs past midnight and
/// closes on the following day. Equal bounds describe a full day.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeSpan {
    pub open: ClockTime,
    pub close: ClockTime,
}

impl TimeSpan {
    #[inline]
    pub fn new(open: ClockTime, close: ClockTime) -> Self {
        Self { open, close }
    }

    /// The span covering a whole day, from midnight to midnight.
    #[inline]
    pub fn all_day() -> Self {
        Self::new(ClockTime::MIDNIGHT, ClockTime::MIDNIGHT)
    }

    /// Check if this span crosses midnight.
    ///
    /// ```
    /// use venue_hours_syntax::rules::time::TimeSpan;
    /// use venue_hours_syntax::ClockTime;
    ///
    /// let evening = TimeSpan::new(ClockTime::new(21, 0).unwrap(), ClockTime::new(2, 0).unwrap());
    /// assert!(evening.wraps());
    /// assert!(TimeSpan::all_day().wraps());
    /// ```
    #[inline]
    pub fn wraps(&self) -> bool {
        self.close <= self.open
    }

    /// Length of the span in minutes, from 1 to a full day.
    ///
    /// ```
    /// use venue_hours_syntax::rules::time::TimeSpan;
    /// use venue_hours_syntax::ClockTime;
    ///
    /// let evening = TimeSpan::new(ClockTime::new(21, 0).unwrap(), ClockTime::new(2, 0).unwrap());
    /// assert_eq!(evening.len_minutes(), 5 * 60);
    /// assert_eq!(TimeSpan::all_day().len_minutes(), 24 * 60);
    /// ```
    #[inline]
    pub fn len_minutes(&self) -> u16 {
        let open = self.open.mins_from_midnight();
        let close = self.close.mins_from_midnight();

        if self.wraps() {
            close + MINUTES_PER_DAY - open
        } else {
            close - open
        }
    }
}

impl Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.open, self.close)
    }
}
