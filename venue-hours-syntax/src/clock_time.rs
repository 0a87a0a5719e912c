use std::convert::TryInto;
use std::fmt::{Debug, Display};

use chrono::{NaiveTime, Timelike};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Half of the day a 12-hour clock reading belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
        }
    }
}

/// An hour+minute struct within a single day, from *00:00* to *23:59*.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };
    pub const NOON: Self = Self { hour: 12, minute: 0 };

    /// Create a new time of the day from a 24-hour clock reading, this may
    /// return `None` if input values are out of range.
    ///
    /// ```
    /// use venue_hours_syntax::ClockTime;
    ///
    /// assert!(ClockTime::new(23, 59).is_some());
    /// assert!(ClockTime::new(24, 0).is_none()); // hours are out of bound
    /// assert!(ClockTime::new(8, 60).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Create a new time of the day from a 12-hour clock reading.
    ///
    /// Twelve o'clock belongs to the following half of the day, so that
    /// *12 AM* is midnight and *12 PM* is noon. *0 AM* is also accepted as
    /// midnight.
    ///
    /// ```
    /// use venue_hours_syntax::{ClockTime, Meridiem};
    ///
    /// assert_eq!(ClockTime::from_meridiem(12, 0, Meridiem::Am), Some(ClockTime::MIDNIGHT));
    /// assert_eq!(ClockTime::from_meridiem(12, 0, Meridiem::Pm), Some(ClockTime::NOON));
    /// assert_eq!(ClockTime::from_meridiem(5, 30, Meridiem::Pm), ClockTime::new(17, 30));
    /// assert!(ClockTime::from_meridiem(13, 0, Meridiem::Pm).is_none());
    /// ```
    #[inline]
    pub const fn from_meridiem(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        let hour = match (hour, meridiem) {
            (0, Meridiem::Am) | (12, Meridiem::Am) => 0,
            (1..=11, Meridiem::Am) | (12, Meridiem::Pm) => hour,
            (1..=11, Meridiem::Pm) => hour + 12,
            _ => return None,
        };

        Self::new(hour, minute)
    }

    /// Get the number of full hours in this time, on a 24-hour clock.
    ///
    /// ```
    /// use venue_hours_syntax::ClockTime;
    ///
    /// let time = ClockTime::new(17, 35).unwrap();
    /// assert_eq!(time.hour(), 17);
    /// ```
    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Get the number of remaining minutes in this time.
    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Get the reading of the hour on a 12-hour clock, from 1 to 12.
    ///
    /// ```
    /// use venue_hours_syntax::ClockTime;
    ///
    /// assert_eq!(ClockTime::MIDNIGHT.hour12(), 12);
    /// assert_eq!(ClockTime::new(17, 0).unwrap().hour12(), 5);
    /// ```
    #[inline]
    pub fn hour12(self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }

    #[inline]
    pub fn meridiem(self) -> Meridiem {
        if self.hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Get the total number of minutes from *00:00*.
    ///
    /// ```
    /// use venue_hours_syntax::ClockTime;
    ///
    /// let time = ClockTime::new(17, 15).unwrap();
    /// assert_eq!(time.mins_from_midnight(), 17 * 60 + 15);
    /// ```
    #[inline]
    pub fn mins_from_midnight(self) -> u16 {
        u16::from(self.minute) + 60 * u16::from(self.hour)
    }

    /// Build a time from the total number of minutes from midnight and
    /// return `None` if the result is out of the day.
    ///
    /// ```
    /// use venue_hours_syntax::ClockTime;
    ///
    /// assert_eq!(ClockTime::from_mins_from_midnight(17 * 60 + 15), ClockTime::new(17, 15));
    /// assert!(ClockTime::from_mins_from_midnight(24 * 60).is_none());
    /// ```
    #[inline]
    pub fn from_mins_from_midnight(minute: u16) -> Option<Self> {
        let hour = (minute / 60).try_into().ok()?;
        let minute = (minute % 60).try_into().ok()?;
        Self::new(hour, minute)
    }
}

/// Formats on a 12-hour clock, as displayed to visitors: `5:00 PM`.
impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02} {}", self.hour12(), self.minute, self.meridiem())
    }
}

impl Debug for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<ClockTime> for NaiveTime {
    #[inline]
    fn from(time: ClockTime) -> NaiveTime {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0)
            .expect("clock time out of the day")
    }
}

impl From<NaiveTime> for ClockTime {
    #[inline]
    fn from(time: NaiveTime) -> ClockTime {
        Self {
            hour: time.hour().try_into().expect("invalid NaiveTime"),
            minute: time.minute().try_into().expect("invalid NaiveTime"),
        }
    }
}
