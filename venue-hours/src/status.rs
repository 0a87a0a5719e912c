use std::fmt::Display;

use venue_hours_syntax::ClockTime;

/// Coarse state of a venue, usually rendered as a colored indicator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OpenStatus {
    Open,
    OpeningSoon,
    ClosingSoon,
    Closed,
}

impl OpenStatus {
    /// Return `true` if the venue accepts visitors in this state.
    ///
    /// ```
    /// use venue_hours::OpenStatus;
    ///
    /// assert!(OpenStatus::ClosingSoon.is_open());
    /// assert!(!OpenStatus::OpeningSoon.is_open());
    /// ```
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::ClosingSoon)
    }
}

/// Text explaining a status to visitors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatusMessage {
    /// Open until given time, which is not within the next hour.
    OpenUntil(ClockTime),
    /// Open and no closing is planned for the whole week.
    OpenAllWeek,
    /// Closing after given number of minutes, at given time.
    ///
    /// The closing time is repeated after the countdown, as in "Closes in
    /// 45 min (5:00 PM)", so that cards rendered ahead of time stay useful.
    ClosesIn { minutes: u32, close: ClockTime },
    /// Opening after given number of minutes.
    OpensIn { minutes: u32 },
    /// Closed and opening after given number of minutes.
    ClosedOpensIn { minutes: u32 },
    /// No hours listed for the current day.
    ClosedToday,
    /// Closed with no opening to come.
    Closed,
    /// The hours of this venue are missing or could not be read.
    Unavailable,
}

fn write_plural(f: &mut std::fmt::Formatter<'_>, count: u32, unit: &str) -> std::fmt::Result {
    write!(f, "{count} {unit}")?;

    if count > 1 {
        write!(f, "s")?;
    }

    Ok(())
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::OpenUntil(close) => write!(f, "Open now — until {close}"),
            Self::OpenAllWeek => write!(f, "Open now — 24/7"),
            Self::ClosesIn { minutes, close } => write!(f, "Closes in {minutes} min ({close})"),
            Self::OpensIn { minutes } => write!(f, "Opens in {minutes} min"),
            Self::ClosedOpensIn { minutes } => {
                let (hours, minutes) = (minutes / 60, minutes % 60);
                write!(f, "Closed — opens in")?;

                if hours > 0 {
                    write!(f, " ")?;
                    write_plural(f, hours, "hour")?;
                }

                if minutes > 0 {
                    write!(f, " ")?;
                    write_plural(f, minutes, "minute")?;
                }

                Ok(())
            }
            Self::ClosedToday => write!(f, "Closed today"),
            Self::Closed => write!(f, "Closed"),
            Self::Unavailable => write!(f, "Hours unavailable"),
        }
    }
}

/// Result of the evaluation of some hours at a given time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OpenStatusResult {
    pub status: OpenStatus,
    pub message: StatusMessage,
}

impl OpenStatusResult {
    pub(crate) fn new(status: OpenStatus, message: StatusMessage) -> Self {
        Self { status, message }
    }

    pub(crate) fn closed(message: StatusMessage) -> Self {
        Self::new(OpenStatus::Closed, message)
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

impl Display for OpenStatusResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
