use std::fmt::Debug;

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};

/// Specifies how dates should be localized while evaluating opening hours.
///
/// Hours are always evaluated on the wall clock of the venue, this trait
/// converts the instants given by the caller to and from this clock.
pub trait Localize: Clone {
    /// The type of datetime accepted and returned by evaluation.
    type DateTime: Clone + Debug;

    /// Read the wall clock of the venue at a given instant.
    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime;

    /// Get the instant at which the wall clock of the venue shows a given
    /// reading.
    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime;
}

// --
// -- NoLocation
// --

/// Evaluate hours on the local clock of the caller, without any timezone
/// conversion.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoLocation;

impl Localize for NoLocation {
    type DateTime = NaiveDateTime;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        naive
    }
}

// --
// -- TzLocation
// --

/// Evaluate hours on the clock of a given timezone.
///
/// ```
/// use chrono::TimeZone;
/// use venue_hours::localization::{Localize, TzLocation};
///
/// let loc = TzLocation::new(chrono_tz::America::Chicago);
/// let instant = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap();
///
/// assert_eq!(
///     loc.naive(instant.with_timezone(&chrono_tz::America::Chicago)).to_string(),
///     "2024-06-01 09:00:00",
/// );
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TzLocation<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> TzLocation<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn get_timezone(&self) -> &Tz {
        &self.tz
    }
}

#[cfg(feature = "timezone")]
impl TzLocation<chrono_tz::Tz> {
    /// Build a location from the name of a timezone in the IANA database.
    ///
    /// ```
    /// use venue_hours::localization::TzLocation;
    ///
    /// assert!(TzLocation::from_name("America/Chicago").is_ok());
    /// assert!(TzLocation::from_name("Middle/Earth").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, crate::error::UnknownTimezone> {
        let tz = name
            .parse()
            .map_err(|_| crate::error::UnknownTimezone(name.to_string()))?;

        Ok(Self::new(tz))
    }
}

impl<Tz: TimeZone> Localize for TzLocation<Tz> {
    type DateTime = DateTime<Tz>;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt.with_timezone(&self.tz).naive_local()
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        localize_next_valid(naive, &self.tz)
    }
}

/// Localize input datetime to next valid occurrence.
///
/// Readings skipped by a change of offset are moved to the next valid
/// minute, ambiguous readings resolve to their earliest instant.
fn localize_next_valid<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x,
        LocalResult::Ambiguous(x, _y) => {
            #[cfg(feature = "log")]
            log::debug!("Ambiguous date {naive}: could be {x:?} (default) or {_y:?}");

            x
        }
        LocalResult::None => {
            let mut curr = naive;

            loop {
                curr += Duration::minutes(1);

                if let Some(res) = tz.from_local_datetime(&curr).earliest() {
                    #[cfg(feature = "log")]
                    log::debug!("Skipped invalid dates from {naive} to {curr}");

                    return res;
                }
            }
        }
    }
}
