use chrono::NaiveDateTime;

use crate::localization::Localize;
use crate::status::OpenStatusResult;
use crate::{Context, VenueHours};

/// A listed location, as found in the content files of the directory.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Venue {
    pub slug: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Free-text opening hours, such as `Mon - Fri 8 AM to 5 PM`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub hours: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub latitude: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub longitude: Option<f64>,
}

impl Venue {
    /// Parse the hours of this venue.
    pub fn opening_hours(&self) -> VenueHours {
        VenueHours::from_optional(self.hours.as_deref())
    }

    /// Evaluate the status of this venue at a given time of the caller's
    /// clock.
    pub fn status(&self, now: NaiveDateTime) -> OpenStatusResult {
        self.opening_hours().status(now)
    }

    /// Evaluate the status of this venue with a custom context.
    pub fn status_with<L: Localize>(&self, ctx: &Context<L>, now: L::DateTime) -> OpenStatusResult {
        self.opening_hours().with_context(ctx.clone()).status(now)
    }
}

/// Select up to `limit` venues that are open at given time, in input order.
///
/// ```
/// use venue_hours::{open_now, Venue};
///
/// let venues = [
///     Venue { slug: "early".into(), hours: Some("Mon - Sun 6 AM to 2 PM".into()), ..Default::default() },
///     Venue { slug: "late".into(), hours: Some("Mon - Sun 4 PM to 1 AM".into()), ..Default::default() },
///     Venue { slug: "unknown".into(), ..Default::default() },
/// ];
///
/// let open: Vec<_> = open_now(&venues, "2024-06-05T21:00:00".parse().unwrap(), 6)
///     .into_iter()
///     .map(|venue| venue.slug.as_str())
///     .collect();
///
/// assert_eq!(open, ["late"]);
/// ```
pub fn open_now<'v>(
    venues: impl IntoIterator<Item = &'v Venue>,
    now: NaiveDateTime,
    limit: usize,
) -> Vec<&'v Venue> {
    venues
        .into_iter()
        .filter(|venue| venue.status(now).is_open())
        .take(limit)
        .collect()
}
