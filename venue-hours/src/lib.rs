#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod context;
pub mod error;
pub mod localization;
pub mod schedule;
pub mod status;
pub mod venue;
pub mod venue_hours;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::Context;
pub use crate::schedule::WeeklySchedule;
pub use crate::status::{OpenStatus, OpenStatusResult, StatusMessage};
pub use crate::venue::{open_now, Venue};
pub use crate::venue_hours::{status_at, VenueHours};
pub use venue_hours_syntax::{ClockTime, TimeSpan, Weekday};

pub use venue_hours_syntax::Error as ParserError;
