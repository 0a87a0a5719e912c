#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod clock_time;
pub mod error;
pub mod rules;

mod parser;


pub use clock_time::{ClockTime, Meridiem, MINUTES_PER_DAY};
pub use error::{Error, Result};
pub use parser::{parse, parse_block};
pub use rules::day::{DayRange, Weekday, WEEK};
pub use rules::time::TimeSpan;
pub use rules::{BlockHours, HoursBlock, HoursExpression};
