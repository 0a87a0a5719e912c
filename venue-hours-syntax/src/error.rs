use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// Reason for a block of hours to be rejected.
#[derive(Clone, Debug)]
pub enum Error {
    Parser(Box<pest::error::Error<Rule>>),
    Overflow { value: String, expected: String },
    MissingDays,
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(Box::new(pest_err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{pest_err}"),
            Self::Overflow { value, expected } => {
                write!(f, "{value} is out of range: expected {expected}")
            }
            Self::MissingDays => write!(f, "no previous days for this time range to apply to"),
        }
    }
}

impl std::error::Error for Error {}
