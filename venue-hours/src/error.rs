use std::fmt::Display;

/// The name of a timezone that is not part of the IANA database.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownTimezone(pub String);

impl Display for UnknownTimezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown timezone `{}`", self.0)
    }
}

impl std::error::Error for UnknownTimezone {}
