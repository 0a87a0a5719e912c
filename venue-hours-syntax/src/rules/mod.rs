pub mod day;
pub mod time;

use std::fmt::Display;

// HoursExpression

/// The blocks recognized in a raw hours string, in order of appearance.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct HoursExpression {
    pub blocks: Vec<HoursBlock>,
    /// Raw text of the blocks that could not be parsed.
    pub rejected: Vec<String>,
}

impl HoursExpression {
    /// Return `true` if no block of the input could be recognized.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Display for HoursExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(first) = self.blocks.first() else {
            return Ok(());
        };

        write!(f, "{first}")?;

        for block in &self.blocks[1..] {
            write!(f, ", {block}")?;
        }

        Ok(())
    }
}

// HoursBlock

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct HoursBlock {
    pub days: day::DayRange,
    pub hours: BlockHours,
}

impl Display for HoursBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.days, self.hours)
    }
}

// BlockHours

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum BlockHours {
    Closed,
    AllDay,
    Span(time::TimeSpan),
}

impl BlockHours {
    /// The opening interval described by these hours, if any.
    pub fn span(self) -> Option<time::TimeSpan> {
        match self {
            Self::Closed => None,
            Self::AllDay => Some(time::TimeSpan::all_day()),
            Self::Span(span) => Some(span),
        }
    }
}

impl Display for BlockHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "Closed"),
            Self::AllDay => write!(f, "Open 24 hours"),
            Self::Span(span) => write!(f, "{span}"),
        }
    }
}
