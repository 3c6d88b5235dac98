//! Error types for luck-sequence and yearly-flow computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Big-Luck generation or the yearly mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LuckError {
    /// The converter's Unknown sentinel was fed in; refusing to derive a
    /// sequence from a failed chart.
    InvalidPillarInput,
    /// Yearly mapper called with `start_year > end_year`.
    InvalidRange { start: i32, end: i32 },
}

impl Display for LuckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPillarInput => {
                write!(f, "cannot derive luck periods from Unknown pillars")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid year range: {start} > {end}")
            }
        }
    }
}

impl Error for LuckError {}
