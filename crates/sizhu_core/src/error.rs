//! Error types for sexagenary and calendrical computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from pillar conversion or cycle construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Stem and branch cannot share a position in the 60-cycle.
    MismatchedPair { stem: &'static str, branch: &'static str },
    /// A pillar string did not match the `"StemBranch 干支"` rendering.
    ParsePillar(String),
    /// Year outside the supported solar-term range.
    YearOutOfRange(i32),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedPair { stem, branch } => {
                write!(f, "{stem}/{branch} is not a sexagenary pair")
            }
            Self::ParsePillar(s) => write!(f, "unrecognized pillar code: {s:?}"),
            Self::YearOutOfRange(y) => {
                write!(f, "year {y} outside supported range 1900..=2100")
            }
        }
    }
}

impl Error for CalendarError {}
