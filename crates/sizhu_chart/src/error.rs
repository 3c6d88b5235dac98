//! Error type aggregating the lower crates' failures.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_luck::LuckError;
use sizhu_time::TimeError;

/// Errors from assembling a chart bundle.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The raw form input failed to parse or validate.
    Input(TimeError),
    /// Luck derivation failed (sentinel pillars or a bad year range).
    Luck(LuckError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input error: {e}"),
            Self::Luck(e) => write!(f, "luck derivation error: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Luck(e) => Some(e),
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Input(e)
    }
}

impl From<LuckError> for ChartError {
    fn from(e: LuckError) -> Self {
        Self::Luck(e)
    }
}
