//! Error types for civil time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating date/time input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not `YYYY-MM-DD`.
    ParseDate(String),
    /// Time string is not `HH:MM` (or `HH:MM:SS`).
    ParseTime(String),
    /// A parsed field is outside its calendar range.
    FieldRange(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseDate(s) => write!(f, "malformed date string: {s:?} (expected YYYY-MM-DD)"),
            Self::ParseTime(s) => write!(f, "malformed time string: {s:?} (expected HH:MM)"),
            Self::FieldRange(msg) => write!(f, "field out of range: {msg}"),
        }
    }
}

impl Error for TimeError {}
