//! Yearly-flow (LiuNian) mapping.
//!
//! Maps Gregorian years to their sexagenary codes so the chart layer can
//! annotate an x-axis of years. Calendar-year aligned: the LiChun-exact
//! year pillar lives in the converter, not here.

use serde::{Deserialize, Serialize};
use sizhu_core::{StemBranch, year_stem_branch};

use crate::error::LuckError;

/// One year's sexagenary annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearFlow {
    pub year: i32,
    pub gan_zhi: StemBranch,
}

/// Sexagenary code of a single Gregorian year.
pub fn year_code(year: i32) -> StemBranch {
    year_stem_branch(year)
}

/// Map an inclusive, ascending range of years to their codes.
pub fn map_range(start_year: i32, end_year: i32) -> Result<Vec<YearFlow>, LuckError> {
    if start_year > end_year {
        return Err(LuckError::InvalidRange {
            start: start_year,
            end: end_year,
        });
    }
    Ok((start_year..=end_year)
        .map(|year| YearFlow {
            year,
            gan_zhi: year_code(year),
        })
        .collect())
}
