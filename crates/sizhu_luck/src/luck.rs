//! Big-Luck (decade cycle) sequence derivation.
//!
//! The month pillar seeds the sequence; the birth-year stem's polarity
//! XOR the declared sex picks the direction; the distance from birth to
//! the adjacent jie term scales into the pre-luck onset (3 days ≙ 1 year,
//! 1 day ≙ 4 months, 12 minutes ≙ 1 day of age).

use serde::{Deserialize, Serialize};
use sizhu_time::CivilDateTime;

use crate::error::LuckError;
use sizhu_core::solar_term::{CST_OFFSET_DAYS, next_jie_after, prev_jie_before};
use sizhu_core::stem::Polarity;
use sizhu_core::{FourPillars, StemBranch};

/// Number of decade periods covering ages 1–120.
pub const DEFAULT_PERIODS: usize = 12;

/// Declared sex of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Direction the luck sequence walks through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Yang-stem male and yin-stem female run forward; the other two
/// combinations run backward.
pub fn direction_for(year_polarity: Polarity, sex: Sex) -> Direction {
    match (year_polarity, sex) {
        (Polarity::Yang, Sex::Male) | (Polarity::Yin, Sex::Female) => Direction::Forward,
        (Polarity::Yin, Sex::Male) | (Polarity::Yang, Sex::Female) => Direction::Backward,
    }
}

/// One ten-year period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckPeriod {
    pub gan_zhi: StemBranch,
    pub start_age: u32,
}

/// Elapsed time from birth until the first period begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckOnset {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// The full derivation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuckSequence {
    pub direction: Direction,
    pub onset: LuckOnset,
    /// Nominal (sui) age at which the first period begins.
    pub start_age: u32,
    pub periods: Vec<LuckPeriod>,
}

/// Derive the Big-Luck sequence for a birth chart.
///
/// `birth` is the same corrected civil instant the pillars came from;
/// `count` is the number of decade periods to emit.
pub fn luck_sequence(
    pillars: &FourPillars,
    sex: Sex,
    birth: &CivilDateTime,
    count: usize,
) -> Result<LuckSequence, LuckError> {
    let month = pillars.month.known().ok_or(LuckError::InvalidPillarInput)?;
    let year = pillars.year.known().ok_or(LuckError::InvalidPillarInput)?;

    let direction = direction_for(year.stem().polarity(), sex);
    let jd_ut = birth.to_jd() - CST_OFFSET_DAYS;

    let gap_days = match direction {
        Direction::Forward => {
            let (_term, instant) = next_jie_after(jd_ut);
            instant - jd_ut
        }
        Direction::Backward => {
            let (_term, instant) = prev_jie_before(jd_ut);
            jd_ut - instant
        }
    };

    let (onset, start_age) = onset_from_gap(gap_days);
    let step = match direction {
        Direction::Forward => 1,
        Direction::Backward => -1,
    };

    let periods = (0..count)
        .map(|i| LuckPeriod {
            gan_zhi: month.step(step * (i as i64 + 1)),
            start_age: start_age + 10 * i as u32,
        })
        .collect();

    Ok(LuckSequence {
        direction,
        onset,
        start_age,
        periods,
    })
}

/// Scale a jie-distance into the onset span and the nominal start age.
fn onset_from_gap(gap_days: f64) -> (LuckOnset, u32) {
    let mut minutes = (gap_days.max(0.0) * 1440.0).round();

    let years = (minutes / 4320.0).floor();
    minutes -= years * 4320.0;
    let months = (minutes / 360.0).floor();
    minutes -= months * 360.0;
    let days = (minutes / 12.0).floor();

    let onset = LuckOnset {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    };
    (onset, years as u32 + 1)
}
