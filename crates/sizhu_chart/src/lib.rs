//! One-call chart assembly over the lower crates.
//!
//! The form layer hands over raw strings and numbers; this crate parses
//! them, applies the true-solar-time correction when coordinates are
//! declared, extracts the four pillars, derives the Big-Luck sequence,
//! and attaches the yearly flow for a requested chart range. The bundle
//! is what the narrative generator and the chart layer consume, and it
//! serializes losslessly to JSON.

pub mod error;

use serde::{Deserialize, Serialize};
use sizhu_core::{FourPillars, four_pillars};
use sizhu_luck::{
    DEFAULT_PERIODS, LuckSequence, Sex, YearFlow, luck_sequence, map_range,
};
use sizhu_time::{CivilDateTime, SolarCorrection, solar::solar_correction, true_solar_time};

pub use error::ChartError;

/// Raw, unvalidated birth input as the form layer supplies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    /// Decimal degrees, east-positive.
    pub longitude: Option<f64>,
    /// Declared offset from UTC, hours.
    pub utc_offset_hours: Option<f64>,
    pub sex: Sex,
}

/// Everything downstream consumers need for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBundle {
    pub input: BirthRecord,
    /// The declared wall-clock instant.
    pub declared: CivilDateTime,
    /// The instant after true-solar-time correction (equal to `declared`
    /// when no coordinates were supplied).
    pub corrected: CivilDateTime,
    pub pillars: FourPillars,
    pub luck: LuckSequence,
    /// Yearly sexagenary annotations for the chart x-axis.
    pub flow: Vec<YearFlow>,
}

impl ChartBundle {
    /// Display string for a year's x-axis label, if in range.
    pub fn flow_label(&self, year: i32) -> Option<String> {
        self.flow
            .iter()
            .find(|f| f.year == year)
            .map(|f| f.gan_zhi.to_string())
    }
}

/// Parse a record's instant and apply the correction policy: corrected
/// when both longitude and offset are declared, declared wall-clock
/// otherwise.
pub fn corrected_instant(record: &BirthRecord) -> Result<CivilDateTime, ChartError> {
    let declared = CivilDateTime::from_strs(&record.date, &record.time)?;
    Ok(match (record.longitude, record.utc_offset_hours) {
        (Some(lon), Some(offset)) => true_solar_time(&declared, lon, offset),
        _ => declared,
    })
}

/// The correction components applied to a record, when declared.
pub fn correction_for(record: &BirthRecord) -> Result<Option<SolarCorrection>, ChartError> {
    let declared = CivilDateTime::from_strs(&record.date, &record.time)?;
    Ok(match (record.longitude, record.utc_offset_hours) {
        (Some(lon), Some(offset)) => Some(solar_correction(&declared, lon, offset)),
        _ => None,
    })
}

/// Four pillars only, for consumers that skip luck derivation.
///
/// Parse failures surface as errors; calendrical failures surface as the
/// sentinel, matching the converter's contract.
pub fn compute_pillars(record: &BirthRecord) -> Result<FourPillars, ChartError> {
    let corrected = corrected_instant(record)?;
    Ok(four_pillars(&corrected))
}

/// Assemble the full bundle for one subject.
///
/// `flow_range` is the inclusive year span to annotate; `periods` is the
/// number of decade periods to derive (12 covers ages 1–120).
pub fn compute_chart(
    record: &BirthRecord,
    flow_range: (i32, i32),
    periods: usize,
) -> Result<ChartBundle, ChartError> {
    let declared = CivilDateTime::from_strs(&record.date, &record.time)?;
    let corrected = match (record.longitude, record.utc_offset_hours) {
        (Some(lon), Some(offset)) => true_solar_time(&declared, lon, offset),
        _ => declared,
    };

    let pillars = four_pillars(&corrected);
    let luck = luck_sequence(&pillars, record.sex, &corrected, periods)?;
    let flow = map_range(flow_range.0, flow_range.1)?;

    Ok(ChartBundle {
        input: record.clone(),
        declared,
        corrected,
        pillars,
        luck,
        flow,
    })
}

/// Assemble bundles for two subjects with a shared chart range.
///
/// The two computations are fully independent; this is plain iteration,
/// kept as a helper because the surrounding application always charts a
/// pair.
pub fn compute_pair(
    a: &BirthRecord,
    b: &BirthRecord,
    flow_range: (i32, i32),
) -> Result<(ChartBundle, ChartBundle), ChartError> {
    Ok((
        compute_chart(a, flow_range, DEFAULT_PERIODS)?,
        compute_chart(b, flow_range, DEFAULT_PERIODS)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, time: &str, sex: Sex) -> BirthRecord {
        BirthRecord {
            date: date.to_string(),
            time: time.to_string(),
            longitude: Some(116.4),
            utc_offset_hours: Some(8.0),
            sex,
        }
    }

    #[test]
    fn correction_policy_skips_without_coordinates() {
        let mut r = record("2000-06-15", "12:00", Sex::Male);
        r.longitude = None;
        let corrected = corrected_instant(&r).unwrap();
        assert_eq!(corrected, CivilDateTime::from_strs("2000-06-15", "12:00").unwrap());
        assert_eq!(correction_for(&r).unwrap(), None);
    }

    #[test]
    fn correction_applied_with_coordinates() {
        let r = record("2000-06-15", "12:00", Sex::Male);
        let declared = CivilDateTime::from_strs("2000-06-15", "12:00").unwrap();
        let corrected = corrected_instant(&r).unwrap();
        assert_ne!(corrected, declared);
        let c = correction_for(&r).unwrap().unwrap();
        // Beijing sits 3.6° west of the 120°E meridian.
        assert!((c.longitude_minutes - (-14.4)).abs() < 1e-9);
    }

    #[test]
    fn parse_errors_surface() {
        let r = record("15/06/2000", "12:00", Sex::Male);
        assert!(matches!(
            compute_chart(&r, (2020, 2030), 12),
            Err(ChartError::Input(_))
        ));
    }

    #[test]
    fn out_of_range_birth_fails_luck_not_pillars() {
        let r = record("1850-06-15", "12:00", Sex::Male);
        // Pillars degrade to the sentinel...
        assert!(compute_pillars(&r).unwrap().is_sentinel());
        // ...which the luck generator refuses.
        assert!(matches!(
            compute_chart(&r, (2020, 2030), 12),
            Err(ChartError::Luck(sizhu_luck::LuckError::InvalidPillarInput))
        ));
    }

    #[test]
    fn full_bundle() {
        let r = record("2000-06-15", "12:00", Sex::Male);
        let bundle = compute_chart(&r, (2024, 2034), 12).unwrap();
        assert!(!bundle.pillars.is_sentinel());
        assert_eq!(bundle.luck.periods.len(), 12);
        assert_eq!(bundle.flow.len(), 11);
        assert_eq!(bundle.flow_label(2024).unwrap(), "JiaChen 甲辰");
        assert_eq!(bundle.flow_label(1999), None);
    }

    #[test]
    fn pair_is_two_independent_charts() {
        let a = record("2000-06-15", "12:00", Sex::Male);
        let b = record("1988-11-02", "04:30", Sex::Female);
        let (ba, bb) = compute_pair(&a, &b, (2024, 2034)).unwrap();
        let solo_a = compute_chart(&a, (2024, 2034), DEFAULT_PERIODS).unwrap();
        let solo_b = compute_chart(&b, (2024, 2034), DEFAULT_PERIODS).unwrap();
        assert_eq!(ba, solo_a);
        assert_eq!(bb, solo_b);
    }

    #[test]
    fn bundle_json_round_trip() {
        let r = record("2000-06-15", "12:00", Sex::Male);
        let bundle = compute_chart(&r, (2024, 2026), 3).unwrap();
        let json = serde_json::to_string_pretty(&bundle).unwrap();
        // Pillars render as string codes, ages as integers.
        assert!(json.contains("甲辰"));
        assert!(json.contains("\"start_age\""));
        let back: ChartBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }
}
