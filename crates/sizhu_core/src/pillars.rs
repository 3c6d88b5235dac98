//! Four-pillar (BaZi) extraction from a corrected civil instant.
//!
//! - Year pillar changes at LiChun, not January 1.
//! - Month pillar follows the 12 jie sectors of apparent solar longitude,
//!   with the stem derived from the year stem (five-tigers rule).
//! - Day pillar is JDN-cycle arithmetic from a published JiaZi anchor.
//! - Hour pillar uses the two-hour watches, with the stem derived from
//!   the day stem (five-rats rule).
//!
//! The public converter never fails: inputs it cannot compute yield the
//! all-Unknown sentinel, which downstream consumers must treat as a
//! computation failure rather than a chart.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sizhu_time::CivilDateTime;

use crate::branch::Branch;
use crate::cycle::StemBranch;
use crate::error::CalendarError;
use crate::solar_term::{
    CST_OFFSET_DAYS, MAX_YEAR, MIN_YEAR, lichun_instant_ut, month_number_for,
};
use crate::stem::{DayMaster, Stem};

/// JDN of 1949-10-01, a published JiaZi (cycle position 0) day.
const DAY_CYCLE_ANCHOR_JDN: i64 = 2_433_191;

/// One pillar: a cycle term, or the sentinel for a failed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pillar {
    Known(StemBranch),
    Unknown,
}

impl Pillar {
    pub fn known(self) -> Option<StemBranch> {
        match self {
            Self::Known(sb) => Some(sb),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(sb) => fmt::Display::fmt(sb, f),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

impl FromStr for Pillar {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, CalendarError> {
        if s == "Unknown" {
            return Ok(Self::Unknown);
        }
        s.parse::<StemBranch>().map(Self::Known)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pillar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// The four pillars of a birth moment plus the derived Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub day_master: Option<DayMaster>,
}

impl FourPillars {
    /// The all-Unknown sentinel.
    pub fn unknown() -> Self {
        Self {
            year: Pillar::Unknown,
            month: Pillar::Unknown,
            day: Pillar::Unknown,
            hour: Pillar::Unknown,
            day_master: None,
        }
    }

    /// True when this is the sentinel, i.e. not a usable chart.
    pub fn is_sentinel(&self) -> bool {
        self.year.is_unknown()
            && self.month.is_unknown()
            && self.day.is_unknown()
            && self.hour.is_unknown()
    }
}

/// Convert a corrected civil instant into four pillars.
///
/// Never fails: unsupported input yields the sentinel. Use
/// [`try_four_pillars`] to observe the cause.
pub fn four_pillars(corrected: &CivilDateTime) -> FourPillars {
    try_four_pillars(corrected).unwrap_or_else(|_| FourPillars::unknown())
}

/// Parse the form layer's raw strings and convert, collapsing every
/// failure (parse or computation) into the sentinel.
pub fn four_pillars_from_strs(date: &str, time: &str) -> FourPillars {
    match CivilDateTime::from_strs(date, time) {
        Ok(civil) => four_pillars(&civil),
        Err(_) => FourPillars::unknown(),
    }
}

/// Fallible converter used internally and by callers that want the cause.
pub fn try_four_pillars(corrected: &CivilDateTime) -> Result<FourPillars, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&corrected.year) {
        return Err(CalendarError::YearOutOfRange(corrected.year));
    }

    // Term instants follow the Chinese civil clock; read the corrected
    // instant on that clock for every solar-term comparison.
    let jd_local = corrected.to_jd();
    let jd_ut = jd_local - CST_OFFSET_DAYS;

    let year_sb = year_pillar(corrected.year, jd_ut);
    let month_sb = month_pillar(year_sb.stem(), jd_ut);
    let day_sb = day_pillar(jd_local);
    let hour_sb = hour_pillar(day_sb.stem(), corrected.hour);

    Ok(FourPillars {
        year: Pillar::Known(year_sb),
        month: Pillar::Known(month_sb),
        day: Pillar::Known(day_sb),
        hour: Pillar::Known(hour_sb),
        day_master: Some(day_sb.stem().day_master()),
    })
}

/// Year pillar with LiChun changeover.
fn year_pillar(civil_year: i32, jd_ut: f64) -> StemBranch {
    let pillar_year = if jd_ut < lichun_instant_ut(civil_year) {
        civil_year - 1
    } else {
        civil_year
    };
    year_stem_branch(pillar_year)
}

/// Sexagenary term of a pillar year (LiChun-aligned year count).
pub fn year_stem_branch(year: i32) -> StemBranch {
    let stem = Stem::from_index((year - 4).rem_euclid(10) as u8);
    let branch = Branch::from_index((year - 4).rem_euclid(12) as u8);
    StemBranch::new(stem, branch).unwrap_or_else(|_| {
        unreachable!("year stem/branch share parity for every year")
    })
}

/// Month pillar: branch from the jie sector, stem by the five-tigers rule.
fn month_pillar(year_stem: Stem, jd_ut: f64) -> StemBranch {
    let month_number = month_number_for(jd_ut); // 1 = Yin month
    let branch = Branch::from_index((month_number as u8 + 1) % 12);
    let stem_idx = (year_stem.index() as u32 * 2 + month_number + 1) % 10;
    let stem = Stem::from_index(stem_idx as u8);
    StemBranch::new(stem, branch)
        .unwrap_or_else(|_| unreachable!("five-tigers derivation preserves parity"))
}

/// Day pillar from the JDN cycle. The civil day runs midnight to
/// midnight: 23:00–24:00 keeps the current day's pillar (late-Zi
/// convention) even though its hour branch is Zi.
fn day_pillar(jd_local: f64) -> StemBranch {
    let jdn = (jd_local + 0.5).floor() as i64;
    StemBranch::from_cycle_index(jdn - DAY_CYCLE_ANCHOR_JDN)
}

/// Hour pillar: branch from the watch, stem by the five-rats rule.
fn hour_pillar(day_stem: Stem, hour: u32) -> StemBranch {
    let branch = Branch::from_hour(hour);
    let stem_idx = (day_stem.index() * 2 + branch.index()) % 10;
    let stem = Stem::from_index(stem_idx);
    StemBranch::new(stem, branch)
        .unwrap_or_else(|_| unreachable!("five-rats derivation preserves parity"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(date: &str, time: &str) -> CivilDateTime {
        CivilDateTime::from_strs(date, time).unwrap()
    }

    fn pillar(s: &str) -> Pillar {
        Pillar::Known(s.parse().unwrap())
    }

    #[test]
    fn year_stem_branch_known_years() {
        assert_eq!(year_stem_branch(1984).to_string(), "JiaZi 甲子");
        assert_eq!(year_stem_branch(2000).to_string(), "GengChen 庚辰");
        assert_eq!(year_stem_branch(2024).to_string(), "JiaChen 甲辰");
    }

    #[test]
    fn day_cycle_anchor() {
        // 1949-10-01 is a published JiaZi day.
        let sb = day_pillar(sizhu_time::calendar_to_jd(1949, 10, 1.5));
        assert_eq!(sb.cycle_index(), 0);
        // 2000-01-01 is a WuWu day.
        let sb = day_pillar(sizhu_time::calendar_to_jd(2000, 1, 1.5));
        assert_eq!(sb.to_string(), "WuWu 戊午");
    }

    #[test]
    fn late_zi_keeps_current_day() {
        let before = four_pillars(&civil("2000-06-15", "23:30"));
        let after = four_pillars(&civil("2000-06-16", "00:30"));
        // Hour branch is Zi on both sides of midnight...
        assert_eq!(before.hour.known().unwrap().branch(), Branch::Zi);
        assert_eq!(after.hour.known().unwrap().branch(), Branch::Zi);
        // ...but the day pillar rolls at midnight.
        let d0 = before.day.known().unwrap().cycle_index();
        let d1 = after.day.known().unwrap().cycle_index();
        assert_eq!((d0 + 1) % 60, d1);
    }

    #[test]
    fn full_chart_mid_year() {
        let p = four_pillars(&civil("2000-06-15", "12:00"));
        assert_eq!(p.year, pillar("GengChen"));
        assert_eq!(p.month, pillar("RenWu"));
        assert_eq!(p.day, pillar("JiaChen"));
        assert_eq!(p.hour, pillar("GengWu"));
        assert_eq!(p.day_master.unwrap().to_string(), "Yang Wood");
    }

    #[test]
    fn lichun_flips_year_and_month() {
        // LiChun 2024 fell at 16:27 on Feb 4 (Chinese civil clock).
        let before = four_pillars(&civil("2024-02-04", "10:00"));
        let after = four_pillars(&civil("2024-02-05", "12:00"));
        assert_eq!(before.year, pillar("GuiMao"));
        assert_eq!(after.year, pillar("JiaChen"));
        // Month flips from the Chou month to the Yin month.
        assert_eq!(before.month.known().unwrap().branch(), Branch::Chou);
        assert_eq!(after.month.known().unwrap().branch(), Branch::Yin);
    }

    #[test]
    fn five_tigers_rule() {
        // Jia year, first month → BingYin.
        let p = four_pillars(&civil("1984-02-10", "12:00"));
        assert_eq!(p.year, pillar("JiaZi"));
        assert_eq!(p.month, pillar("BingYin"));
        assert_eq!(p.day, pillar("JiaXu"));
        assert_eq!(p.hour, pillar("GengWu"));
    }

    #[test]
    fn sentinel_for_out_of_range_year() {
        let p = four_pillars(&civil("1850-06-15", "12:00"));
        assert!(p.is_sentinel());
        assert!(matches!(
            try_four_pillars(&civil("1850-06-15", "12:00")),
            Err(CalendarError::YearOutOfRange(1850))
        ));
    }

    #[test]
    fn sentinel_for_malformed_strings() {
        assert!(four_pillars_from_strs("not-a-date", "12:00").is_sentinel());
        assert!(four_pillars_from_strs("2000-06-15", "za:xx").is_sentinel());
        assert!(!four_pillars_from_strs("2000-06-15", "12:00").is_sentinel());
    }

    #[test]
    fn determinism() {
        let a = four_pillars(&civil("1988-11-02", "04:30"));
        let b = four_pillars(&civil("1988-11-02", "04:30"));
        assert_eq!(a, b);
    }

    #[test]
    fn pillar_serde_round_trip() {
        let p = four_pillars(&civil("2000-06-15", "12:00"));
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"GengChen 庚辰\""));
        let back: FourPillars = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        let sentinel = FourPillars::unknown();
        let json = serde_json::to_string(&sentinel).unwrap();
        let back: FourPillars = serde_json::from_str(&json).unwrap();
        assert!(back.is_sentinel());
    }
}
