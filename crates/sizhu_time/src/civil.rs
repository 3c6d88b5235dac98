//! Civil calendar date/time with minute precision.
//!
//! `CivilDateTime` is the canonical wall-clock representation used
//! throughout the engine. It is constructed either from validated fields
//! or from the raw `YYYY-MM-DD` / `HH:MM` strings the form layer supplies.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, calendar_to_jd, jd_to_calendar};

/// Civil calendar date with minute precision (seconds carried as `f64`
/// for correction arithmetic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    /// Construct from fields, validating calendar ranges.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::FieldRange(format!("month {month} not in 1..=12")));
        }
        let dim = days_in_month(year, month);
        if !(1..=dim).contains(&day) {
            return Err(TimeError::FieldRange(format!(
                "day {day} not in 1..={dim} for {year}-{month:02}"
            )));
        }
        if hour > 23 {
            return Err(TimeError::FieldRange(format!("hour {hour} not in 0..=23")));
        }
        if minute > 59 {
            return Err(TimeError::FieldRange(format!(
                "minute {minute} not in 0..=59"
            )));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::FieldRange(format!(
                "second {second} not in 0..60"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Parse the form layer's raw `YYYY-MM-DD` and `HH:MM` strings.
    ///
    /// An optional `:SS` suffix on the time is accepted. No other shapes
    /// are: input is untrusted and rejected loudly rather than guessed at.
    pub fn from_strs(date: &str, time: &str) -> Result<Self, TimeError> {
        let mut dp = date.split('-');
        let (y, m, d) = match (dp.next(), dp.next(), dp.next(), dp.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(TimeError::ParseDate(date.to_string())),
        };
        let year: i32 = y
            .parse()
            .map_err(|_| TimeError::ParseDate(date.to_string()))?;
        let month: u32 = m
            .parse()
            .map_err(|_| TimeError::ParseDate(date.to_string()))?;
        let day: u32 = d
            .parse()
            .map_err(|_| TimeError::ParseDate(date.to_string()))?;

        let mut tp = time.split(':');
        let (h, min, sec) = match (tp.next(), tp.next(), tp.next(), tp.next()) {
            (Some(h), Some(min), None, None) => (h, min, None),
            (Some(h), Some(min), Some(s), None) => (h, min, Some(s)),
            _ => return Err(TimeError::ParseTime(time.to_string())),
        };
        let hour: u32 = h
            .parse()
            .map_err(|_| TimeError::ParseTime(time.to_string()))?;
        let minute: u32 = min
            .parse()
            .map_err(|_| TimeError::ParseTime(time.to_string()))?;
        let second: f64 = match sec {
            Some(s) => s
                .parse()
                .map_err(|_| TimeError::ParseTime(time.to_string()))?,
            None => 0.0,
        };

        Self::new(year, month, day, hour, minute, second)
    }

    /// Day-of-month plus elapsed fraction of the day.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }

    /// Julian Date of this civil instant, read on its own clock.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Rebuild a civil instant from a Julian Date on the same clock.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        // Round to whole seconds so correction arithmetic cannot leave a
        // 59.999… artifact that flips a later comparison.
        let mut total_seconds = ((day_frac - day as f64) * 86_400.0).round();
        let (mut day, mut month, mut year) = (day, month, year);
        if total_seconds >= 86_400.0 {
            total_seconds = 0.0;
            let (y2, m2, df) = jd_to_calendar(jd + 1.0 / 86_400.0);
            year = y2;
            month = m2;
            day = df.floor() as u32;
        }
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Shift by a signed number of minutes, rolling dates as needed.
    pub fn add_minutes(&self, minutes: f64) -> Self {
        Self::from_jd(self.to_jd() + minutes / MINUTES_PER_DAY)
    }
}

/// Days in a Gregorian month (leap-aware; validation must accept Feb 29).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, TimeError> {
        let (date, time) = s
            .split_once('T')
            .ok_or_else(|| TimeError::ParseDate(s.to_string()))?;
        Self::from_strs(date, time)
    }
}

impl Serialize for CivilDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_strings() {
        let t = CivilDateTime::from_strs("2000-06-15", "12:30").unwrap();
        assert_eq!((t.year, t.month, t.day), (2000, 6, 15));
        assert_eq!((t.hour, t.minute), (12, 30));
        assert_eq!(t.second, 0.0);
    }

    #[test]
    fn accepts_seconds_suffix() {
        let t = CivilDateTime::from_strs("2000-06-15", "12:30:45").unwrap();
        assert_eq!(t.second, 45.0);
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(matches!(
            CivilDateTime::from_strs("not-a-date", "12:00"),
            Err(TimeError::ParseDate(_))
        ));
        assert!(matches!(
            CivilDateTime::from_strs("2000/06/15", "12:00"),
            Err(TimeError::ParseDate(_))
        ));
        assert!(matches!(
            CivilDateTime::from_strs("2000-06", "12:00"),
            Err(TimeError::ParseDate(_))
        ));
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(matches!(
            CivilDateTime::from_strs("2000-06-15", "noon"),
            Err(TimeError::ParseTime(_))
        ));
        assert!(matches!(
            CivilDateTime::from_strs("2000-06-15", "12"),
            Err(TimeError::ParseTime(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(CivilDateTime::from_strs("2000-13-01", "12:00").is_err());
        assert!(CivilDateTime::from_strs("2001-02-29", "12:00").is_err());
        assert!(CivilDateTime::from_strs("2000-06-15", "24:00").is_err());
        assert!(CivilDateTime::from_strs("2000-06-15", "12:60").is_err());
    }

    #[test]
    fn leap_day_valid() {
        assert!(CivilDateTime::from_strs("2000-02-29", "00:00").is_ok());
        assert!(CivilDateTime::from_strs("1900-02-29", "00:00").is_err());
    }

    #[test]
    fn minute_shift_rolls_midnight() {
        let t = CivilDateTime::from_strs("2000-06-15", "23:50").unwrap();
        let shifted = t.add_minutes(20.0);
        assert_eq!((shifted.day, shifted.hour, shifted.minute), (16, 0, 10));

        let back = t.add_minutes(-1440.0);
        assert_eq!((back.day, back.hour, back.minute), (14, 23, 50));
    }

    #[test]
    fn display_and_parse_round_trip() {
        let t = CivilDateTime::from_strs("2000-06-15", "08:05").unwrap();
        let s = t.to_string();
        assert_eq!(s, "2000-06-15T08:05:00");
        assert_eq!(s.parse::<CivilDateTime>().unwrap(), t);
    }

    #[test]
    fn serde_string_form() {
        let t = CivilDateTime::from_strs("2000-06-15", "08:05").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2000-06-15T08:05:00\"");
        let back: CivilDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
