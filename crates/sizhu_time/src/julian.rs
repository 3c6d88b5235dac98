//! Julian Date ↔ Gregorian calendar conversions.
//!
//! All conversions are proleptic-Gregorian and valid for the years this
//! engine supports (1583 onward); no Julian-calendar branch is carried.

/// JD of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Minutes in a day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day-of-month plus the fraction of the day elapsed,
/// so `15.5` is 12:00 on the 15th.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let y = year as f64;
    let m = month as f64;

    let (y2, m2) = if m <= 2.0 {
        (y - 1.0, m + 12.0)
    } else {
        (y, m)
    };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 {
        (c - 4716.0) as i32
    } else {
        (c - 4715.0) as i32
    };

    (year, month, day_frac)
}

/// Julian Day Number of a calendar date (the JDN labels the civil day
/// running from midnight to midnight).
pub fn jdn(year: i32, month: u32, day: u32) -> i64 {
    (calendar_to_jd(year, month, day as f64) + 0.5).round() as i64
}

/// Cumulative days before each month in a common (non-leap) year.
const CUM_DAYS_COMMON: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Day-of-year from a fixed non-leap month table.
///
/// The solar correction deliberately ignores leap-year drift (at most one
/// day, which moves the equation of time by well under a minute).
pub fn day_of_year_common(month: u32, day: u32) -> u32 {
    CUM_DAYS_COMMON[(month as usize - 1).min(11)] + day
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn known_jdn_values() {
        // Published JDN anchors.
        assert_eq!(jdn(2000, 1, 1), 2_451_545);
        assert_eq!(jdn(1949, 10, 1), 2_433_191);
        assert_eq!(jdn(1984, 2, 10), 2_445_741);
    }

    #[test]
    fn round_trip() {
        for &(y, m, d, frac) in &[
            (1900, 1, 1, 0.0),
            (1969, 7, 20, 0.84),
            (2024, 2, 29, 0.5),
            (2100, 12, 31, 0.999),
        ] {
            let jd = calendar_to_jd(y, m, d as f64 + frac);
            let (y2, m2, df) = jd_to_calendar(jd);
            assert_eq!((y, m), (y2, m2));
            assert!((df - (d as f64 + frac)).abs() < 1e-6, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn day_of_year_table() {
        assert_eq!(day_of_year_common(1, 1), 1);
        assert_eq!(day_of_year_common(3, 1), 60);
        assert_eq!(day_of_year_common(4, 16), 106);
        assert_eq!(day_of_year_common(12, 31), 365);
    }
}
