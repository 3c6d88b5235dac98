//! True-solar-time correction.
//!
//! A declared birth time is wall-clock time for an administrative zone.
//! The calendrical conversion wants the sun's actual position, so the
//! instant is shifted by two terms before anything else happens:
//! - longitude offset from the zone's standard meridian (4 min/degree)
//! - the equation of time (harmonic approximation, minutes)

use std::f64::consts::TAU;

use crate::civil::CivilDateTime;
use crate::julian::day_of_year_common;

/// The two correction components, in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCorrection {
    pub eot_minutes: f64,
    pub longitude_minutes: f64,
}

impl SolarCorrection {
    pub fn total_minutes(&self) -> f64 {
        self.eot_minutes + self.longitude_minutes
    }
}

/// Equation of time in minutes for a day-of-year.
///
/// `EoT = 9.87·sin 2B − 7.53·cos B − 1.5·sin B`, `B = 2π(N−81)/365`.
/// Zero crossings fall near days 106 and 243.
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let b = TAU * (day_of_year as f64 - 81.0) / 365.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Standard meridian of a declared UTC offset, in degrees east.
pub fn standard_meridian_deg(utc_offset_hours: f64) -> f64 {
    utc_offset_hours * 15.0
}

/// Compute both correction components for a civil instant.
pub fn solar_correction(
    civil: &CivilDateTime,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> SolarCorrection {
    let n = day_of_year_common(civil.month, civil.day);
    let eot = equation_of_time_minutes(n);
    let longitude_minutes = (longitude_deg - standard_meridian_deg(utc_offset_hours)) * 4.0;
    SolarCorrection {
        eot_minutes: eot,
        longitude_minutes,
    }
}

/// Shift a civil instant to true solar time.
///
/// Pure and total: every input produces a value. Skipping the correction
/// when longitude/offset are unknown is the caller's policy.
pub fn true_solar_time(
    civil: &CivilDateTime,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> CivilDateTime {
    let correction = solar_correction(civil, longitude_deg, utc_offset_hours);
    civil.add_minutes(correction.total_minutes())
}
