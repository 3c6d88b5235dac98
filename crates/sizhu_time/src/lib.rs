//! Civil time handling and the true-solar-time correction.
//!
//! This crate provides:
//! - `CivilDateTime`, the wall-clock value used throughout the engine,
//!   with strict `YYYY-MM-DD` / `HH:MM` string parsing
//! - Julian Date ↔ calendar conversions
//! - The equation-of-time + longitude correction that turns a declared
//!   local birth moment into true solar time

pub mod civil;
pub mod error;
pub mod julian;
pub mod solar;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    J2000_JD, MINUTES_PER_DAY, calendar_to_jd, day_of_year_common, jd_to_calendar,
};
pub use solar::{SolarCorrection, equation_of_time_minutes, true_solar_time};
