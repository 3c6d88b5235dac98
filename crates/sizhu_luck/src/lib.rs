//! Big-Luck sequence derivation and yearly-flow mapping.
//!
//! This crate provides:
//! - The direction rule (year-stem polarity × declared sex)
//! - Pre-luck onset scaling from the adjacent jie term
//! - The ordered ten-year period sequence walked through the 60-cycle
//! - The LiuNian year → sexagenary-code mapper

pub mod error;
pub mod flow;
pub mod luck;

pub use error::LuckError;
pub use flow::{YearFlow, map_range, year_code};
pub use luck::{
    DEFAULT_PERIODS, Direction, LuckOnset, LuckPeriod, LuckSequence, Sex, direction_for,
    luck_sequence,
};
