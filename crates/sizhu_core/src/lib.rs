//! Sexagenary-cycle tables and the four-pillar converter.
//!
//! This crate provides:
//! - The Heavenly-Stem / Earthly-Branch enums and the 60-term cycle
//! - The 24-solar-term engine (apparent solar longitude + term search)
//! - Four-pillar extraction with solar-term changeover and the
//!   all-Unknown sentinel for unsupported input

pub mod branch;
pub mod cycle;
pub mod error;
pub mod pillars;
pub mod solar_term;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use cycle::StemBranch;
pub use error::CalendarError;
pub use pillars::{
    FourPillars, Pillar, four_pillars, four_pillars_from_strs, try_four_pillars,
    year_stem_branch,
};
pub use solar_term::{
    ALL_TERMS, CST_OFFSET_DAYS, MAX_YEAR, MIN_YEAR, SolarTerm, next_jie_after, prev_jie_before,
    sun_apparent_longitude_deg, term_instant_ut,
};
pub use stem::{ALL_STEMS, DayMaster, Element, Polarity, Stem};
