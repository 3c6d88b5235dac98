//! The 60-term sexagenary cycle.
//!
//! Stems and branches advance in lockstep, so only 60 of the 120 possible
//! stem/branch pairs exist: those whose indices agree in parity. A pair's
//! cycle position is the unique 0..60 value congruent to the stem index
//! mod 10 and to the branch index mod 12.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::CalendarError;
use crate::stem::{ALL_STEMS, Stem};

/// A stem/branch pair, one of the 60 cycle terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    stem: Stem,
    branch: Branch,
}

impl StemBranch {
    /// Pair a stem with a branch, enforcing the lockstep invariant.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, CalendarError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(CalendarError::MismatchedPair {
                stem: stem.name(),
                branch: branch.name(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// The pair at a 60-cycle position (taken modulo 60). 0 = JiaZi.
    pub fn from_cycle_index(idx: i64) -> Self {
        let pos = idx.rem_euclid(60);
        Self {
            stem: Stem::from_index((pos % 10) as u8),
            branch: Branch::from_index((pos % 12) as u8),
        }
    }

    /// Position in the 60-cycle: the unique value congruent to the stem
    /// index mod 10 and the branch index mod 12.
    pub fn cycle_index(&self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        // CRT over (10, 12): walk the six candidates sharing the stem residue.
        for k in 0..6 {
            let pos = s + 10 * k;
            if pos % 12 == b {
                return pos as u8;
            }
        }
        unreachable!("constructor enforces parity");
    }

    /// Step through the cycle; positive is forward, negative backward.
    pub fn step(&self, offset: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + offset)
    }

    pub fn stem(&self) -> Stem {
        self.stem
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }
}

impl fmt::Display for StemBranch {
    /// Stable rendering consumed by the narrative layer: romanized pair
    /// followed by the native ideographs, e.g. `"JiaChen 甲辰"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{}",
            self.stem.name(),
            self.branch.name(),
            self.stem.glyph(),
            self.branch.glyph()
        )
    }
}

impl FromStr for StemBranch {
    type Err = CalendarError;

    /// Accepts the `Display` rendering, the bare romanized pair
    /// (`"JiaChen"`), or the bare ideograph pair (`"甲辰"`).
    fn from_str(s: &str) -> Result<Self, CalendarError> {
        let token = s
            .split_whitespace()
            .next()
            .ok_or_else(|| CalendarError::ParsePillar(s.to_string()))?;

        for stem in ALL_STEMS {
            for branch in ALL_BRANCHES {
                let romanized = format!("{}{}", stem.name(), branch.name());
                let glyphs = format!("{}{}", stem.glyph(), branch.glyph());
                if token == romanized || token == glyphs {
                    return Self::new(stem, branch)
                        .map_err(|_| CalendarError::ParsePillar(s.to_string()));
                }
            }
        }
        Err(CalendarError::ParsePillar(s.to_string()))
    }
}

impl Serialize for StemBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StemBranch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
