//! The twelve Earthly Branches.
//!
//! Besides their place in the sexagenary cycle, branches segment the day
//! into twelve two-hour watches; the first (Zi) spans 23:00–01:00 and
//! wraps midnight.

use serde::{Deserialize, Serialize};

/// The 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Position in the 12-cycle, 0 = Zi.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a 12-cycle position (taken modulo 12).
    pub const fn from_index(idx: u8) -> Self {
        ALL_BRANCHES[(idx % 12) as usize]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Native ideograph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// The branch governing an hour of day (0..=23).
    ///
    /// Zi spans 23:00–01:00, Chou 01:00–03:00, and so on.
    pub const fn from_hour(hour: u32) -> Self {
        Self::from_index((((hour + 1) / 2) % 12) as u8)
    }

    /// Start and end hour of this branch's watch, `(23, 1)` for Zi.
    pub const fn watch_hours(self) -> (u32, u32) {
        let i = self.index() as u32;
        ((i * 2 + 23) % 24, (i * 2 + 1) % 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, branch) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(branch.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), *branch);
        }
        assert_eq!(Branch::from_index(12), Branch::Zi);
    }

    #[test]
    fn hour_segmentation() {
        assert_eq!(Branch::from_hour(23), Branch::Zi);
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Chou);
        assert_eq!(Branch::from_hour(2), Branch::Chou);
        assert_eq!(Branch::from_hour(3), Branch::Yin);
        assert_eq!(Branch::from_hour(11), Branch::Wu);
        assert_eq!(Branch::from_hour(12), Branch::Wu);
        assert_eq!(Branch::from_hour(13), Branch::Wei);
        assert_eq!(Branch::from_hour(22), Branch::Hai);
    }

    #[test]
    fn every_hour_maps() {
        for hour in 0..24 {
            let b = Branch::from_hour(hour);
            let (start, _end) = b.watch_hours();
            // The watch starting hour is at most 1 behind (Zi wraps).
            assert!(start == hour || start == (hour + 23) % 24, "hour {hour}");
        }
    }

    #[test]
    fn watch_hours_wrap() {
        assert_eq!(Branch::Zi.watch_hours(), (23, 1));
        assert_eq!(Branch::Wu.watch_hours(), (11, 13));
    }
}
