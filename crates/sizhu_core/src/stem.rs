//! The ten Heavenly Stems.
//!
//! Each stem carries a Yin/Yang polarity and one of the five elements;
//! the day pillar's stem doubles as the chart's Day Master.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Yin/Yang polarity of a stem. Drives the Big-Luck direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

impl Stem {
    /// Position in the 10-cycle, 0 = Jia.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a 10-cycle position (taken modulo 10).
    pub const fn from_index(idx: u8) -> Self {
        ALL_STEMS[(idx % 10) as usize]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Native ideograph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Even-indexed stems are Yang, odd-indexed Yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Element of the stem (two stems per element, Yang then Yin).
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Day-Master label for this stem as a day pillar's stem.
    pub const fn day_master(self) -> DayMaster {
        DayMaster {
            polarity: self.polarity(),
            element: self.element(),
        }
    }
}

/// Polarity + element label of the day pillar's stem ("Yang Wood" etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayMaster {
    pub polarity: Polarity,
    pub element: Element,
}

impl fmt::Display for DayMaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity.name(), self.element.name())
    }
}

impl Serialize for DayMaster {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayMaster {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        let (p, e) = s
            .split_once(' ')
            .ok_or_else(|| D::Error::custom(format!("bad day master label: {s:?}")))?;
        let polarity = match p {
            "Yang" => Polarity::Yang,
            "Yin" => Polarity::Yin,
            _ => return Err(D::Error::custom(format!("bad polarity: {p:?}"))),
        };
        let element = match e {
            "Wood" => Element::Wood,
            "Fire" => Element::Fire,
            "Earth" => Element::Earth,
            "Metal" => Element::Metal,
            "Water" => Element::Water,
            _ => return Err(D::Error::custom(format!("bad element: {e:?}"))),
        };
        Ok(DayMaster { polarity, element })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, stem) in ALL_STEMS.iter().enumerate() {
            assert_eq!(stem.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *stem);
        }
        assert_eq!(Stem::from_index(10), Stem::Jia);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn element_pairs() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Ren.element(), Element::Water);
    }

    #[test]
    fn day_master_labels() {
        assert_eq!(Stem::Jia.day_master().to_string(), "Yang Wood");
        assert_eq!(Stem::Gui.day_master().to_string(), "Yin Water");
    }

    #[test]
    fn day_master_serde_round_trip() {
        let dm = Stem::Geng.day_master();
        let json = serde_json::to_string(&dm).unwrap();
        assert_eq!(json, "\"Yang Metal\"");
        let back: DayMaster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dm);
    }
}
