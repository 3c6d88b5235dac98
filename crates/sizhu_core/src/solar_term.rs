//! The 24 solar terms and the apparent-solar-longitude engine behind them.
//!
//! Year and month pillars change at solar-term crossings, not calendar
//! boundaries, so the converter needs term instants to sub-minute
//! precision. This module provides:
//! - the term table (each term pinned to an apparent solar longitude)
//! - a truncated solar-longitude series (mean longitude + equation of
//!   center + nutation/aberration correction), good to well under 0.01°
//!   across 1900–2100
//! - a ΔT polynomial so civil (UT-based) instants can drive the TT series
//! - bisection search for term instants and for the nearest *jie* either
//!   side of an instant
//!
//! Term instants are conventionally read on the Chinese civil clock
//! (UTC+8), matching the almanac the pillar changeover rules come from.

use sizhu_time::julian::J2000_JD;

/// First year with validated series accuracy.
pub const MIN_YEAR: i32 = 1900;
/// Last year with validated series accuracy.
pub const MAX_YEAR: i32 = 2100;

/// Offset of the Chinese civil clock from UT, in days.
pub const CST_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// The 24 solar terms, starting from LiChun (315°).
///
/// Even-indexed terms are the 12 *jie* that open the pillar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All 24 terms in annual order from LiChun.
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

impl SolarTerm {
    /// Position in the annual order, 0 = LiChun.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(idx: u8) -> Self {
        ALL_TERMS[(idx % 24) as usize]
    }

    /// Apparent solar longitude at which the term begins, degrees.
    pub const fn longitude_deg(self) -> f64 {
        let lon = 315 + 15 * self.index() as u32;
        (lon % 360) as f64
    }

    /// Whether this term is a *jie* (month-opening term).
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LiChun => "LiChun",
            Self::YuShui => "YuShui",
            Self::JingZhe => "JingZhe",
            Self::ChunFen => "ChunFen",
            Self::QingMing => "QingMing",
            Self::GuYu => "GuYu",
            Self::LiXia => "LiXia",
            Self::XiaoMan => "XiaoMan",
            Self::MangZhong => "MangZhong",
            Self::XiaZhi => "XiaZhi",
            Self::XiaoShu => "XiaoShu",
            Self::DaShu => "DaShu",
            Self::LiQiu => "LiQiu",
            Self::ChuShu => "ChuShu",
            Self::BaiLu => "BaiLu",
            Self::QiuFen => "QiuFen",
            Self::HanLu => "HanLu",
            Self::ShuangJiang => "ShuangJiang",
            Self::LiDong => "LiDong",
            Self::XiaoXue => "XiaoXue",
            Self::DaXue => "DaXue",
            Self::DongZhi => "DongZhi",
            Self::XiaoHan => "XiaoHan",
            Self::DaHan => "DaHan",
        }
    }

    /// Look a term up by its romanized name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TERMS
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

/// ΔT = TT − UT in seconds (Espenak–Meeus piecewise polynomials).
///
/// Covers 1900–2100; accuracy of a few seconds, far below what day-level
/// changeover or the 3-days-per-year luck scaling can notice.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    }
}

/// Apparent geocentric solar longitude in degrees, [0, 360).
///
/// Low-precision solar theory: geometric mean longitude, equation of
/// center, and the combined aberration + nutation-in-longitude term.
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36_525.0;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m_deg = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let m = m_deg.to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let omega = (125.04 - 1_934.136 * t).to_radians();
    let apparent = l0 + c - 0.005_69 - 0.004_78 * omega.sin();

    apparent.rem_euclid(360.0)
}

/// Apparent solar longitude for a UT Julian Date (applies ΔT).
pub fn sun_apparent_longitude_ut(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - J2000_JD) / 365.2425;
    sun_apparent_longitude_deg(jd_ut + delta_t_seconds(year) / 86_400.0)
}

/// Signed difference `a − b` folded into [−180, 180).
fn angle_diff_deg(a: f64, b: f64) -> f64 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}

/// Instant (JD UT) at which `term` begins in Gregorian year `year`.
///
/// Bisection on the longitude residual over a ±20-day window around the
/// term's mean date; the sun moves ~1°/day, so the residual is monotonic
/// there. Converges below one second of time.
pub fn term_instant_ut(year: i32, term: SolarTerm) -> f64 {
    let jan1 = sizhu_time::calendar_to_jd(year, 1, 1.0);

    // Mean day-of-year: the sun crosses 0° near day 79 (the March
    // equinox) and advances 360° per tropical year. Terms whose estimate
    // lands past December belong to the January side of the same year.
    let mut doy_est = 79.0 + term.longitude_deg() / 360.0 * 365.2422;
    if doy_est > 365.0 {
        doy_est -= 365.2422;
    }

    let target = term.longitude_deg();
    let mut lo = jan1 + doy_est - 20.0;
    let mut hi = jan1 + doy_est + 20.0;
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if angle_diff_deg(sun_apparent_longitude_ut(mid), target) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// The first *jie* at or after `jd_ut`, as `(term, instant)`.
pub fn next_jie_after(jd_ut: f64) -> (SolarTerm, f64) {
    let lon = sun_apparent_longitude_ut(jd_ut);
    // Sector index relative to LiChun; the next jie opens the next sector.
    let sector = ((lon - 315.0).rem_euclid(360.0) / 30.0).floor() as u8;
    let term = SolarTerm::from_index((sector + 1) * 2);

    let (year, ..) = sizhu_time::jd_to_calendar(jd_ut);
    for y in [year, year + 1] {
        let instant = term_instant_ut(y, term);
        if instant >= jd_ut {
            return (term, instant);
        }
    }
    unreachable!("a jie falls within 32 days of any instant");
}

/// The last *jie* at or before `jd_ut`, as `(term, instant)`.
pub fn prev_jie_before(jd_ut: f64) -> (SolarTerm, f64) {
    let lon = sun_apparent_longitude_ut(jd_ut);
    let sector = ((lon - 315.0).rem_euclid(360.0) / 30.0).floor() as u8;
    let term = SolarTerm::from_index(sector * 2);

    let (year, ..) = sizhu_time::jd_to_calendar(jd_ut);
    for y in [year, year - 1] {
        let instant = term_instant_ut(y, term);
        if instant <= jd_ut {
            return (term, instant);
        }
    }
    unreachable!("a jie falls within 32 days of any instant");
}

/// Pillar-month number (1 = Yin month opened by LiChun .. 12) for an
/// instant, straight from the solar-longitude sector.
pub fn month_number_for(jd_ut: f64) -> u32 {
    let lon = sun_apparent_longitude_ut(jd_ut);
    ((lon - 315.0).rem_euclid(360.0) / 30.0).floor() as u32 + 1
}

/// LiChun instant (JD UT) for a Gregorian year.
pub fn lichun_instant_ut(year: i32) -> f64 {
    term_instant_ut(year, SolarTerm::LiChun)
}
