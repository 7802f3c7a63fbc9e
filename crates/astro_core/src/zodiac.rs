//! Zodiac signs and degree formatting.
//!
//! Longitudes are ecliptic degrees; each sign spans 30° starting at 0° Aries.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        SIGNS.into_iter()
    }

    /// Sign for index 0..=11; larger indices wrap around the zodiac.
    pub fn from_index(index: usize) -> ZodiacSign {
        SIGNS[index % 12]
    }

    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        Self::from_index(sign_index(longitude))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
        }
    }

    /// Glyph and name, e.g. "♈ Aries"
    pub fn label(self) -> String {
        format!("{} {}", self.glyph(), self.name())
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize any angle to [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sign index 0..=11 (`floor(lon / 30)` after normalization).
pub fn sign_index(longitude: f64) -> usize {
    let index = (normalize_degrees(longitude) / 30.0).floor() as usize;
    index.min(11)
}

/// Position within the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let degree = normalize_degrees(longitude) % 30.0;
    if degree >= 30.0 {
        0.0
    } else {
        degree
    }
}

/// Sign label with the whole degree, e.g. "♈ Aries 15°".
pub fn zodiac_position(longitude: f64) -> String {
    let sign = ZodiacSign::from_longitude(longitude);
    format!("{} {}°", sign.label(), degree_in_sign(longitude).trunc() as u32)
}

/// Degrees/minutes/seconds with every component truncated, e.g. `15°30'0"`.
pub fn format_dms(decimal_degrees: f64) -> String {
    let sign = if decimal_degrees < 0.0 { "-" } else { "" };
    let value = decimal_degrees.abs();
    let degrees = value.trunc();
    let decimal_minutes = (value - degrees) * 60.0;
    let minutes = decimal_minutes.trunc();
    let seconds = ((decimal_minutes - minutes) * 60.0).trunc();
    format!("{sign}{}°{}'{}\"", degrees as u64, minutes as u64, seconds as u64)
}
