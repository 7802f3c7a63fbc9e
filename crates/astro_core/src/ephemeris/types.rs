use serde::{Deserialize, Serialize};

/// Geographic location of the observer, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Raw ecliptic coordinates as returned by an ephemeris provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees (not necessarily normalized)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Speed in longitude (degrees per day), if the provider reports one
    pub speed: Option<f64>,
}

/// House cusps and angles for a moment and location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub ascendant: f64,
    pub midheaven: f64,
    /// Cusps 1..12 in order; `cusps[0]` is the Ascendant for quadrant systems
    pub cusps: [f64; 12],
}

/// House systems understood by the providers.
///
/// Chart building only ever asks for [`HouseSystem::DEFAULT`]; the system is
/// used to locate the Ascendant, houses themselves are whole-sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    WholeSign,
    Koch,
    Equal,
}

impl HouseSystem {
    pub const DEFAULT: HouseSystem = HouseSystem::Placidus;

    /// Swiss Ephemeris house system letter
    pub fn code(self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::WholeSign => b'W',
            HouseSystem::Koch => b'K',
            HouseSystem::Equal => b'E',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "placidus",
            HouseSystem::WholeSign => "whole_sign",
            HouseSystem::Koch => "koch",
            HouseSystem::Equal => "equal",
        }
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        Self::DEFAULT
    }
}
