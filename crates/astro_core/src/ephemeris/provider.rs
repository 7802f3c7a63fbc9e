use crate::ephemeris::types::{HouseCusps, HouseSystem, RawPosition};
use thiserror::Error;

/// Errors that can occur while querying an ephemeris
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Body code {code} is not supported by this ephemeris")]
    UnsupportedBody { code: i32 },
    #[error("Failed to calculate position for body {code} at JD {julian_day}: {message}")]
    CalculationFailed {
        code: i32,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of precomputed celestial coordinates.
///
/// Implementations are expected to answer quickly (table lookup or light
/// computation). Callers that share a provider across threads are
/// responsible for serializing access if the implementation needs it.
pub trait EphemerisProvider {
    /// Ecliptic longitude, latitude and speed of `code` at `julian_day` (UT).
    fn body_position(&self, julian_day: f64, code: i32) -> Result<RawPosition, EphemerisError>;

    /// House cusps for an observer at (`latitude`, `longitude`).
    fn house_cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn body_position(&self, julian_day: f64, code: i32) -> Result<RawPosition, EphemerisError> {
        (**self).body_position(julian_day, code)
    }

    fn house_cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).house_cusps(julian_day, latitude, longitude, system)
    }
}
