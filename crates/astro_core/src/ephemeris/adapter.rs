use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{HouseCusps, HouseSystem, RawPosition};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::{AscMc, Cusp};

/// Environment variable consulted when no explicit data path is given
pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";

// SEFLG_SWIEPH: prefer Swiss Ephemeris data files, the library falls back
// to its built-in Moshier theory when they are missing.
const FLG_SWIEPH: i32 = 2;
// SEFLG_SPEED: fill out[3] with the daily motion in longitude.
const FLG_SPEED: i32 = 256;

/// [`EphemerisProvider`] backed by the Swiss Ephemeris library
#[derive(Debug)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: Option<PathBuf>,
    flags: i32,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with an optional ephemeris data directory.
    ///
    /// Without an explicit path, `SWISS_EPHEMERIS_PATH` is consulted; if that
    /// is unset as well the library's built-in ephemeris is used.
    ///
    /// The data path is process-global inside the Swiss Ephemeris library:
    /// the most recently constructed adapter with a path wins for all adapters.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.or_else(|| env::var(EPHEMERIS_PATH_ENV).ok().map(PathBuf::from));

        if let Some(path) = &path {
            if !path.exists() {
                return Err(EphemerisError::FileNotFound {
                    path: path.display().to_string(),
                    message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
                });
            }
            set_ephe_path(&path.to_string_lossy());
            log::info!("Swiss Ephemeris data path: {}", path.display());
        } else {
            log::info!("No Swiss Ephemeris data path configured, using built-in ephemeris");
        }

        Ok(Self {
            ephemeris_path: path,
            flags: FLG_SWIEPH | FLG_SPEED,
        })
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn body_position(&self, julian_day: f64, code: i32) -> Result<RawPosition, EphemerisError> {
        if code < 0 {
            return Err(EphemerisError::UnsupportedBody { code });
        }

        let result = calc_ut(julian_day, code as u32, self.flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                code,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        log::debug!("calc_ut jd={julian_day} body={code} -> lon={} speed={}", out[0], out[3]);

        Ok(RawPosition {
            longitude: out[0],
            latitude: out[1],
            speed: Some(out[3]),
        })
    }

    fn house_cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        let (c, a) = houses_ex(julian_day, FLG_SWIEPH, latitude, longitude, system.code() as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        if !ascmc.ascendant.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "no ascendant for {} houses at lat {latitude}, lon {longitude}",
                    system.name()
                ),
            });
        }

        Ok(HouseCusps {
            ascendant: ascmc.ascendant,
            midheaven: ascmc.mc,
            cusps: [
                cusps.first, cusps.second, cusps.third, cusps.fourth,
                cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
                cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
            ],
        })
    }
}
