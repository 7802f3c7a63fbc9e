use crate::ephemeris::{EphemerisError, GeoLocation};
use crate::zodiac::{degree_in_sign, normalize_degrees, ZodiacSign};
use serde::{Deserialize, Serialize};

pub const ASCENDANT: &str = "Ascendant";
pub const DESCENDANT: &str = "Descendant";

/// Computed state of one body (or chart angle) at a moment and location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Display name, unique within a snapshot
    pub body: String,
    /// Astrological glyph; `None` for the chart angles
    pub glyph: Option<char>,
    /// Ecliptic longitude in degrees, always in [0, 360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    pub sign: ZodiacSign,
    /// Degrees into the sign, in [0, 30)
    pub degree_in_sign: f64,
    /// Whole-sign house 1..=12
    pub house: u8,
    pub retrograde: bool,
    /// Speed in longitude (degrees per day), when the provider reports one
    pub speed: Option<f64>,
}

impl PositionRecord {
    /// Record for a body; `longitude` is normalized before anything is derived from it.
    /// `house` must be 1..=12.
    pub fn new(
        body: impl Into<String>,
        glyph: Option<char>,
        longitude: f64,
        latitude: f64,
        speed: Option<f64>,
        house: u8,
    ) -> Self {
        debug_assert!((1..=12).contains(&house), "house {house} outside 1..=12");
        let longitude = normalize_degrees(longitude);
        Self {
            body: body.into(),
            glyph,
            longitude,
            latitude,
            sign: ZodiacSign::from_longitude(longitude),
            degree_in_sign: degree_in_sign(longitude),
            house,
            retrograde: speed.map_or(false, |s| s < 0.0),
            speed,
        }
    }

    /// Chart angle (Ascendant/Descendant): no latitude, no motion.
    pub fn angle(name: &str, longitude: f64, house: u8) -> Self {
        Self::new(name, None, longitude, 0.0, None, house)
    }

    /// Glyph and name, e.g. "☉ Sun", or the bare name for angles
    pub fn label(&self) -> String {
        match self.glyph {
            Some(glyph) => format!("{} {}", glyph, self.body),
            None => self.body.clone(),
        }
    }
}

/// All positions for one (moment, location) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub julian_day: f64,
    pub location: GeoLocation,
    /// Raw Ascendant longitude used for house placement, in [0, 360)
    pub ascendant: f64,
    positions: Vec<PositionRecord>,
}

impl ChartSnapshot {
    /// Snapshot with Ascendant and Descendant records followed by `bodies`.
    ///
    /// Bodies named like an angle, or repeating an earlier name, are dropped
    /// so lookups by name stay unambiguous.
    pub fn new(
        julian_day: f64,
        location: GeoLocation,
        ascendant: f64,
        bodies: Vec<PositionRecord>,
    ) -> Self {
        let ascendant = normalize_degrees(ascendant);
        let descendant = normalize_degrees(ascendant + 180.0);

        let mut positions = Vec::with_capacity(bodies.len() + 2);
        positions.push(PositionRecord::angle(ASCENDANT, ascendant, 1));
        positions.push(PositionRecord::angle(DESCENDANT, descendant, 7));
        for record in bodies {
            if positions.iter().any(|p| p.body == record.body) {
                log::warn!("Duplicate position for {} ignored", record.body);
                continue;
            }
            positions.push(record);
        }

        Self {
            julian_day,
            location,
            ascendant,
            positions,
        }
    }

    pub fn get(&self, body: &str) -> Option<&PositionRecord> {
        self.positions.iter().find(|p| p.body == body)
    }

    /// Positions in insertion order: angles first, then catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &PositionRecord> {
        self.positions.iter()
    }

    pub fn positions(&self) -> &[PositionRecord] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn descendant(&self) -> f64 {
        normalize_degrees(self.ascendant + 180.0)
    }

    pub fn ascendant_sign(&self) -> ZodiacSign {
        ZodiacSign::from_longitude(self.ascendant)
    }
}

/// A catalog body left out of a chart because the provider failed for it
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedBody {
    pub body: String,
    pub error: EphemerisError,
}

/// Result of a chart build: the snapshot plus non-fatal omissions
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBuild {
    pub snapshot: ChartSnapshot,
    pub skipped: Vec<SkippedBody>,
}

impl ChartBuild {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derives_sign_and_degree() {
        let record = PositionRecord::new("Mars", Some('♂'), 395.5, 1.0, Some(-0.2), 2);
        assert_eq!(record.sign, ZodiacSign::Taurus);
        assert!((record.degree_in_sign - 5.5).abs() < 1e-9);
        assert!(record.retrograde);
        assert_eq!(record.label(), "♂ Mars");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 1..=12")]
    fn test_house_zero_rejected() {
        PositionRecord::new("Mars", None, 10.0, 0.0, None, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 1..=12")]
    fn test_house_thirteen_rejected() {
        PositionRecord::new("Mars", None, 10.0, 0.0, None, 13);
    }
}
