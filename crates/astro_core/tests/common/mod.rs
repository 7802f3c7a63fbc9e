#![allow(dead_code)]

use astro_core::ephemeris::{
    EphemerisError, EphemerisProvider, HouseCusps, HouseSystem, RawPosition,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory ephemeris returning fixed coordinates per body code
#[derive(Debug, Default)]
pub struct FixedEphemeris {
    pub ascendant: Option<f64>,
    pub positions: HashMap<i32, RawPosition>,
    pub failing: HashSet<i32>,
    pub queried_systems: RefCell<Vec<HouseSystem>>,
}

impl FixedEphemeris {
    pub fn new(ascendant: f64) -> Self {
        Self {
            ascendant: Some(ascendant),
            ..Default::default()
        }
    }

    pub fn with_body(mut self, code: i32, longitude: f64, latitude: f64, speed: f64) -> Self {
        self.positions.insert(
            code,
            RawPosition {
                longitude,
                latitude,
                speed: Some(speed),
            },
        );
        self
    }

    pub fn failing_on(mut self, code: i32) -> Self {
        self.failing.insert(code);
        self
    }

    /// Every standard catalog code at distinct longitudes, all direct
    pub fn full(ascendant: f64) -> Self {
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 15]
            .into_iter()
            .enumerate()
            .fold(Self::new(ascendant), |eph, (i, code)| {
                eph.with_body(code, 7.0 + i as f64 * 27.0, 0.5, 1.0)
            })
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn body_position(&self, julian_day: f64, code: i32) -> Result<RawPosition, EphemerisError> {
        if self.failing.contains(&code) {
            return Err(EphemerisError::CalculationFailed {
                code,
                julian_day,
                message: "out of range".to_string(),
            });
        }
        self.positions
            .get(&code)
            .copied()
            .ok_or(EphemerisError::UnsupportedBody { code })
    }

    fn house_cusps(
        &self,
        _julian_day: f64,
        _latitude: f64,
        _longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        self.queried_systems.borrow_mut().push(system);
        let ascendant = self.ascendant.ok_or(EphemerisError::HouseCalculationFailed {
            message: "polar latitude".to_string(),
        })?;
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = (ascendant + i as f64 * 30.0) % 360.0;
        }
        Ok(HouseCusps {
            ascendant,
            midheaven: (ascendant + 270.0) % 360.0,
            cusps,
        })
    }
}
