use crate::chart::catalog::{BodyCatalog, BodySource, CatalogEntry};
use crate::chart::houses::whole_sign_house;
use crate::chart::types::{ChartBuild, ChartSnapshot, PositionRecord, SkippedBody};
use crate::ephemeris::{EphemerisError, EphemerisProvider, GeoLocation, HouseSystem, RawPosition};
use crate::zodiac::normalize_degrees;
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort a chart build
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid {field}: {value} is not a finite number")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("Cannot place houses without an ascendant: {0}")]
    HouseCusps(#[source] EphemerisError),
}

/// Builds chart snapshots from an ephemeris and a fixed body catalog
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    catalog: Arc<BodyCatalog>,
}

impl ChartBuilder {
    pub fn new(catalog: Arc<BodyCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Compute every catalog body for `julian_day` as seen from (`latitude`, `longitude`).
    ///
    /// A failed house-cusp query is fatal. A failed query for a single body
    /// only drops that body; it is reported in [`ChartBuild::skipped`].
    pub fn build_chart<P>(
        &self,
        provider: &P,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<ChartBuild, ChartError>
    where
        P: EphemerisProvider + ?Sized,
    {
        ensure_finite("julian day", julian_day)?;
        ensure_finite("latitude", latitude)?;
        ensure_finite("longitude", longitude)?;

        let cusps = provider
            .house_cusps(julian_day, latitude, longitude, HouseSystem::DEFAULT)
            .map_err(ChartError::HouseCusps)?;
        if !cusps.ascendant.is_finite() {
            return Err(ChartError::HouseCusps(EphemerisError::HouseCalculationFailed {
                message: format!("provider returned ascendant {}", cusps.ascendant),
            }));
        }
        let ascendant = normalize_degrees(cusps.ascendant);

        let mut bodies = Vec::with_capacity(self.catalog.len());
        let mut skipped = Vec::new();

        for entry in self.catalog.entries() {
            match resolve_position(provider, julian_day, entry) {
                Ok(raw) => {
                    let longitude = normalize_degrees(raw.longitude);
                    bodies.push(PositionRecord::new(
                        entry.name.clone(),
                        Some(entry.glyph),
                        longitude,
                        raw.latitude,
                        raw.speed,
                        whole_sign_house(longitude, ascendant),
                    ));
                }
                Err(error) => {
                    log::warn!("Could not calculate position for {}: {}", entry.name, error);
                    skipped.push(SkippedBody {
                        body: entry.name.clone(),
                        error,
                    });
                }
            }
        }

        log::debug!(
            "Built chart for JD {julian_day} at ({latitude}, {longitude}): {} bodies, {} skipped",
            bodies.len(),
            skipped.len()
        );

        Ok(ChartBuild {
            snapshot: ChartSnapshot::new(
                julian_day,
                GeoLocation {
                    lat: latitude,
                    lon: longitude,
                },
                ascendant,
                bodies,
            ),
            skipped,
        })
    }
}

impl From<BodyCatalog> for ChartBuilder {
    fn from(catalog: BodyCatalog) -> Self {
        Self::new(Arc::new(catalog))
    }
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::from(BodyCatalog::standard())
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ChartError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidInput { field, value })
    }
}

fn resolve_position<P>(
    provider: &P,
    julian_day: f64,
    entry: &CatalogEntry,
) -> Result<RawPosition, EphemerisError>
where
    P: EphemerisProvider + ?Sized,
{
    let (code, raw) = match entry.id.source() {
        BodySource::Ephemeris(code) => (code, provider.body_position(julian_day, code)?),
        BodySource::OppositeOf(code) => {
            let base = provider.body_position(julian_day, code)?;
            (
                code,
                RawPosition {
                    longitude: normalize_degrees(base.longitude + 180.0),
                    ..base
                },
            )
        }
    };

    if !raw.longitude.is_finite() || !raw.latitude.is_finite() {
        return Err(EphemerisError::CalculationFailed {
            code,
            julian_day,
            message: format!("non-finite coordinates ({}, {})", raw.longitude, raw.latitude),
        });
    }
    Ok(raw)
}
