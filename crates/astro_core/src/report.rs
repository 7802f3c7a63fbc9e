//! Display-ready natal and transit reports.

use crate::aspects::{match_aspects, AspectRecord, ChartRole};
use crate::chart::{ChartBuild, ChartBuilder, ChartError, ChartSnapshot, PositionRecord, SkippedBody};
use crate::ephemeris::{EphemerisProvider, GeoLocation};
use crate::time::julian_day_from_datetime;
use crate::zodiac::{format_dms, zodiac_position, ZodiacSign};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const RETROGRADE_MARK: &str = "℞";

/// One body formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionView {
    pub body: String,
    pub zodiac_position: String,
    pub longitude: f64,
    pub formatted_longitude: String,
    pub latitude: String,
    pub house: u8,
    /// "℞" when retrograde, empty otherwise
    pub retrograde: String,
    pub ascendant_sign: String,
}

impl PositionView {
    pub fn new(record: &PositionRecord, ascendant_sign: ZodiacSign) -> Self {
        Self {
            body: record.label(),
            zodiac_position: zodiac_position(record.longitude),
            longitude: record.longitude,
            formatted_longitude: format_dms(record.longitude),
            latitude: format_dms(record.latitude),
            house: record.house,
            retrograde: if record.retrograde {
                RETROGRADE_MARK.to_string()
            } else {
                String::new()
            },
            ascendant_sign: ascendant_sign.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedView {
    pub body: String,
    /// Chart the body is missing from
    pub chart: ChartRole,
    pub reason: String,
}

impl SkippedView {
    pub fn new(skipped: &SkippedBody, chart: ChartRole) -> Self {
        Self {
            body: skipped.body.clone(),
            chart,
            reason: skipped.error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectView {
    pub description: String,
    #[serde(flatten)]
    pub aspect: AspectRecord,
}

impl From<AspectRecord> for AspectView {
    fn from(aspect: AspectRecord) -> Self {
        Self {
            description: aspect.description(),
            aspect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalReport {
    pub julian_day: f64,
    pub location: GeoLocation,
    pub positions: Vec<PositionView>,
    /// Ascendant longitude
    pub houses: Vec<f64>,
    /// Aspects inside the natal chart
    pub aspects: Vec<AspectView>,
    pub skipped: Vec<SkippedView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitReport {
    pub natal_positions: Vec<PositionView>,
    pub transit_positions: Vec<PositionView>,
    /// Transiting bodies against natal bodies
    pub aspects: Vec<AspectView>,
    pub calculation_time: DateTime<Utc>,
    pub skipped: Vec<SkippedView>,
}

/// Formatted positions of a snapshot, in chart order
pub fn position_views(snapshot: &ChartSnapshot) -> Vec<PositionView> {
    let ascendant_sign = snapshot.ascendant_sign();
    snapshot
        .iter()
        .map(|record| PositionView::new(record, ascendant_sign))
        .collect()
}

pub fn natal_report<P>(
    builder: &ChartBuilder,
    provider: &P,
    birth: DateTime<Utc>,
    location: GeoLocation,
) -> Result<NatalReport, ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    let julian_day = julian_day_from_datetime(birth);
    let ChartBuild { snapshot, skipped } =
        builder.build_chart(provider, julian_day, location.lat, location.lon)?;

    Ok(NatalReport {
        julian_day,
        location,
        positions: position_views(&snapshot),
        houses: vec![snapshot.ascendant],
        aspects: into_views(match_aspects(&snapshot, None, false)),
        skipped: skipped
            .iter()
            .map(|s| SkippedView::new(s, ChartRole::Natal))
            .collect(),
    })
}

/// Natal chart for `birth`, transit chart for `now` (same location) and the
/// transit-to-natal aspects between them.
pub fn transit_report<P>(
    builder: &ChartBuilder,
    provider: &P,
    birth: DateTime<Utc>,
    location: GeoLocation,
    now: DateTime<Utc>,
) -> Result<TransitReport, ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    let natal = builder.build_chart(
        provider,
        julian_day_from_datetime(birth),
        location.lat,
        location.lon,
    )?;
    let transit = builder.build_chart(
        provider,
        julian_day_from_datetime(now),
        location.lat,
        location.lon,
    )?;

    let aspects = match_aspects(&transit.snapshot, Some(&natal.snapshot), true);
    let skipped = natal
        .skipped
        .iter()
        .map(|s| SkippedView::new(s, ChartRole::Natal))
        .chain(
            transit
                .skipped
                .iter()
                .map(|s| SkippedView::new(s, ChartRole::Transit)),
        )
        .collect();

    Ok(TransitReport {
        natal_positions: position_views(&natal.snapshot),
        transit_positions: position_views(&transit.snapshot),
        aspects: into_views(aspects),
        calculation_time: now,
        skipped,
    })
}

fn into_views(aspects: Vec<AspectRecord>) -> Vec<AspectView> {
    aspects.into_iter().map(AspectView::from).collect()
}
