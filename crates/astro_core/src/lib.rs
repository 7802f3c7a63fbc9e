//! Astrological chart computation.
//!
//! [`chart::ChartBuilder`] turns a moment and a location into a
//! [`chart::ChartSnapshot`] using an [`ephemeris::EphemerisProvider`];
//! [`aspects::match_aspects`] finds classical aspects within one snapshot or
//! between a transit and a natal snapshot.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod report;
pub mod time;
pub mod zodiac;

pub use aspects::{match_aspects, AspectKind, AspectRecord};
pub use chart::{BodyCatalog, ChartBuild, ChartBuilder, ChartError, ChartSnapshot, PositionRecord};
pub use ephemeris::{EphemerisError, EphemerisProvider, GeoLocation, SwissEphemerisAdapter};
pub use time::{julian_day, parse_moment, InputError};
