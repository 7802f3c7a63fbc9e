//! Moments, Julian Days and caller input parsing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use swisseph::swe::julday;
use thiserror::Error;

/// Malformed caller input, reported before any computation starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid moment '{input}': expected ISO 8601 date-time (e.g. 1990-04-12T08:30:00Z)")]
    InvalidMoment { input: String },
    #[error("Invalid {field} '{input}': not a number")]
    InvalidCoordinate { field: &'static str, input: String },
}

/// Julian Day (UT) for a Gregorian calendar date and time of day.
///
/// `hour` and `minute` are combined as a fractional hour. No time zone
/// conversion happens here; pass UTC values.
pub fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    let hour_decimal = hour as f64 + minute as f64 / 60.0;
    // GREG_CAL = 1
    julday(year, month as i32, day as i32, hour_decimal, 1)
}

/// Julian Day for a UTC moment at minute resolution (seconds are dropped).
pub fn julian_day_from_datetime(dt: DateTime<Utc>) -> f64 {
    julian_day(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
}

/// Parse a moment given as RFC 3339 (`Z` or numeric offset, converted to UTC)
/// or as a naive `YYYY-MM-DDTHH:MM[:SS]` taken to be UTC already. A bare
/// `YYYY-MM-DD` means midnight UTC.
pub fn parse_moment(input: &str) -> Result<DateTime<Utc>, InputError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| InputError::InvalidMoment {
            input: input.to_string(),
        })
}

/// Parse a latitude or longitude given as text. Range is not checked.
pub fn parse_coordinate(field: &'static str, input: &str) -> Result<f64, InputError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidCoordinate {
            field,
            input: input.to_string(),
        })
}
