mod output;

use anyhow::Context;
use astro_config::AstroSettings;
use astro_core::chart::{BodyCatalog, ChartBuilder};
use astro_core::ephemeris::{GeoLocation, SwissEphemerisAdapter};
use astro_core::report::{natal_report, transit_report};
use astro_core::time::{parse_coordinate, parse_moment};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "astro", author, version, about = "Natal charts and transits")]
struct Cli {
    /// Settings file (default: configs/astro.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory, overrides the settings file.
    #[arg(long, global = true)]
    ephemeris_path: Option<PathBuf>,

    #[arg(long, value_enum, global = true, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Birth {
    /// Birth moment, ISO 8601 (e.g. 1990-04-12T08:30:00Z). Naive times are UTC.
    #[arg(long)]
    birth_date: String,

    /// Geographic latitude in degrees (north positive).
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<String>,

    /// Geographic longitude in degrees (east positive).
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Positions, houses and aspects of a natal chart.
    Natal(Birth),
    /// Current transits against a natal chart.
    Transits {
        #[command(flatten)]
        birth: Birth,

        /// Moment of the transit chart (default: now).
        #[arg(long)]
        at: Option<String>,
    },
}

impl Birth {
    fn moment(&self) -> anyhow::Result<DateTime<Utc>> {
        Ok(parse_moment(&self.birth_date)?)
    }

    fn location(&self, settings: &AstroSettings) -> anyhow::Result<GeoLocation> {
        let fallback = settings.default_location;
        let lat = match (&self.latitude, fallback) {
            (Some(text), _) => parse_coordinate("latitude", text)?,
            (None, Some((lat, _))) => lat,
            (None, None) => anyhow::bail!("--latitude is required (no [observer] in settings)"),
        };
        let lon = match (&self.longitude, fallback) {
            (Some(text), _) => parse_coordinate("longitude", text)?,
            (None, Some((_, lon))) => lon,
            (None, None) => anyhow::bail!("--longitude is required (no [observer] in settings)"),
        };
        Ok(GeoLocation { lat, lon })
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<AstroSettings> {
    let mut settings = match &cli.config {
        Some(path) => astro_config::load_settings_from(path)?,
        None => astro_config::load_settings()?,
    };
    if let Some(path) = &cli.ephemeris_path {
        settings.ephemeris_path = Some(path.clone());
    }
    Ok(settings)
}

fn run(cli: Cli, settings: AstroSettings) -> anyhow::Result<String> {
    let adapter = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())
        .context("Failed to init Swiss Ephemeris")?;
    let builder = ChartBuilder::new(Arc::new(BodyCatalog::standard()));

    match &cli.command {
        Command::Natal(birth) => {
            let report = natal_report(&builder, &adapter, birth.moment()?, birth.location(&settings)?)?;
            match cli.format {
                Format::Json => Ok(serde_json::to_string_pretty(&report)?),
                Format::Text => Ok(output::natal_text(&report)),
            }
        }
        Command::Transits { birth, at } => {
            let now = match at {
                Some(text) => parse_moment(text)?,
                None => Utc::now(),
            };
            let report = transit_report(
                &builder,
                &adapter,
                birth.moment()?,
                birth.location(&settings)?,
                now,
            )?;
            match cli.format {
                Format::Json => Ok(serde_json::to_string_pretty(&report)?),
                Format::Text => Ok(output::transit_text(&report)),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_filter))
        .init();
    log::debug!("Settings: {:?}", settings);

    let rendered = run(cli, settings)?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_natal_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "astro",
            "natal",
            "--birth-date",
            "1990-04-12T08:30:00Z",
            "--latitude",
            "40.7128",
            "--longitude",
            "-74.0060",
        ])
        .unwrap();
        let Command::Natal(birth) = &cli.command else {
            panic!("expected natal command");
        };
        let location = birth.location(&AstroSettings::default()).unwrap();
        assert_eq!(location, GeoLocation { lat: 40.7128, lon: -74.006 });
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn test_location_falls_back_to_settings() {
        let cli = Cli::try_parse_from([
            "astro",
            "transits",
            "--birth-date",
            "1990-04-12T08:30",
            "--at",
            "2024-01-01T00:00:00Z",
            "--format",
            "text",
        ])
        .unwrap();
        let Command::Transits { birth, at } = &cli.command else {
            panic!("expected transits command");
        };
        assert_eq!(at.as_deref(), Some("2024-01-01T00:00:00Z"));
        let settings = AstroSettings {
            default_location: Some((51.48, 0.0)),
            ..AstroSettings::default()
        };
        assert_eq!(birth.location(&settings).unwrap(), GeoLocation { lat: 51.48, lon: 0.0 });
        assert!(birth.location(&AstroSettings::default()).is_err());
    }

    #[test]
    fn test_bad_input_is_reported() {
        let cli = Cli::try_parse_from([
            "astro",
            "natal",
            "--birth-date",
            "not a date",
            "--latitude",
            "north",
            "--longitude",
            "0",
        ])
        .unwrap();
        let Command::Natal(birth) = &cli.command else {
            panic!("expected natal command");
        };
        assert!(birth.moment().is_err());
        let err = birth.location(&AstroSettings::default()).unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }
}
