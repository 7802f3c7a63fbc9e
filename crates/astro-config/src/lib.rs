use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AstroSettings {
    /// Swiss Ephemeris data directory; `None` uses the built-in ephemeris
    pub ephemeris_path: Option<PathBuf>,
    /// Observer used when the caller gives no coordinates
    pub default_location: Option<(f64, f64)>,
    pub log_filter: String,
}

impl Default for AstroSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            default_location: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct ObserverToml {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingToml {
    #[serde(default = "default_log_filter")]
    filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    observer: Option<ObserverToml>,
    #[serde(default)]
    logging: Option<LoggingToml>,
}

/// Try common relative paths for `configs/astro.toml`. `Ok(None)` when none exists.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    let paths = ["configs/astro.toml", "../../configs/astro.toml"];
    for p in &paths {
        if Path::new(p).exists() {
            let text = fs::read_to_string(p)
                .map_err(|e| anyhow::anyhow!("Failed to read {p}: {e}"))?;
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// Parse settings text and validate what it points at.
pub fn parse_settings(text: &str) -> anyhow::Result<AstroSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse astro.toml: {e}"))?;

    let ephemeris_path = match root.ephemeris.path {
        Some(path) if !path.exists() => {
            anyhow::bail!("ephemeris.path does not exist: {}", path.display());
        }
        other => other,
    };

    let default_location = match root.observer {
        Some(ObserverToml {
            latitude,
            longitude,
        }) => {
            if !(-90.0..=90.0).contains(&latitude) {
                anyhow::bail!("observer.latitude must be within [-90, 90], got {latitude}");
            }
            if !(-180.0..=180.0).contains(&longitude) {
                anyhow::bail!("observer.longitude must be within [-180, 180], got {longitude}");
            }
            Some((latitude, longitude))
        }
        None => None,
    };

    Ok(AstroSettings {
        ephemeris_path,
        default_location,
        log_filter: root
            .logging
            .map(|l| l.filter)
            .unwrap_or_else(default_log_filter),
    })
}

/// Load settings from `configs/astro.toml`, falling back to defaults when absent.
pub fn load_settings() -> anyhow::Result<AstroSettings> {
    match read_config_toml_text()? {
        Some(text) => parse_settings(&text),
        None => Ok(AstroSettings::default()),
    }
}

/// Load settings from an explicit file; a missing file is an error here.
pub fn load_settings_from(path: &Path) -> anyhow::Result<AstroSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not load {}: {e}", path.display()))?;
    parse_settings(&text)
}
