//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.

use crate::db::keys;
use crate::models::Coordinates;
use crate::surfaces::PanOptions;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Map presentation settings used by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Zoom level for the initial view and for jumps to a workout
    pub zoom: u8,
    /// Tile layer URL template
    pub tile_url: String,
    /// Attribution HTML shown with the tiles
    pub tile_attribution: String,
    /// Pan animation used when jumping to a workout
    pub pan: PanOptions,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom: 13,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            pan: PanOptions {
                animate: true,
                duration_secs: 1.0,
            },
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// File holding persisted key-value storage
    pub storage_path: PathBuf,
    /// Storage key for the serialized workout list
    pub storage_key: String,
    pub map: MapSettings,
    /// Position reported by the headless geolocation; `None` means unavailable
    pub home_position: Option<Coordinates>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("trailmark-storage.json"),
            storage_key: keys::WORKOUTS.to_string(),
            map: MapSettings::default(),
            home_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = MapSettings::default();
        let map = MapSettings {
            zoom: parse_var("TRAILMARK_MAP_ZOOM")?.unwrap_or(defaults.zoom),
            tile_url: env::var("TRAILMARK_TILE_URL").unwrap_or(defaults.tile_url),
            tile_attribution: env::var("TRAILMARK_TILE_ATTRIBUTION")
                .unwrap_or(defaults.tile_attribution),
            pan: PanOptions {
                animate: true,
                duration_secs: parse_var("TRAILMARK_PAN_DURATION_SECS")?
                    .unwrap_or(defaults.pan.duration_secs),
            },
        };

        let home_position = match (
            parse_var::<f64>("TRAILMARK_HOME_LAT")?,
            parse_var::<f64>("TRAILMARK_HOME_LNG")?,
        ) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("TRAILMARK_HOME_LNG")),
            (None, Some(_)) => return Err(ConfigError::Missing("TRAILMARK_HOME_LAT")),
        };

        Ok(Self {
            storage_path: env::var("TRAILMARK_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("trailmark-storage.json")),
            storage_key: env::var("TRAILMARK_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| keys::WORKOUTS.to_string()),
            map,
            home_position,
        })
    }
}

/// Read and parse an optional variable. Unset is `None`; unparsable is an error.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
