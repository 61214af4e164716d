//! Salon configuration.
//!
//! Loaded from `~/.salon/config.toml`. Every key is optional; a missing
//! file means defaults throughout.
//!
//! ```toml
//! time-zone = "Europe/Amsterdam"
//! opens = "09:00"
//! closes = "18:00"
//! week-starts-on = "monday"
//! database = "/srv/salon/salon.sqlite"
//! ```

use std::path::{Path, PathBuf};
use std::{fs, io};

use jiff::civil::{Time, Weekday};
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::geometry::DayGrid;
use crate::storage::Storage;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown time zone '{name}': {source}")]
    TimeZone { name: String, source: jiff::Error },

    #[error("unknown weekday '{0}' for week-starts-on")]
    Weekday(String),

    #[error("opening hours are empty: opens {opens} is not before closes {closes}")]
    Hours { opens: Time, closes: Time },

    #[error("could not determine home directory")]
    NoHome,
}

/// Salon configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// IANA name of the zone calendar days are drawn in. The system zone
    /// when unset.
    pub time_zone: Option<String>,

    pub opens: Time,
    pub closes: Time,

    pub week_starts_on: String,

    /// Overrides `~/.salon/salon.sqlite`.
    pub database: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let grid = DayGrid::default();
        Self {
            time_zone: None,
            opens: grid.opens,
            closes: grid.closes,
            week_starts_on: "monday".to_string(),
            database: None,
        }
    }
}

impl Config {
    /// Load config from `~/.salon/config.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoHome)?;
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.grid()?;
        config.week_start()?;
        Ok(config)
    }

    /// The config file path: `~/.salon/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".salon").join("config.toml"))
    }

    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name).map_err(|source| ConfigError::TimeZone {
                name: name.clone(),
                source,
            }),
            None => Ok(TimeZone::system()),
        }
    }

    pub fn week_start(&self) -> Result<Weekday, ConfigError> {
        parse_weekday(&self.week_starts_on)
            .ok_or_else(|| ConfigError::Weekday(self.week_starts_on.clone()))
    }

    pub fn grid(&self) -> Result<DayGrid, ConfigError> {
        if self.opens >= self.closes {
            return Err(ConfigError::Hours {
                opens: self.opens,
                closes: self.closes,
            });
        }
        Ok(DayGrid {
            opens: self.opens,
            closes: self.closes,
        })
    }

    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.clone().or_else(Storage::default_path)
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    let day = match name.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Weekday::Monday,
        "tuesday" | "tue" => Weekday::Tuesday,
        "wednesday" | "wed" => Weekday::Wednesday,
        "thursday" | "thu" => Weekday::Thursday,
        "friday" | "fri" => Weekday::Friday,
        "saturday" | "sat" => Weekday::Saturday,
        "sunday" | "sun" => Weekday::Sunday,
        _ => return None,
    };
    Some(day)
}
