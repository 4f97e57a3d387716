//! Planner configuration.
//!
//! # Responsibility
//! - Describe logging settings and the initial map view handed to the host.
//! - Load settings from JSON with defaults for every missing field.
//!
//! # Invariants
//! - Loaded configs are validated before they are returned.
//! - `log_dir`, when set, must be absolute (matches `init_logging`).

use crate::geo::LatLng;
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Highest zoom level the tile layer serves.
pub const MAX_ZOOM: u8 = 19;

/// Initial center/zoom of the rendered world map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: LatLng::new(20.0, 0.0),
            zoom: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub log_level: String,
    /// Rolling log directory. Logging stays disabled when unset.
    pub log_dir: Option<PathBuf>,
    pub map_view: MapView,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            map_view: MapView::default(),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// # Errors
    /// - `InvalidValue` for an empty level, relative `log_dir`, bad center or zoom past `MAX_ZOOM`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_level",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    field: "log_dir",
                    reason: format!("must be absolute, got `{}`", dir.display()),
                });
            }
        }
        self.map_view
            .center
            .validate()
            .map_err(|err| ConfigError::InvalidValue {
                field: "map_view.center",
                reason: err.to_string(),
            })?;
        if self.map_view.zoom > MAX_ZOOM {
            return Err(ConfigError::InvalidValue {
                field: "map_view.zoom",
                reason: format!("must be <= {MAX_ZOOM}, got {}", self.map_view.zoom),
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidValue { field, reason } => write!(f, "invalid config `{field}`: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}
