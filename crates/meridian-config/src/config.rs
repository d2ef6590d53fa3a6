//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for the Meridian tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe shape settings.
    pub ellipsoid: EllipsoidConfig,
    /// Camera placement settings.
    pub camera: CameraConfig,
    /// Horizon culling settings.
    pub culling: CullingConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Globe shape configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EllipsoidConfig {
    /// Named preset ("wgs84", "grs80", "moon", "unit").
    pub preset: String,
    /// Explicit semi-axis lengths in meters; overrides `preset` when set.
    pub radii_m: Option<[f64; 3]>,
}

/// Camera placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera longitude in degrees.
    pub longitude_deg: f64,
    /// Camera latitude in degrees.
    pub latitude_deg: f64,
    /// Camera height above the ellipsoid surface in meters.
    pub height_m: f64,
}

/// Horizon culling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CullingConfig {
    /// Number of latitude rows in the tile grid.
    pub grid_rows: u32,
    /// Number of longitude columns in the tile grid.
    pub grid_cols: u32,
    /// Terrain height bound per tile in meters, for conservative
    /// culling points.
    pub tile_max_height_m: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log a line per tile instead of aggregate counts.
    pub log_tile_details: bool,
}

// --- Default implementations ---

impl Default for EllipsoidConfig {
    fn default() -> Self {
        Self {
            preset: "wgs84".to_string(),
            radii_m: None,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            longitude_deg: 0.0,
            latitude_deg: 45.0,
            height_m: 600_000.0,
        }
    }
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            grid_rows: 8,
            grid_cols: 16,
            tile_max_height_m: 9_000.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_tile_details: false,
        }
    }
}

/// The platform config directory for Meridian (`<os config dir>/meridian`).
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("meridian"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
