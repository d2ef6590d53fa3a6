//! Command-line argument parsing for the Meridian demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Meridian command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "meridian", about = "Ellipsoid geometry and horizon culling demo")]
pub struct CliArgs {
    /// Ellipsoid preset (wgs84, grs80, moon, unit).
    #[arg(long)]
    pub ellipsoid: Option<String>,

    /// Camera longitude in degrees.
    #[arg(long)]
    pub longitude: Option<f64>,

    /// Camera latitude in degrees.
    #[arg(long)]
    pub latitude: Option<f64>,

    /// Camera height above the surface in meters.
    #[arg(long)]
    pub height: Option<f64>,

    /// Number of latitude rows in the culling tile grid.
    #[arg(long)]
    pub grid_rows: Option<u32>,

    /// Number of longitude columns in the culling tile grid.
    #[arg(long)]
    pub grid_cols: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref preset) = args.ellipsoid {
            self.ellipsoid.preset = preset.clone();
            // An explicit preset wins over radii from the config file.
            self.ellipsoid.radii_m = None;
        }
        if let Some(longitude) = args.longitude {
            self.camera.longitude_deg = longitude;
        }
        if let Some(latitude) = args.latitude {
            self.camera.latitude_deg = latitude;
        }
        if let Some(height) = args.height {
            self.camera.height_m = height;
        }
        if let Some(rows) = args.grid_rows {
            self.culling.grid_rows = rows;
        }
        if let Some(cols) = args.grid_cols {
            self.culling.grid_cols = cols;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
