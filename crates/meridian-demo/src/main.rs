//! Demonstration binary exercising the Meridian crates end to end: config
//! loading, logging, geodetic conversions, and horizon culling.

mod globe_demos;

use clap::Parser;
use glam::DVec3;
use meridian_config::{CliArgs, Config};
use meridian_ellipsoid::Ellipsoid;
use tracing::{info, warn};

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        meridian_config::default_config_dir().expect("Failed to resolve config directory")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    meridian_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let ellipsoid = resolve_ellipsoid(&config);
    info!(
        "Using ellipsoid with radii ({}, {}, {})",
        ellipsoid.radii().x,
        ellipsoid.radii().y,
        ellipsoid.radii().z
    );

    // Demonstrate geodetic/Cartesian round trips
    globe_demos::demonstrate_round_trip(ellipsoid);

    // Demonstrate horizon visibility from the configured camera
    globe_demos::demonstrate_horizon_visibility(ellipsoid, &config.camera);

    // Demonstrate per-tile horizon culling points over the whole globe
    globe_demos::demonstrate_culling_points(ellipsoid, &config);

    // Demonstrate the rectangle culling point as a tile proxy
    globe_demos::demonstrate_rectangle_proxy(ellipsoid, &config.camera);
}

/// Pick the globe shape from the config: explicit radii win over the preset,
/// invalid values fall back with a warning rather than aborting the demo.
fn resolve_ellipsoid(config: &Config) -> Ellipsoid {
    if let Some([x, y, z]) = config.ellipsoid.radii_m {
        match Ellipsoid::try_from_radii(DVec3::new(x, y, z)) {
            Ok(ellipsoid) => return ellipsoid,
            Err(e) => warn!("Ignoring configured radii: {e}"),
        }
    }
    Ellipsoid::named(&config.ellipsoid.preset).unwrap_or_else(|e| {
        warn!("{e}; falling back to wgs84");
        Ellipsoid::wgs84()
    })
}
