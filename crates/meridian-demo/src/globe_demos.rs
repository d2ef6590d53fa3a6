//! Globe geometry demonstration functions.

use meridian_config::{CameraConfig, Config};
use meridian_culling::EllipsoidalOccluder;
use meridian_ellipsoid::{Cartographic, Ellipsoid, Rectangle};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{debug, info, warn};

/// Demonstrates geodetic round trips by converting random cartographic
/// positions to Cartesian and back, tracking the worst drift.
pub(crate) fn demonstrate_round_trip(ellipsoid: Ellipsoid) {
    info!("Starting geodetic round-trip demonstration");

    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    let sample_count = 500;
    let mut max_angle_error: f64 = 0.0;
    let mut max_height_error: f64 = 0.0;

    for _ in 0..sample_count {
        let longitude: f64 = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
        // acos of a uniform value samples latitudes evenly over the sphere.
        let latitude: f64 = std::f64::consts::FRAC_PI_2 - rng.gen_range(-1.0_f64..1.0).acos();
        let height: f64 = rng.gen_range(-10_000.0..100_000.0);

        let original = Cartographic::new(longitude, latitude, height);
        let cartesian = ellipsoid.cartographic_to_cartesian(original);
        let Some(round_tripped) = ellipsoid.cartesian_to_cartographic(cartesian) else {
            warn!("Round trip lost a position near the center: {original:?}");
            continue;
        };

        let angle_error = (round_tripped.longitude - original.longitude)
            .abs()
            .max((round_tripped.latitude - original.latitude).abs());
        let height_error = (round_tripped.height - original.height).abs();
        if angle_error > max_angle_error {
            max_angle_error = angle_error;
        }
        if height_error > max_height_error {
            max_height_error = height_error;
        }
    }

    info!(
        "Round-tripped {} positions (max angle error: {:.2e} rad, max height error: {:.2e} m)",
        sample_count, max_angle_error, max_height_error
    );
    info!("Geodetic round-trip demonstration completed successfully");
}

/// Demonstrates horizon visibility by sweeping surface points around the
/// equator and a meridian, counting how many the configured camera can see.
pub(crate) fn demonstrate_horizon_visibility(ellipsoid: Ellipsoid, camera: &CameraConfig) {
    info!("Starting horizon visibility demonstration");

    let camera_position = ellipsoid.cartographic_to_cartesian(Cartographic::from_degrees(
        camera.longitude_deg,
        camera.latitude_deg,
        camera.height_m,
    ));
    let occluder = EllipsoidalOccluder::new(ellipsoid, camera_position);
    info!(
        "Camera at ({} deg, {} deg, {} m), scaled-space limb distance squared: {:.4}",
        camera.longitude_deg,
        camera.latitude_deg,
        camera.height_m,
        occluder.distance_to_limb_in_scaled_space_squared()
    );

    let step_count = 36;
    let mut equator_visible = 0;
    let mut meridian_visible = 0;
    for step in 0..step_count {
        let angle = -180.0 + 360.0 * step as f64 / step_count as f64;

        let on_equator =
            ellipsoid.cartographic_to_cartesian(Cartographic::from_degrees(angle, 0.0, 0.0));
        if occluder.is_point_visible(on_equator) {
            equator_visible += 1;
        }

        // The camera's own meridian, sweeping through both poles.
        let latitude = angle / 2.0;
        let on_meridian = ellipsoid.cartographic_to_cartesian(Cartographic::from_degrees(
            camera.longitude_deg,
            latitude,
            0.0,
        ));
        if occluder.is_point_visible(on_meridian) {
            meridian_visible += 1;
        }
    }

    info!(
        "{} of {} equator samples and {} of {} meridian samples visible",
        equator_visible, step_count, meridian_visible, step_count
    );
    info!("Horizon visibility demonstration completed successfully");
}

/// Demonstrates per-tile horizon culling points: covers the globe with a
/// lon/lat grid, computes a culling point per tile, and culls against the
/// configured camera.
pub(crate) fn demonstrate_culling_points(ellipsoid: Ellipsoid, config: &Config) {
    info!("Starting horizon culling point demonstration");

    let rows = config.culling.grid_rows.max(1);
    let cols = config.culling.grid_cols.max(1);
    let camera_position = ellipsoid.cartographic_to_cartesian(Cartographic::from_degrees(
        config.camera.longitude_deg,
        config.camera.latitude_deg,
        config.camera.height_m,
    ));
    let occluder = EllipsoidalOccluder::new(ellipsoid, camera_position);

    let mut computed = 0u32;
    let mut degenerate = 0u32;
    let mut culled = 0u32;
    for row in 0..rows {
        for col in 0..cols {
            let rectangle = Rectangle::from_degrees(
                -180.0 + 360.0 * col as f64 / cols as f64,
                -90.0 + 180.0 * row as f64 / rows as f64,
                -180.0 + 360.0 * (col + 1) as f64 / cols as f64,
                -90.0 + 180.0 * (row + 1) as f64 / rows as f64,
            );
            // Sample the tile at its terrain height bound so the culling
            // point covers the tallest possible geometry.
            let positions = rectangle.subsample(&ellipsoid, config.culling.tile_max_height_m);
            let direction = ellipsoid.cartographic_to_cartesian(rectangle.center());

            match occluder.compute_horizon_culling_point(direction, &positions) {
                Some(point) => {
                    computed += 1;
                    let visible = occluder.is_scaled_space_point_visible(point);
                    if !visible {
                        culled += 1;
                    }
                    if config.debug.log_tile_details {
                        debug!(
                            "tile row {} col {}: culling point ({:.4}, {:.4}, {:.4}), visible: {}",
                            row, col, point.x, point.y, point.z, visible
                        );
                    }
                }
                None => degenerate += 1,
            }
        }
    }

    info!(
        "Computed {} culling points on a {}x{} grid ({} degenerate), {} tiles culled",
        computed, rows, cols, degenerate, culled
    );
    info!("Horizon culling point demonstration completed successfully");
}

/// Demonstrates the rectangle entry point: one culling point proxies a whole
/// lon/lat patch, tested from the configured camera and from its antipode.
pub(crate) fn demonstrate_rectangle_proxy(ellipsoid: Ellipsoid, camera: &CameraConfig) {
    info!("Starting rectangle proxy demonstration");

    let rectangle = Rectangle::from_degrees(
        camera.longitude_deg - 10.0,
        (camera.latitude_deg - 10.0).max(-90.0),
        camera.longitude_deg + 10.0,
        (camera.latitude_deg + 10.0).min(90.0),
    );
    let camera_position = ellipsoid.cartographic_to_cartesian(Cartographic::from_degrees(
        camera.longitude_deg,
        camera.latitude_deg,
        camera.height_m,
    ));
    let mut occluder = EllipsoidalOccluder::new(ellipsoid, camera_position);

    let Some(culling_point) = occluder.compute_horizon_culling_point_from_rectangle(rectangle)
    else {
        warn!("Rectangle under the camera has no culling point");
        return;
    };
    info!(
        "Culling point for the patch under the camera: ({:.4}, {:.4}, {:.4})",
        culling_point.x, culling_point.y, culling_point.z
    );
    info!(
        "Visible from the camera: {}",
        occluder.is_scaled_space_point_visible(culling_point)
    );

    occluder.set_camera_position(-camera_position);
    info!(
        "Visible from the antipode: {}",
        occluder.is_scaled_space_point_visible(culling_point)
    );
    info!("Rectangle proxy demonstration completed successfully");
}
