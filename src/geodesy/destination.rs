//! Destination point on a sphere

use std::f64::consts::PI;

use crate::constants::{EARTH_RADIUS, MAX_LAT, MAX_LON, MIN_LAT};
use crate::coordinate::{GeoPoint, ToGeoPoint};
use crate::errors::{GeoError, GeoResult};

/// Point reached by travelling `distance` meters from `start` on `bearing`
///
/// # Arguments
/// * `start` - Starting point
/// * `distance` - Distance in meters
/// * `bearing` - Initial bearing in degrees, clockwise from north
/// * `radius` - Sphere radius in meters, `EARTH_RADIUS` when `None`
///
/// # Returns
/// The destination with longitude in (-180, 180], or `InvalidArguments` for a
/// non-finite distance or bearing or a radius that is not positive
pub fn compute_destination_point<P: ToGeoPoint + ?Sized>(
    start: &P,
    distance: f64,
    bearing: f64,
    radius: Option<f64>,
) -> GeoResult<GeoPoint> {
    let start = start.to_geo_point()?;
    let radius = radius.unwrap_or(EARTH_RADIUS);

    if !distance.is_finite() || !bearing.is_finite() {
        return Err(GeoError::InvalidArguments(format!(
            "distance {} and bearing {} must be finite", distance, bearing
        )));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeoError::InvalidArguments(format!("radius must be positive, got {}", radius)));
    }

    let delta = distance / radius;
    let theta = bearing.to_radians();
    let phi1 = start.lat_rad();
    let lambda1 = start.lon_rad();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    let mut longitude = ((lambda2 + 3.0 * PI).rem_euclid(2.0 * PI) - PI).to_degrees();
    if longitude <= -180.0 {
        longitude += 360.0;
    }

    Ok(GeoPoint::from_trusted(
        phi2.to_degrees().clamp(MIN_LAT, MAX_LAT),
        longitude.min(MAX_LON),
    ))
}
