//! Distance calculations
//!
//! `get_distance` solves the inverse geodesic problem on the WGS-84 ellipsoid
//! with Vincenty's iteration. When the iteration does not converge (nearly
//! antipodal points) the spherical great-circle distance is used instead, so
//! the function always yields a finite distance.

use log::debug;

use crate::constants::{vincenty, wgs84, EARTH_RADIUS};
use crate::coordinate::{GeoPoint, ToGeoPoint};
use crate::errors::GeoResult;

/// Round `meters` to the nearest multiple of `accuracy / 10^precision`
///
/// A non-positive or non-finite accuracy is treated as 1 meter.
pub(crate) fn round_distance(meters: f64, accuracy: f64, precision: u32) -> f64 {
    let accuracy = if accuracy.is_finite() && accuracy > 0.0 { accuracy } else { 1.0 };
    let scale = 10f64.powi(precision as i32);
    (meters * scale / accuracy).round() * accuracy / scale
}

/// Vincenty inverse solution in meters
///
/// Returns `None` if the iteration fails to converge or produces a
/// non-finite intermediate value.
pub(crate) fn vincenty_inverse(start: &GeoPoint, end: &GeoPoint) -> Option<f64> {
    let (a, b, f) = (wgs84::A, wgs84::B, wgs84::F);

    let l = (end.longitude - start.longitude).to_radians();
    let u1 = ((1.0 - f) * start.lat_rad().tan()).atan();
    let u2 = ((1.0 - f) * end.lat_rad().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;

    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut cos_sq_alpha = 0.0;
    let mut cos_2sigma_m = 0.0;

    for _ in 0..vincenty::MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = (t1 * t1 + t2 * t2).sqrt();
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;

        if sin_sigma == 0.0 {
            // coincident points; antipodal ones are left to the fallback
            return if cos_sigma > 0.0 { Some(0.0) } else { None };
        }

        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // equatorial line: cos²α = 0
        cos_2sigma_m = if cos_sq_alpha.abs() > f64::EPSILON {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l + (1.0 - c) * f * sin_alpha
            * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if !lambda.is_finite() {
            return None;
        }
        if (lambda - previous).abs() < vincenty::TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        return None;
    }

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b * sin_sigma
        * (cos_2sigma_m + big_b / 4.0
            * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                - big_b / 6.0 * cos_2sigma_m
                    * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                    * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    let distance = b * big_a * (sigma - delta_sigma);
    if distance.is_finite() { Some(distance.max(0.0)) } else { None }
}

/// Central angle between two points in radians (haversine)
pub(crate) fn central_angle(start: &GeoPoint, end: &GeoPoint) -> f64 {
    let d_lat = end.lat_rad() - start.lat_rad();
    let d_lon = end.lon_rad() - start.lon_rad();

    let h = (d_lat / 2.0).sin().powi(2)
        + start.lat_rad().cos() * end.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Great-circle distance in meters on the `EARTH_RADIUS` sphere
pub(crate) fn great_circle_distance(start: &GeoPoint, end: &GeoPoint) -> f64 {
    central_angle(start, end) * EARTH_RADIUS
}

/// Unrounded ellipsoidal distance with the spherical fallback applied
pub(crate) fn geodesic_distance(start: &GeoPoint, end: &GeoPoint) -> f64 {
    vincenty_inverse(start, end).unwrap_or_else(|| {
        debug!("Vincenty did not converge between {} and {}, using great circle", start, end);
        great_circle_distance(start, end)
    })
}

/// Geodetic distance between two points
///
/// # Arguments
/// * `start` - First point
/// * `end` - Second point
/// * `accuracy` - Result is rounded to a multiple of this many meters (1 is the usual choice)
/// * `precision` - Decimal places applied together with `accuracy`
///
/// # Returns
/// Distance in meters; 0 for identical points
pub fn get_distance<A, B>(start: &A, end: &B, accuracy: f64, precision: u32) -> GeoResult<f64>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
{
    let start = start.to_geo_point()?;
    let end = end.to_geo_point()?;

    Ok(round_distance(geodesic_distance(&start, &end), accuracy, precision))
}

/// Cheaper spherical distance (law of cosines)
///
/// Less accurate than [`get_distance`]; rounded the same way with a
/// precision of zero.
pub fn get_distance_simple<A, B>(start: &A, end: &B, accuracy: f64) -> GeoResult<f64>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
{
    let start = start.to_geo_point()?;
    let end = end.to_geo_point()?;

    let cos_angle = start.lat_rad().sin() * end.lat_rad().sin()
        + start.lat_rad().cos() * end.lat_rad().cos() * (start.lon_rad() - end.lon_rad()).cos();
    let distance = cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS;

    Ok(round_distance(distance, accuracy, 0))
}

/// Total length of a path, summing the distances of consecutive points
pub fn get_path_length<P: ToGeoPoint>(points: &[P]) -> GeoResult<f64> {
    let mut total = 0.0;
    let mut previous: Option<GeoPoint> = None;

    for point in points {
        let current = point.to_geo_point()?;
        if let Some(last) = previous {
            total += get_distance(&last, &current, 1.0, 0)?;
        }
        previous = Some(current);
    }

    Ok(total)
}
