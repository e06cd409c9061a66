//! Containment tests for circles, great-circle segments and polygons

use log::trace;

use crate::constants::EARTH_RADIUS;
use crate::coordinate::{normalize_all, ToGeoPoint};
use crate::errors::{GeoError, GeoResult};
use crate::geodesy::distance::central_angle;
use crate::geodesy::{get_distance, great_circle_bearing};

/// Distance in meters within which a point counts as lying on a line
pub const LINE_TOLERANCE: f64 = 0.001;

/// Wrap a longitude difference into (-180, 180]
fn wrap_longitude(delta: f64) -> f64 {
    let wrapped = (delta + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Check whether `point` is within `radius` meters of `center`
pub fn is_point_in_circle<A, B>(point: &A, center: &B, radius: f64) -> GeoResult<bool>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
{
    Ok(get_distance(point, center, 1.0, 0)? <= radius)
}

/// Check whether `point` lies on the great-circle segment from `start` to `end`
///
/// Uses the cross-track distance from the great circle and the along-track
/// position on it, both within [`LINE_TOLERANCE`].
pub fn is_point_in_line<A, B, C>(point: &A, start: &B, end: &C) -> GeoResult<bool>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
    C: ToGeoPoint + ?Sized,
{
    let point = point.to_geo_point()?;
    let start = start.to_geo_point()?;
    let end = end.to_geo_point()?;

    let tolerance = LINE_TOLERANCE / EARTH_RADIUS;
    let d13 = central_angle(&start, &point);
    let d12 = central_angle(&start, &end);

    if d12 <= tolerance {
        return Ok(d13 <= tolerance);
    }
    if d13 <= tolerance {
        return Ok(true);
    }

    let theta13 = great_circle_bearing(&start, &point).to_radians();
    let theta12 = great_circle_bearing(&start, &end).to_radians();

    let cross_track = (d13.sin() * (theta13 - theta12).sin()).clamp(-1.0, 1.0).asin();
    let mut along_track = (d13.cos() / cross_track.cos()).clamp(-1.0, 1.0).acos();
    if (theta13 - theta12).cos() < 0.0 {
        along_track = -along_track;
    }

    trace!(
        "cross-track {} m, along-track {} m of {} m",
        cross_track * EARTH_RADIUS, along_track * EARTH_RADIUS, d12 * EARTH_RADIUS
    );

    Ok(cross_track.abs() <= tolerance && along_track >= -tolerance && along_track <= d12 + tolerance)
}

/// Check whether `point` is inside `polygon` (crossing-number test)
///
/// The ring is unwrapped so consecutive longitudes never jump by more than
/// 180°, which keeps polygons spanning the antimeridian intact. The vertices
/// must be in order; self-intersecting rings give no meaningful answer.
///
/// # Errors
/// `InvalidPolygon` for fewer than three vertices
pub fn is_point_inside<A, P>(point: &A, polygon: &[P]) -> GeoResult<bool>
where
    A: ToGeoPoint + ?Sized,
    P: ToGeoPoint,
{
    if polygon.len() < 3 {
        return Err(GeoError::InvalidPolygon(polygon.len()));
    }

    let point = point.to_geo_point()?;
    let vertices = normalize_all(polygon)?;

    // (latitude, unwrapped longitude)
    let mut ring: Vec<(f64, f64)> = Vec::with_capacity(vertices.len());
    let mut x = vertices[0].longitude;
    ring.push((vertices[0].latitude, x));
    for pair in vertices.windows(2) {
        x += wrap_longitude(pair[1].longitude - pair[0].longitude);
        ring.push((pair[1].latitude, x));
    }

    let (min_x, max_x) = ring
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, x)| (lo.min(x), hi.max(x)));
    let mid_x = (min_x + max_x) / 2.0;
    let px = mid_x + wrap_longitude(point.longitude - mid_x);
    let py = point.latitude;

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (yi, xi) = ring[i];
        let (yj, xj) = ring[j];

        if (yi > py) != (yj > py) {
            let crossing = xi + (py - yi) * (xj - xi) / (yj - yi);
            if crossing > px {
                inside = !inside;
            }
        }
        j = i;
    }

    Ok(inside)
}
