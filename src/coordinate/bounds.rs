//! Bounding boxes and centers of point collections

use std::f64::consts::PI;

use log::debug;

use super::input::ToGeoPoint;
use super::point::GeoPoint;
use crate::constants::{EARTH_RADIUS, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::errors::{GeoError, GeoResult};

/// Extent of a point collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    /// `None` when no point carried an elevation
    pub min_elev: Option<f64>,
    pub max_elev: Option<f64>,
}

impl Bounds {
    /// Bounds of a single point
    fn of_point(point: &GeoPoint) -> Self {
        Bounds {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lng: point.longitude,
            max_lng: point.longitude,
            min_elev: point.elevation,
            max_elev: point.elevation,
        }
    }

    /// Grow the bounds to include `point`
    fn extend(&mut self, point: &GeoPoint) {
        self.min_lat = self.min_lat.min(point.latitude);
        self.max_lat = self.max_lat.max(point.latitude);
        self.min_lng = self.min_lng.min(point.longitude);
        self.max_lng = self.max_lng.max(point.longitude);

        if let Some(elev) = point.elevation {
            self.min_elev = Some(self.min_elev.map_or(elev, |m| m.min(elev)));
            self.max_elev = Some(self.max_elev.map_or(elev, |m| m.max(elev)));
        }
    }

    /// Check if these bounds contain a point (elevation is ignored)
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.min_lat && point.latitude <= self.max_lat &&
            point.longitude >= self.min_lng && point.longitude <= self.max_lng
    }

    /// Midpoint of the latitude and longitude ranges
    pub fn center(&self) -> GeoPoint {
        GeoPoint::from_trusted(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Minimum and maximum latitude, longitude and elevation of a collection
pub fn get_bounds<P: ToGeoPoint>(points: &[P]) -> GeoResult<Bounds> {
    let mut iter = points.iter();
    let first = iter.next().ok_or(GeoError::EmptyPointSet)?.to_geo_point()?;

    let mut bounds = Bounds::of_point(&first);
    for point in iter {
        bounds.extend(&point.to_geo_point()?);
    }

    Ok(bounds)
}

/// Arithmetic mean of the latitudes and longitudes
///
/// A planar average of decimal degrees. Least accurate near the poles and
/// for collections spanning the antimeridian.
pub fn get_center<P: ToGeoPoint>(points: &[P]) -> GeoResult<GeoPoint> {
    if points.is_empty() {
        return Err(GeoError::EmptyPointSet);
    }

    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;
    for point in points {
        let point = point.to_geo_point()?;
        lat_sum += point.latitude;
        lng_sum += point.longitude;
    }

    let count = points.len() as f64;
    Ok(GeoPoint::from_trusted(lat_sum / count, lng_sum / count))
}

/// Center of the bounding box of a collection
///
/// Unlike [`get_center`] this does not drift toward borders that happen to
/// have many vertices.
pub fn get_center_of_bounds<P: ToGeoPoint>(points: &[P]) -> GeoResult<GeoPoint> {
    Ok(get_bounds(points)?.center())
}

/// Corners of a box holding every point within `distance` meters
///
/// # Arguments
/// * `point` - Center of the search circle
/// * `distance` - Great circle distance in meters
///
/// # Returns
/// `[south_west, north_east]`. When the circle crosses the antimeridian the
/// south-west longitude is greater than the north-east one. When it reaches
/// a pole the longitudes span the full range.
pub fn get_bounds_of_distance<P: ToGeoPoint + ?Sized>(point: &P, distance: f64) -> GeoResult<[GeoPoint; 2]> {
    let center = point.to_geo_point()?;

    let rad_lat = center.lat_rad();
    let rad_lon = center.lon_rad();
    let rad_dist = distance.max(0.0) / EARTH_RADIUS;

    let min_lat_rad = MIN_LAT.to_radians();
    let max_lat_rad = MAX_LAT.to_radians();
    let min_lon_rad = MIN_LON.to_radians();
    let max_lon_rad = MAX_LON.to_radians();

    let min_lat = rad_lat - rad_dist;
    let max_lat = rad_lat + rad_dist;

    let (south, north, west, east) = if min_lat > min_lat_rad && max_lat < max_lat_rad {
        let delta_lon = (rad_dist.sin() / rad_lat.cos()).asin();

        let mut west = rad_lon - delta_lon;
        if west < min_lon_rad {
            west += 2.0 * PI;
        }
        let mut east = rad_lon + delta_lon;
        if east > max_lon_rad {
            east -= 2.0 * PI;
        }
        (min_lat.to_degrees(), max_lat.to_degrees(), west.to_degrees(), east.to_degrees())
    } else {
        debug!("Distance circle around {} reaches a pole, widening longitudes", center);
        (
            min_lat.to_degrees().max(MIN_LAT),
            max_lat.to_degrees().min(MAX_LAT),
            MIN_LON,
            MAX_LON,
        )
    };

    Ok([
        GeoPoint::from_trusted(south, west),
        GeoPoint::from_trusted(north, east),
    ])
}
