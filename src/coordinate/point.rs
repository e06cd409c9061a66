//! Canonical point representation

use std::fmt;

use crate::constants::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::errors::{GeoError, GeoResult};

/// A validated position on Earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in [-90, 90]
    pub latitude: f64,
    /// Longitude in [-180, 180]
    pub longitude: f64,
    /// Elevation in meters, if the source supplied one
    pub elevation: Option<f64>,
}

impl GeoPoint {
    /// Create a new 2D point, checking the latitude/longitude ranges
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !latitude.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(GeoError::InvalidPoint(format!(
                "latitude {} outside [{}, {}]", latitude, MIN_LAT, MAX_LAT
            )));
        }

        if !longitude.is_finite() || !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(GeoError::InvalidPoint(format!(
                "longitude {} outside [{}, {}]", longitude, MIN_LON, MAX_LON
            )));
        }

        Ok(GeoPoint { latitude, longitude, elevation: None })
    }

    /// Create a new 3D point
    pub fn new_3d(latitude: f64, longitude: f64, elevation: f64) -> GeoResult<Self> {
        Ok(GeoPoint::new(latitude, longitude)?.with_elevation(Some(elevation)))
    }

    /// Build a point from values that are already known to be in range.
    ///
    /// Used by the geodesy code for computed results (destinations, bounds).
    pub(crate) fn from_trusted(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude, elevation: None }
    }

    pub fn with_elevation(mut self, elevation: Option<f64>) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elevation {
            Some(elev) => write!(f, "lat={},lng={},elevation={}", self.latitude, self.longitude, elev),
            None => write!(f, "lat={},lng={}", self.latitude, self.longitude),
        }
    }
}
