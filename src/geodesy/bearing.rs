//! Bearings and compass directions

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::coordinate::{GeoPoint, ToGeoPoint};
use crate::errors::{GeoError, GeoResult};

/// Width of one of the sixteen compass sectors in degrees
const SECTOR_WIDTH: f64 = 22.5;

/// Bring any angle into [0, 360)
pub(crate) fn normalize_bearing(degrees: f64) -> f64 {
    let bearing = degrees.rem_euclid(360.0);
    if bearing >= 360.0 { 0.0 } else { bearing }
}

pub(crate) fn great_circle_bearing(origin: &GeoPoint, dest: &GeoPoint) -> f64 {
    let d_lon = dest.lon_rad() - origin.lon_rad();
    let y = d_lon.sin() * dest.lat_rad().cos();
    let x = origin.lat_rad().cos() * dest.lat_rad().sin()
        - origin.lat_rad().sin() * dest.lat_rad().cos() * d_lon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

pub(crate) fn rhumb_line_bearing(origin: &GeoPoint, dest: &GeoPoint) -> f64 {
    let mut d_lon = dest.lon_rad() - origin.lon_rad();
    let d_phi = ((dest.lat_rad() / 2.0 + PI / 4.0).tan() / (origin.lat_rad() / 2.0 + PI / 4.0).tan()).ln();

    // take the shorter way round
    if d_lon.abs() > PI {
        d_lon = if d_lon > 0.0 { -(2.0 * PI - d_lon) } else { 2.0 * PI + d_lon };
    }

    normalize_bearing(d_lon.atan2(d_phi).to_degrees())
}

/// Initial great-circle bearing from `origin` to `dest`, in [0, 360)
pub fn get_bearing<A, B>(origin: &A, dest: &B) -> GeoResult<f64>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
{
    Ok(great_circle_bearing(&origin.to_geo_point()?, &dest.to_geo_point()?))
}

/// Constant bearing of the rhumb line from `origin` to `dest`, in [0, 360)
pub fn get_rhumb_line_bearing<A, B>(origin: &A, dest: &B) -> GeoResult<f64>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
{
    Ok(rhumb_line_bearing(&origin.to_geo_point()?, &dest.to_geo_point()?))
}

/// Which bearing `get_compass_direction` uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BearingMode {
    #[default]
    GreatCircle,
    RhumbLine,
}

impl FromStr for BearingMode {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "circle" | "great-circle" => Ok(BearingMode::GreatCircle),
            "rhumb" | "rhumb-line" | "line" => Ok(BearingMode::RhumbLine),
            other => Err(GeoError::InvalidArguments(format!("unknown bearing mode '{}'", other))),
        }
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoughDirection {
    N,
    E,
    S,
    W,
}

/// One of the sixteen compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl ExactDirection {
    /// Compass points clockwise from north
    pub const ALL: [ExactDirection; 16] = [
        ExactDirection::N,
        ExactDirection::NNE,
        ExactDirection::NE,
        ExactDirection::ENE,
        ExactDirection::E,
        ExactDirection::ESE,
        ExactDirection::SE,
        ExactDirection::SSE,
        ExactDirection::S,
        ExactDirection::SSW,
        ExactDirection::SW,
        ExactDirection::WSW,
        ExactDirection::W,
        ExactDirection::WNW,
        ExactDirection::NW,
        ExactDirection::NNW,
    ];

    /// Compass point whose 22.5° sector holds `bearing`
    pub fn from_bearing(bearing: f64) -> Self {
        let index = (normalize_bearing(bearing) / SECTOR_WIDTH).round() as usize % 16;
        Self::ALL[index]
    }

    /// Cardinal direction this point falls under
    pub fn rough(&self) -> RoughDirection {
        use ExactDirection::*;
        match self {
            NNW | N | NNE | NE => RoughDirection::N,
            ENE | E | ESE | SE => RoughDirection::E,
            SSE | S | SSW | SW => RoughDirection::S,
            WSW | W | WNW | NW => RoughDirection::W,
        }
    }
}

impl fmt::Display for ExactDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for RoughDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Compass direction derived from a bearing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub rough: RoughDirection,
    pub exact: ExactDirection,
    /// Bearing in degrees the direction was derived from
    pub bearing: f64,
}

impl Direction {
    pub fn from_bearing(bearing: f64) -> Self {
        let bearing = normalize_bearing(bearing);
        let exact = ExactDirection::from_bearing(bearing);
        Direction { rough: exact.rough(), exact, bearing }
    }
}

/// Compass direction from `origin` to `dest`
pub fn get_compass_direction<A, B>(origin: &A, dest: &B, mode: BearingMode) -> GeoResult<Direction>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
{
    let bearing = match mode {
        BearingMode::GreatCircle => get_bearing(origin, dest)?,
        BearingMode::RhumbLine => get_rhumb_line_bearing(origin, dest)?,
    };

    Ok(Direction::from_bearing(bearing))
}
