//! Geodesic calculations on WGS-84 coordinates
//!
//! Distances, bearings, destination points, containment tests, bounds and
//! nearest-point ranking over points supplied in several shapes.

pub mod api;
pub mod commands;
pub mod config;
pub mod constants;
pub mod coordinate;
pub mod errors;
pub mod geodesy;
pub mod nearest;
pub mod predicates;
pub mod registry;
pub mod units;
pub mod utils;

pub use crate::api::GeoKit;
pub use crate::config::GeoKitConfig;
pub use crate::errors::{GeoError, GeoResult};

pub use constants::{
    EARTH_RADIUS, MAX_LAT, MAX_LON, MEASURES, MIN_LAT, MIN_LON, SEXAGESIMAL_PATTERN, SPEED_UNITS, VERSION,
};
pub use coordinate::{
    decimal_to_sexagesimal, elevation, get_bounds, get_bounds_of_distance, get_center, get_center_of_bounds,
    get_elev, get_lat, get_lon, is_sexagesimal, latitude, longitude, normalize, sexagesimal_to_decimal,
    use_decimal, Angle, Bounds, DecimalInput, DecimalValue, GeoPoint, KeyedPoint, PointInput, ToGeoPoint,
};
pub use geodesy::{
    compute_destination_point, get_bearing, get_compass_direction, get_distance, get_distance_simple,
    get_path_length, get_rhumb_line_bearing, get_speed, BearingMode, Direction, ExactDirection, RoughDirection,
};
pub use nearest::{find_nearest, find_nearest_n, order_by_distance, DistanceIndexElement};
pub use predicates::{is_point_in_circle, is_point_in_line, is_point_inside};
pub use registry::{Operation, OperationOutput, OperationRegistry};
pub use units::{convert_unit, DistanceUnit, SpeedUnit};
