//! Point handling for geodesic calculations
//!
//! This module provides the canonical point type, the accepted input
//! shapes and their normalization, sexagesimal conversion, and bounds/center
//! derivation for point collections.

mod bounds;
mod input;
mod point;
mod sexagesimal;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bounds::{get_bounds, get_bounds_of_distance, get_center, get_center_of_bounds, Bounds};
pub use self::input::{
    elevation, get_elev, get_lat, get_lon, latitude, longitude, normalize, normalize_all, use_decimal,
    Angle, DecimalInput, DecimalValue, ElevationKey, KeyedPoint, LatitudeKey, LongitudeKey, PointInput,
    ToGeoPoint, TIME_KEY,
};
pub use self::point::GeoPoint;
pub use self::sexagesimal::{decimal_to_sexagesimal, is_sexagesimal, sexagesimal_to_decimal};
