//! Geodesic calculations
//!
//! Distances (ellipsoidal and spherical), bearings and compass directions,
//! destination points and speeds between points.

mod bearing;
mod destination;
pub(crate) mod distance;
mod speed;
#[cfg(test)]
mod tests;

pub use self::bearing::{
    get_bearing, get_compass_direction, get_rhumb_line_bearing, BearingMode, Direction, ExactDirection,
    RoughDirection,
};
pub(crate) use self::bearing::great_circle_bearing;
pub use self::destination::compute_destination_point;
pub use self::distance::{get_distance, get_distance_simple, get_path_length};
pub use self::speed::get_speed;
