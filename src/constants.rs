//! Geodetic constants and lookup tables
//!
//! Everything in here is read-only process-wide data. The tables are built
//! on first access and never modified afterwards.

use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Earth radius in meters used by the spherical formulas
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitude and longitude limits in decimal degrees
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// WGS-84 ellipsoid parameters
pub mod wgs84 {
    /// Semi-major axis (meters)
    pub const A: f64 = 6378137.0;
    /// Semi-minor axis (meters)
    pub const B: f64 = 6356752.314245;
    /// Flattening
    pub const F: f64 = 1.0 / 298.257223563;
}

/// Vincenty iteration parameters
pub mod vincenty {
    /// Convergence threshold on the longitude difference (radians)
    pub const TOLERANCE: f64 = 1e-12;
    pub const MAX_ITERATIONS: usize = 1000;
}

/// Source of the sexagesimal validation regex
///
/// Groups: 1 sign, 2 degrees, 3 minutes, 5 seconds, 8 hemisphere.
pub const SEXAGESIMAL_PATTERN_SOURCE: &str =
    r#"^(-?)([0-9]{1,3})°\s*([0-9]{1,3}(?:\.[0-9]{1,2})?)'\s*(([0-9]{1,3}(\.([0-9]{1,4}))?)"\s*)?([NEOSW]?)$"#;

lazy_static! {
    /// Compiled sexagesimal validation pattern
    pub static ref SEXAGESIMAL_PATTERN: Regex = Regex::new(SEXAGESIMAL_PATTERN_SOURCE)
        .expect("sexagesimal pattern is a valid regex");

    /// Distance unit factors: value in unit = meters * factor
    pub static ref MEASURES: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        m.insert("m", 1.0);
        m.insert("km", 0.001);
        m.insert("cm", 100.0);
        m.insert("mm", 1000.0);
        m.insert("mi", 1.0 / 1609.344);
        m.insert("sm", 1.0 / 1852.216);
        m.insert("ft", 100.0 / 30.48);
        m.insert("in", 100.0 / 2.54);
        m.insert("yd", 1.0 / 0.9144);
        m
    };

    /// Speed unit factors: value in unit = km/h * factor
    pub static ref SPEED_UNITS: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        m.insert("kmh", 1.0);
        m.insert("mph", 1.0 / 1.609344);
        m.insert("ms", 1.0 / 3.6);
        m.insert("kn", 1.0 / 1.852);
        m
    };
}
