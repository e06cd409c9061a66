//! Runtime defaults read from a TOML file
//!
//! ```toml
//! [distance]
//! accuracy = 1.0
//! precision = 0
//! unit = "km"
//!
//! [speed]
//! unit = "mph"
//!
//! [earth]
//! radius = 6378137.0
//! ```
//!
//! Every key is optional; missing ones keep their defaults.

use std::fs;

use log::debug;

use crate::constants::EARTH_RADIUS;
use crate::errors::{GeoError, GeoResult};
use crate::units::{DistanceUnit, SpeedUnit};

/// Defaults applied by the [`GeoKit`](crate::api::GeoKit) facade
#[derive(Debug, Clone, PartialEq)]
pub struct GeoKitConfig {
    /// Distances are rounded to a multiple of this many meters
    pub accuracy: f64,
    /// Decimal places kept when rounding distances
    pub precision: u32,
    /// Unit distances are reported in
    pub unit: DistanceUnit,
    pub speed_unit: SpeedUnit,
    /// Sphere radius for destination points, in meters
    pub radius: f64,
}

impl Default for GeoKitConfig {
    fn default() -> Self {
        GeoKitConfig {
            accuracy: 1.0,
            precision: 0,
            unit: DistanceUnit::Meters,
            speed_unit: SpeedUnit::KilometersPerHour,
            radius: EARTH_RADIUS,
        }
    }
}

impl GeoKitConfig {
    /// Parse a configuration from TOML text
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = GeoKitConfig::default();

        if let Some(table) = toml_value.get("distance") {
            if let Some(accuracy) = Self::get_number(table, "distance.accuracy")? {
                config.accuracy = accuracy;
            }
            if let Some(value) = table.get("precision") {
                config.precision = value
                    .as_integer()
                    .and_then(|p| u32::try_from(p).ok())
                    .ok_or_else(|| GeoError::ConfigError(format!("distance.precision must be a non-negative integer, got {}", value)))?;
            }
            if let Some(unit) = Self::get_str(table, "distance.unit")? {
                config.unit = unit.parse()?;
            }
        }

        if let Some(table) = toml_value.get("speed") {
            if let Some(unit) = Self::get_str(table, "speed.unit")? {
                config.speed_unit = unit.parse()?;
            }
        }

        if let Some(table) = toml_value.get("earth") {
            if let Some(radius) = Self::get_number(table, "earth.radius")? {
                config.radius = radius;
            }
        }

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Reject values no calculation can use
    pub fn validate(&self) -> GeoResult<()> {
        if !self.accuracy.is_finite() {
            return Err(GeoError::ConfigError(format!("accuracy must be finite, got {}", self.accuracy)));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeoError::ConfigError(format!("radius must be positive, got {}", self.radius)));
        }
        Ok(())
    }

    // Integers are accepted wherever a float is expected
    fn get_number(table: &toml::Value, path: &str) -> GeoResult<Option<f64>> {
        let key = path.rsplit('.').next().unwrap_or(path);
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::Float(f)) => Ok(Some(*f)),
            Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
            Some(other) => Err(GeoError::ConfigError(format!("{} must be a number, got {}", path, other))),
        }
    }

    fn get_str<'v>(table: &'v toml::Value, path: &str) -> GeoResult<Option<&'v str>> {
        let key = path.rsplit('.').next().unwrap_or(path);
        match table.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| GeoError::ConfigError(format!("{} must be a string, got {}", path, value))),
        }
    }
}
