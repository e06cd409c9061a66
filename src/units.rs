//! Unit conversion for distances and speeds
//!
//! Conversion factors live in the `MEASURES` and `SPEED_UNITS` tables; the
//! enums here only name the symbols those tables are keyed by.

use std::fmt;
use std::str::FromStr;

use crate::constants::{MEASURES, SPEED_UNITS};
use crate::errors::{GeoError, GeoResult};

/// Decimal places used by `convert_unit` when no rounding is requested
pub const DEFAULT_ROUND: u32 = 4;

/// Length units accepted by `convert_unit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Miles,
    SeaMiles,
    Feet,
    Inches,
    Yards,
}

impl DistanceUnit {
    /// Symbol used in the `MEASURES` table
    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Centimeters => "cm",
            DistanceUnit::Millimeters => "mm",
            DistanceUnit::Miles => "mi",
            DistanceUnit::SeaMiles => "sm",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Inches => "in",
            DistanceUnit::Yards => "yd",
        }
    }

    /// Multiplier turning meters into this unit
    pub fn factor(&self) -> f64 {
        MEASURES.get(self.symbol()).copied().unwrap_or(1.0)
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.trim() {
            "m" => Ok(DistanceUnit::Meters),
            "km" => Ok(DistanceUnit::Kilometers),
            "cm" => Ok(DistanceUnit::Centimeters),
            "mm" => Ok(DistanceUnit::Millimeters),
            "mi" => Ok(DistanceUnit::Miles),
            "sm" => Ok(DistanceUnit::SeaMiles),
            "ft" => Ok(DistanceUnit::Feet),
            "in" => Ok(DistanceUnit::Inches),
            "yd" => Ok(DistanceUnit::Yards),
            other => Err(GeoError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Speed units accepted by `get_speed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    KilometersPerHour,
    MilesPerHour,
    MetersPerSecond,
    Knots,
}

impl SpeedUnit {
    /// Symbol used in the `SPEED_UNITS` table
    pub fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::KilometersPerHour => "kmh",
            SpeedUnit::MilesPerHour => "mph",
            SpeedUnit::MetersPerSecond => "ms",
            SpeedUnit::Knots => "kn",
        }
    }

    /// Multiplier turning km/h into this unit
    pub fn factor(&self) -> f64 {
        SPEED_UNITS.get(self.symbol()).copied().unwrap_or(1.0)
    }
}

impl Default for SpeedUnit {
    fn default() -> Self {
        SpeedUnit::KilometersPerHour
    }
}

impl FromStr for SpeedUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        // "km" and "mi" are accepted as shorthands for the hourly rates
        match s.trim() {
            "kmh" | "km" => Ok(SpeedUnit::KilometersPerHour),
            "mph" | "mi" => Ok(SpeedUnit::MilesPerHour),
            "ms" => Ok(SpeedUnit::MetersPerSecond),
            "kn" | "knots" => Ok(SpeedUnit::Knots),
            other => Err(GeoError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Convert a distance in meters into `unit`
///
/// # Arguments
/// * `unit` - Target unit symbol (m, km, cm, mm, mi, sm, ft, in, yd)
/// * `meters` - Distance in meters
/// * `round` - Decimal places to keep, 4 when `None`
///
/// # Returns
/// The converted distance, or `UnknownUnit` for an unrecognized symbol
pub fn convert_unit(unit: &str, meters: f64, round: Option<u32>) -> GeoResult<f64> {
    let factor = MEASURES
        .get(unit.trim())
        .copied()
        .ok_or_else(|| GeoError::UnknownUnit(unit.to_string()))?;

    Ok(round_to(meters * factor, round.unwrap_or(DEFAULT_ROUND)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilometers() {
        assert_eq!(convert_unit("km", 1000.0, None).unwrap(), 1.0);
    }

    #[test]
    fn test_miles_rounded() {
        let miles = convert_unit("mi", 1609.34, Some(2)).unwrap();
        assert!((miles - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit() {
        match convert_unit("furlong", 10.0, None) {
            Err(GeoError::UnknownUnit(u)) => assert_eq!(u, "furlong"),
            other => panic!("expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.23456, 2), 1.23);
    }

    #[test]
    fn test_unit_symbols_parse() {
        for symbol in ["m", "km", "cm", "mm", "mi", "sm", "ft", "in", "yd"] {
            let unit: DistanceUnit = symbol.parse().unwrap();
            assert_eq!(unit.symbol(), symbol);
        }
        assert_eq!("mi".parse::<SpeedUnit>().unwrap(), SpeedUnit::MilesPerHour);
        assert!("lightyear".parse::<SpeedUnit>().is_err());
    }

    #[test]
    fn test_distance_unit_factor_matches_table() {
        for symbol in ["m", "km", "cm", "mm", "mi", "sm", "ft", "in", "yd"] {
            let unit: DistanceUnit = symbol.parse().unwrap();
            assert_eq!(unit.factor(), MEASURES[symbol]);
        }
        assert_eq!(DistanceUnit::Kilometers.factor(), 0.001);
    }
}
