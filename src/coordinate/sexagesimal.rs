//! Degrees/minutes/seconds conversion
//!
//! Formats decimal degrees as `D° M' S.SS"` strings and parses them back.
//! Parsing accepts an optional leading minus and an optional hemisphere
//! letter; `S` and `W` make the value negative.

use log::trace;

use crate::constants::SEXAGESIMAL_PATTERN;
use crate::errors::{GeoError, GeoResult};
use crate::units::round_to;

/// Hundredths of an arc second per degree
const HUNDREDTHS_PER_DEGREE: f64 = 360_000.0;

/// Check whether a string is in sexagesimal notation
pub fn is_sexagesimal(value: &str) -> bool {
    SEXAGESIMAL_PATTERN.is_match(value.trim())
}

/// Convert decimal degrees to a sexagesimal string
///
/// Seconds are kept to two decimals; carries into minutes and degrees are
/// resolved so the seconds field never reads `60.00`.
pub fn decimal_to_sexagesimal(decimal: f64) -> String {
    let hundredths = (decimal.abs() * HUNDREDTHS_PER_DEGREE).round() as u64;

    let degrees = hundredths / 360_000;
    let minutes = (hundredths % 360_000) / 6_000;
    let seconds = (hundredths % 6_000) as f64 / 100.0;

    let sign = if decimal < 0.0 && hundredths > 0 { "-" } else { "" };

    format!("{}{}° {}' {:.2}\"", sign, degrees, minutes, seconds)
}

/// Convert a sexagesimal string to decimal degrees
///
/// # Arguments
/// * `sexagesimal` - A string such as `51° 31' 10.11" N` or `-122° 25' 9.84"`
///
/// # Returns
/// The value in decimal degrees rounded to 8 places, or `InvalidSexagesimal`
pub fn sexagesimal_to_decimal(sexagesimal: &str) -> GeoResult<f64> {
    let input = sexagesimal.trim();
    let caps = SEXAGESIMAL_PATTERN
        .captures(input)
        .ok_or_else(|| GeoError::InvalidSexagesimal(sexagesimal.to_string()))?;

    let field = |idx: usize| -> GeoResult<f64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse::<f64>()
                .map_err(|_| GeoError::InvalidSexagesimal(sexagesimal.to_string())),
            None => Ok(0.0),
        }
    };

    let degrees = field(2)?;
    let minutes = field(3)?;
    let seconds = field(5)?;

    let magnitude = round_to(degrees + minutes / 60.0 + seconds / 3600.0, 8);

    let negative_sign = caps.get(1).map_or(false, |m| m.as_str() == "-");
    let negative_hemisphere = matches!(caps.get(8).map(|m| m.as_str()), Some("S") | Some("W"));

    let decimal = if negative_sign || negative_hemisphere { -magnitude } else { magnitude };
    trace!("Parsed sexagesimal '{}' as {}", input, decimal);

    Ok(decimal)
}
