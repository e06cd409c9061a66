//! Parsing helpers for command-line arguments

use clap::ArgMatches;

use crate::coordinate::PointInput;
use crate::errors::{GeoError, GeoResult};

/// Fetch a string argument that must be present
pub fn required_arg<'m>(args: &'m ArgMatches, name: &str) -> GeoResult<&'m str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| GeoError::InvalidArguments(format!("Missing argument: {}", name)))
}

/// Parse a single point from `"lng,lat[,elev]"` or `"key=value,..."` text
pub fn parse_point(text: &str) -> GeoResult<PointInput> {
    text.parse()
}

/// Parse a `;`-separated list of points, skipping empty entries
pub fn parse_points(text: &str) -> GeoResult<Vec<PointInput>> {
    text.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_point)
        .collect()
}

/// Parse a floating point argument
pub fn parse_number(text: &str, what: &str) -> GeoResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| GeoError::InvalidArguments(format!("Invalid {}: {}", what, text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{latitude, longitude};

    #[test]
    fn test_parse_points() {
        let points = parse_points("7.4578,51.5048; lat=51.5125,lng=7.485 ;").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(latitude(&points[0]).unwrap(), 51.5048);
        assert_eq!(longitude(&points[1]).unwrap(), 7.485);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 12.5 ", "distance").unwrap(), 12.5);
        assert!(matches!(parse_number("far", "distance"), Err(GeoError::InvalidArguments(_))));
    }
}
