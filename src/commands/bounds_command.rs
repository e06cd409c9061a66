//! Bounds and center of a point set, or the box around a point

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::coordinate::{get_bounds, get_bounds_of_distance, get_center, PointInput};
use crate::errors::{GeoError, GeoResult};
use crate::utils::parse_utils::{parse_number, parse_points, required_arg};

/// Command printing an extent
pub struct BoundsCommand {
    points: Vec<PointInput>,
    /// Radius in meters; when set, the single point's surrounding box is printed
    distance: Option<f64>,
}

impl BoundsCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let distance = match args.get_one::<String>("distance") {
            Some(text) => Some(parse_number(text, "distance")?),
            None => None,
        };

        Ok(BoundsCommand {
            points: parse_points(required_arg(args, "points")?)?,
            distance,
        })
    }
}

impl Command for BoundsCommand {
    fn output(&self) -> GeoResult<String> {
        if let Some(distance) = self.distance {
            let point = match self.points.as_slice() {
                [point] => point,
                other => {
                    return Err(GeoError::InvalidArguments(format!(
                        "--distance takes exactly 1 point, got {}", other.len()
                    )))
                }
            };
            let [south_west, north_east] = get_bounds_of_distance(point, distance)?;
            return Ok(format!("{}\n{}", south_west, north_east));
        }

        let bounds = get_bounds(&self.points)?;
        let center = get_center(&self.points)?;

        let mut result = format!(
            "latitude: {} .. {}\nlongitude: {} .. {}",
            bounds.min_lat, bounds.max_lat, bounds.min_lng, bounds.max_lng
        );
        if let (Some(min), Some(max)) = (bounds.min_elev, bounds.max_elev) {
            result.push_str(&format!("\nelevation: {} .. {}", min, max));
        }
        result.push_str(&format!("\ncenter: {}", center));
        Ok(result)
    }
}
