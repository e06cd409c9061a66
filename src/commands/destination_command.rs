//! Destination point from a start, distance and bearing

use clap::ArgMatches;

use crate::api::GeoKit;
use crate::commands::command_traits::Command;
use crate::coordinate::PointInput;
use crate::errors::GeoResult;
use crate::utils::parse_utils::{parse_number, parse_point, required_arg};

/// Command printing the point reached from a start point
pub struct DestinationCommand<'a> {
    start: PointInput,
    /// Meters
    distance: f64,
    /// Degrees clockwise from north
    bearing: f64,
    geokit: &'a GeoKit,
}

impl<'a> DestinationCommand<'a> {
    pub fn new(args: &ArgMatches, geokit: &'a GeoKit) -> GeoResult<Self> {
        Ok(DestinationCommand {
            start: parse_point(required_arg(args, "start")?)?,
            distance: parse_number(required_arg(args, "distance")?, "distance")?,
            bearing: parse_number(required_arg(args, "bearing")?, "bearing")?,
            geokit,
        })
    }
}

impl<'a> Command for DestinationCommand<'a> {
    fn output(&self) -> GeoResult<String> {
        let destination = self.geokit.destination(&self.start, self.distance, self.bearing)?;
        Ok(destination.to_string())
    }
}
