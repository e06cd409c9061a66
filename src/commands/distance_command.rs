//! Distance between two points

use clap::ArgMatches;
use log::info;

use crate::api::GeoKit;
use crate::commands::command_traits::Command;
use crate::coordinate::PointInput;
use crate::errors::GeoResult;
use crate::utils::parse_utils::{parse_point, required_arg};

/// Command printing the distance between two points in the configured unit
pub struct DistanceCommand<'a> {
    from: PointInput,
    to: PointInput,
    /// Use the spherical law of cosines instead of Vincenty
    simple: bool,
    geokit: &'a GeoKit,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches
    /// * `geokit` - Facade holding the configured unit and rounding
    pub fn new(args: &ArgMatches, geokit: &'a GeoKit) -> GeoResult<Self> {
        Ok(DistanceCommand {
            from: parse_point(required_arg(args, "from")?)?,
            to: parse_point(required_arg(args, "to")?)?,
            simple: args.get_flag("simple"),
            geokit,
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn output(&self) -> GeoResult<String> {
        let distance = if self.simple {
            self.geokit.distance_simple(&self.from, &self.to)?
        } else {
            self.geokit.distance(&self.from, &self.to)?
        };
        info!("Distance {:?} -> {:?}: {}", self.from, self.to, distance);

        Ok(format!("{} {}", distance, self.geokit.config().unit))
    }
}
