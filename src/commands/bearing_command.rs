//! Bearing and compass direction between two points

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::coordinate::PointInput;
use crate::errors::GeoResult;
use crate::geodesy::{get_compass_direction, BearingMode};
use crate::utils::parse_utils::{parse_point, required_arg};

/// Command printing the initial bearing and its compass direction
pub struct BearingCommand {
    from: PointInput,
    to: PointInput,
    mode: BearingMode,
}

impl BearingCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let mode = match args.get_one::<String>("mode") {
            Some(mode) => mode.parse()?,
            None => BearingMode::default(),
        };

        Ok(BearingCommand {
            from: parse_point(required_arg(args, "from")?)?,
            to: parse_point(required_arg(args, "to")?)?,
            mode,
        })
    }
}

impl Command for BearingCommand {
    fn output(&self) -> GeoResult<String> {
        let direction = get_compass_direction(&self.from, &self.to, self.mode)?;
        Ok(format!("{:.4}° {} ({})", direction.bearing, direction.exact, direction.rough))
    }
}
