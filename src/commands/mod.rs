//! CLI command implementations
//!
//! One command per subcommand, selected by [`GeokitCommandFactory`].

pub mod command_traits;
pub mod bearing_command;
pub mod bounds_command;
pub mod convert_command;
pub mod destination_command;
pub mod distance_command;
pub mod inside_command;
pub mod measure_command;
pub mod nearest_command;

pub use command_traits::{Command, CommandFactory};
pub use bearing_command::BearingCommand;
pub use bounds_command::BoundsCommand;
pub use convert_command::ConvertCommand;
pub use destination_command::DestinationCommand;
pub use distance_command::DistanceCommand;
pub use inside_command::InsideCommand;
pub use measure_command::MeasureCommand;
pub use nearest_command::NearestCommand;

use clap::ArgMatches;
use crate::api::GeoKit;
use crate::errors::{GeoError, GeoResult};

/// Factory for creating command instances based on CLI arguments
pub struct GeokitCommandFactory;

impl GeokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeokitCommandFactory
    }
}

impl Default for GeokitCommandFactory {
    fn default() -> Self {
        GeokitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for GeokitCommandFactory {
    fn create_command(&self, args: &ArgMatches, geokit: &'a GeoKit) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, geokit)?)),
            Some(("bearing", sub)) => Ok(Box::new(BearingCommand::new(sub)?)),
            Some(("destination", sub)) => Ok(Box::new(DestinationCommand::new(sub, geokit)?)),
            Some(("convert", sub)) => Ok(Box::new(ConvertCommand::new(sub)?)),
            Some(("nearest", sub)) => Ok(Box::new(NearestCommand::new(sub, geokit)?)),
            Some(("inside", sub)) => Ok(Box::new(InsideCommand::new(sub)?)),
            Some(("bounds", sub)) => Ok(Box::new(BoundsCommand::new(sub)?)),
            Some(("measure", sub)) => Ok(Box::new(MeasureCommand::new(sub, geokit)?)),
            Some((name, _)) => Err(GeoError::UnknownOperation(name.to_string())),
            None => Err(GeoError::InvalidArguments("No subcommand given".to_string())),
        }
    }
}
