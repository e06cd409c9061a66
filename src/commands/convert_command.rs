//! Unit and angle format conversion
//!
//! With `--unit` the value is a distance in meters converted into that unit.
//! Without it the value is an angle: sexagesimal text becomes decimal degrees
//! and decimal degrees become sexagesimal text.

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::coordinate::{decimal_to_sexagesimal, is_sexagesimal, sexagesimal_to_decimal};
use crate::errors::GeoResult;
use crate::units::convert_unit;
use crate::utils::parse_utils::{parse_number, required_arg};

/// Command converting a distance between units or an angle between formats
pub struct ConvertCommand {
    value: String,
    /// Target unit symbol for distance conversion
    unit: Option<String>,
    /// Decimal places for distance conversion
    round: Option<u32>,
}

impl ConvertCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        Ok(ConvertCommand {
            value: required_arg(args, "value")?.to_string(),
            unit: args.get_one::<String>("unit").cloned(),
            round: args.get_one::<u32>("round").copied(),
        })
    }
}

impl Command for ConvertCommand {
    fn output(&self) -> GeoResult<String> {
        if let Some(unit) = &self.unit {
            let meters = parse_number(&self.value, "distance")?;
            let converted = convert_unit(unit, meters, self.round)?;
            return Ok(format!("{} {}", converted, unit));
        }

        if is_sexagesimal(&self.value) {
            debug!("Converting sexagesimal '{}' to decimal", self.value);
            Ok(sexagesimal_to_decimal(&self.value)?.to_string())
        } else {
            let decimal = parse_number(&self.value, "angle")?;
            Ok(decimal_to_sexagesimal(decimal))
        }
    }
}
