//! Named operations dispatched through the registry

use clap::ArgMatches;

use crate::api::GeoKit;
use crate::commands::command_traits::Command;
use crate::coordinate::PointInput;
use crate::errors::{GeoError, GeoResult};
use crate::utils::parse_utils::parse_points;

/// Command running a registered operation, or listing them
pub struct MeasureCommand<'a> {
    /// `None` lists the available operations
    operation: Option<String>,
    points: Vec<PointInput>,
    geokit: &'a GeoKit,
}

impl<'a> MeasureCommand<'a> {
    pub fn new(args: &ArgMatches, geokit: &'a GeoKit) -> GeoResult<Self> {
        let list = args.get_flag("list");
        let operation = args.get_one::<String>("operation").cloned();
        if !list && operation.is_none() {
            return Err(GeoError::InvalidArguments(
                "Missing operation name. Use --list to see the available ones".to_string(),
            ));
        }

        let points = match args.get_one::<String>("points") {
            Some(text) => parse_points(text)?,
            None => Vec::new(),
        };

        Ok(MeasureCommand {
            operation: if list { None } else { operation },
            points,
            geokit,
        })
    }
}

impl<'a> Command for MeasureCommand<'a> {
    fn output(&self) -> GeoResult<String> {
        match &self.operation {
            Some(name) => Ok(self.geokit.run(name, &self.points)?.to_string()),
            None => {
                let registry = self.geokit.registry();
                let lines: Vec<String> = registry
                    .names()
                    .into_iter()
                    .map(|name| match registry.get(name) {
                        Ok(op) => format!("{:<20} {}", name, op.arity()),
                        Err(_) => name.to_string(),
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }
}
