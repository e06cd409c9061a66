//! Nearest points to a reference point

use clap::ArgMatches;

use crate::api::GeoKit;
use crate::commands::command_traits::Command;
use crate::coordinate::PointInput;
use crate::errors::GeoResult;
use crate::utils::parse_utils::{parse_point, parse_points, required_arg};

/// Command listing candidate points ordered by distance
pub struct NearestCommand<'a> {
    point: PointInput,
    candidates: Vec<PointInput>,
    offset: usize,
    limit: usize,
    geokit: &'a GeoKit,
}

impl<'a> NearestCommand<'a> {
    pub fn new(args: &ArgMatches, geokit: &'a GeoKit) -> GeoResult<Self> {
        Ok(NearestCommand {
            point: parse_point(required_arg(args, "point")?)?,
            candidates: parse_points(required_arg(args, "points")?)?,
            offset: args.get_one::<usize>("offset").copied().unwrap_or(0),
            limit: args.get_one::<usize>("limit").copied().unwrap_or(1),
            geokit,
        })
    }
}

impl<'a> Command for NearestCommand<'a> {
    fn output(&self) -> GeoResult<String> {
        let ranked = self.geokit.nearest(&self.point, &self.candidates, self.offset, self.limit)?;

        // one "index distance" line per match
        let lines: Vec<String> = ranked
            .iter()
            .map(|element| format!("{} {}", element.key, element.distance))
            .collect();
        Ok(lines.join("\n"))
    }
}
