//! Point containment in a polygon, circle or line

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::coordinate::PointInput;
use crate::errors::{GeoError, GeoResult};
use crate::predicates::{is_point_in_circle, is_point_in_line, is_point_inside};
use crate::utils::parse_utils::{parse_number, parse_point, parse_points, required_arg};

/// Shape a point is tested against
enum Shape {
    Polygon(Vec<PointInput>),
    Circle { center: PointInput, radius: f64 },
    Line { start: PointInput, end: PointInput },
}

/// Command printing whether a point lies in a shape
pub struct InsideCommand {
    point: PointInput,
    shape: Shape,
}

impl InsideCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let point = parse_point(required_arg(args, "point")?)?;

        let shape = if let Some(polygon) = args.get_one::<String>("polygon") {
            Shape::Polygon(parse_points(polygon)?)
        } else if let Some(center) = args.get_one::<String>("center") {
            Shape::Circle {
                center: parse_point(center)?,
                radius: parse_number(required_arg(args, "radius")?, "radius")?,
            }
        } else if let Some(line) = args.get_one::<String>("line") {
            match parse_points(line)?.as_slice() {
                [start, end] => Shape::Line { start: start.clone(), end: end.clone() },
                other => {
                    return Err(GeoError::InvalidArguments(format!(
                        "A line needs 2 points, got {}", other.len()
                    )))
                }
            }
        } else {
            return Err(GeoError::InvalidArguments(
                "Missing shape. Use --polygon, --center with --radius, or --line".to_string(),
            ));
        };

        Ok(InsideCommand { point, shape })
    }
}

impl Command for InsideCommand {
    fn output(&self) -> GeoResult<String> {
        let inside = match &self.shape {
            Shape::Polygon(vertices) => is_point_inside(&self.point, vertices)?,
            Shape::Circle { center, radius } => is_point_in_circle(&self.point, center, *radius)?,
            Shape::Line { start, end } => is_point_in_line(&self.point, start, end)?,
        };
        Ok(inside.to_string())
    }
}
