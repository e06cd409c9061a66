use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use geokit::api::GeoKit;
use geokit::commands::{CommandFactory, GeokitCommandFactory};
use geokit::constants::VERSION;
use geokit::utils::logger::init_logger;

/// Positional argument holding point text; leading '-' is a negative longitude, not a flag
fn point_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .value_name("POINT")
        .required(true)
        .allow_hyphen_values(true)
}

/// Option holding one or more `;`-separated points
fn points_option(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("POINTS")
        .allow_hyphen_values(true)
}

fn build_cli() -> ClapCommand {
    ClapCommand::new("geokit")
        .version(VERSION)
        .about("Geodesic calculations on WGS-84 coordinates")
        .after_help(
            "Points are written as 'lng,lat[,elev]' or 'lat=..,lng=..[,elevation=..]'.\n\
             Point lists are separated by ';'.",
        )
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file with default accuracy, units and radius")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of stderr")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Distance between two points")
                .arg(point_arg("from", "Start point"))
                .arg(point_arg("to", "End point"))
                .arg(
                    Arg::new("simple")
                        .long("simple")
                        .help("Use the faster spherical formula")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("bearing")
                .about("Initial bearing and compass direction between two points")
                .arg(point_arg("from", "Start point"))
                .arg(point_arg("to", "End point"))
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .help("Bearing type (circle or rhumb)")
                        .value_name("MODE")
                        .default_value("circle"),
                ),
        )
        .subcommand(
            ClapCommand::new("destination")
                .about("Point reached from a start point")
                .arg(point_arg("start", "Start point"))
                .arg(
                    Arg::new("distance")
                        .short('d')
                        .long("distance")
                        .help("Distance in meters")
                        .value_name("METERS")
                        .required(true),
                )
                .arg(
                    Arg::new("bearing")
                        .short('b')
                        .long("bearing")
                        .help("Bearing in degrees clockwise from north")
                        .value_name("DEGREES")
                        .allow_hyphen_values(true)
                        .required(true),
                ),
        )
        .subcommand(
            ClapCommand::new("convert")
                .about("Convert meters to another unit, or an angle between decimal and sexagesimal")
                .arg(
                    Arg::new("value")
                        .help("Distance in meters, or an angle")
                        .value_name("VALUE")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("unit")
                        .short('u')
                        .long("unit")
                        .help("Target unit (m, km, cm, mm, mi, sm, ft, in, yd)")
                        .value_name("UNIT"),
                )
                .arg(
                    Arg::new("round")
                        .long("round")
                        .help("Decimal places to keep")
                        .value_name("N")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            ClapCommand::new("nearest")
                .about("Candidate points ordered by distance")
                .arg(point_arg("point", "Reference point"))
                .arg(points_option("points", "Candidate points").required(true))
                .arg(
                    Arg::new("offset")
                        .long("offset")
                        .help("Skip this many of the nearest points")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .default_value("0"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .help("Number of points to print")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .default_value("1"),
                ),
        )
        .subcommand(
            ClapCommand::new("inside")
                .about("Check whether a point lies in a polygon, circle or line")
                .arg(point_arg("point", "Point to test"))
                .arg(points_option("polygon", "Polygon vertices"))
                .arg(points_option("center", "Circle center"))
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .help("Circle radius in meters")
                        .value_name("METERS"),
                )
                .arg(points_option("line", "Line start and end")),
        )
        .subcommand(
            ClapCommand::new("bounds")
                .about("Bounds and center of points, or the box around one point")
                .arg(
                    Arg::new("points")
                        .help("Points")
                        .value_name("POINTS")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("distance")
                        .short('d')
                        .long("distance")
                        .help("Radius in meters around a single point")
                        .value_name("METERS"),
                ),
        )
        .subcommand(
            ClapCommand::new("measure")
                .about("Run a registered operation by name")
                .arg(Arg::new("operation").help("Operation name").value_name("NAME"))
                .arg(
                    Arg::new("points")
                        .help("Arguments of the operation")
                        .value_name("POINTS")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("list")
                        .short('l')
                        .long("list")
                        .help("List the available operations")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let log_file = matches.get_one::<String>("log-file").map(String::as_str);
    if let Err(e) = init_logger(verbose, log_file) {
        eprintln!("Error initializing logger: {}", e);
        process::exit(1);
    }

    let config_path = matches.get_one::<String>("config").map(String::as_str);
    let geokit = match GeoKit::from_config_file(config_path) {
        Ok(geokit) => geokit,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = GeokitCommandFactory::new();

    match factory.create_command(&matches, &geokit) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
