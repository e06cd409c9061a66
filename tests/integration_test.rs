//! Integration tests for the geokit library

use clap::{Arg, ArgAction, Command as ClapCommand};

use geokit::commands::{Command, CommandFactory, GeokitCommandFactory};
use geokit::{
    compute_destination_point, find_nearest, get_bounds, get_bounds_of_distance, get_center, get_distance,
    get_path_length, is_point_in_circle, is_point_inside, order_by_distance, DistanceUnit, GeoError, GeoKit,
    GeoKitConfig, KeyedPoint, OperationOutput, PointInput, SpeedUnit,
};
use geokit::coordinate::{ElevationKey, LatitudeKey, LongitudeKey};

fn city(lat: f64, lng: f64) -> PointInput {
    KeyedPoint::new(LatitudeKey::Latitude, lat, LongitudeKey::Longitude, lng).into()
}

#[test]
fn test_route_workflow() {
    let berlin = city(52.518611, 13.408056);
    let potsdam = city(52.390569, 13.064473);
    let brandenburg = city(52.408056, 12.5625);

    let legs = get_distance(&berlin, &potsdam, 1.0, 0).unwrap()
        + get_distance(&potsdam, &brandenburg, 1.0, 0).unwrap();
    let route = get_path_length(&[berlin.clone(), potsdam.clone(), brandenburg.clone()]).unwrap();
    assert_eq!(route, legs);

    let direct = get_distance(&berlin, &brandenburg, 1.0, 0).unwrap();
    assert!(direct <= route);

    let bounds = get_bounds(&[berlin.clone(), potsdam.clone(), brandenburg.clone()]).unwrap();
    let center = get_center(&[berlin, potsdam, brandenburg]).unwrap();
    assert!(bounds.contains(&center));
}

#[test]
fn test_destination_stays_in_its_bounds() {
    let start = PointInput::coords(7.4653, 51.5137);
    let [south_west, north_east] = get_bounds_of_distance(&start, 1000.0).unwrap();

    for bearing in [0.0, 45.0, 90.0, 180.0, 270.0] {
        let dest = compute_destination_point(&start, 990.0, bearing, None).unwrap();
        assert!(dest.latitude >= south_west.latitude && dest.latitude <= north_east.latitude);
        assert!(dest.longitude >= south_west.longitude && dest.longitude <= north_east.longitude);
        assert!(is_point_in_circle(&dest, &start, 1000.0).unwrap());
    }
}

#[test]
fn test_nearest_city() {
    let san_francisco: PointInput = KeyedPoint::new(LatitudeKey::Lat, 37.774929, LongitudeKey::Lng, -122.419416)
        .with_elevation(ElevationKey::Elevation, 16.0)
        .into();
    let cities = vec![
        PointInput::coords(-74.005941, 40.712784),
        KeyedPoint::new(LatitudeKey::Latitude, 34.045771, LongitudeKey::Lon, -118.244375).into(),
    ];

    assert_eq!(find_nearest(&san_francisco, &cities, 0).unwrap().unwrap().key, "1");
    assert_eq!(order_by_distance(&san_francisco, &cities).unwrap()[0].key, "1");
}

#[test]
fn test_text_points() {
    let square: Vec<PointInput> = ["0,0", "0,1", "1,1", "1,0"].iter().map(|s| s.parse().unwrap()).collect();
    let inside: PointInput = "lat=0.5,lng=0.5".parse().unwrap();
    let outside: PointInput = "2,2".parse().unwrap();

    assert!(is_point_inside(&inside, &square).unwrap());
    assert!(!is_point_inside(&outside, &square).unwrap());

    let bad: PointInput = "lat=95,lng=0".parse().unwrap();
    assert!(matches!(get_distance(&bad, &inside, 1.0, 0), Err(GeoError::InvalidPoint(_))));
}

#[test]
fn test_facade_uses_configuration() {
    let config = GeoKitConfig::from_str(
        "[distance]\nunit = \"km\"\n[speed]\nunit = \"ms\"\n[earth]\nradius = 6371000\n",
    )
    .unwrap();
    assert_eq!(config.unit, DistanceUnit::Kilometers);
    assert_eq!(config.speed_unit, SpeedUnit::MetersPerSecond);

    let geokit = GeoKit::new(config);
    let a = PointInput::coords(0.0, 0.0);
    let b = PointInput::coords(1.0, 0.0);

    assert_eq!(geokit.distance(&a, &b).unwrap(), 111.319);

    let north = geokit.destination(&a, 6371000.0 * std::f64::consts::PI / 180.0, 0.0).unwrap();
    assert!((north.latitude - 1.0).abs() < 1e-9);

    assert_eq!(geokit.run("distance", &[a, b]).unwrap(), OperationOutput::Number(111319.0));
}

fn test_cli() -> ClapCommand {
    ClapCommand::new("geokit")
        .subcommand(
            ClapCommand::new("distance")
                .arg(Arg::new("from").required(true).allow_hyphen_values(true))
                .arg(Arg::new("to").required(true).allow_hyphen_values(true))
                .arg(Arg::new("simple").long("simple").action(ArgAction::SetTrue)),
        )
        .subcommand(
            ClapCommand::new("measure")
                .arg(Arg::new("operation"))
                .arg(Arg::new("points").allow_hyphen_values(true))
                .arg(Arg::new("list").long("list").action(ArgAction::SetTrue)),
        )
}

fn run_cli(geokit: &GeoKit, args: &[&str]) -> Result<String, GeoError> {
    let matches = test_cli().get_matches_from(args);
    let command: Box<dyn Command + '_> = GeokitCommandFactory::new().create_command(&matches, geokit)?;
    command.output()
}

#[test]
fn test_commands() {
    let geokit = GeoKit::default();

    assert_eq!(run_cli(&geokit, &["geokit", "distance", "0,0", "1,0"]).unwrap(), "111319 m");
    assert_eq!(
        run_cli(&geokit, &["geokit", "measure", "longitude", "-122.419416,37.774929"]).unwrap(),
        "-122.419416"
    );
    assert!(run_cli(&geokit, &["geokit", "measure", "--list"]).unwrap().contains("path-length"));
    assert!(matches!(
        run_cli(&geokit, &["geokit", "measure", "area", "0,0"]),
        Err(GeoError::UnknownOperation(_))
    ));
}
