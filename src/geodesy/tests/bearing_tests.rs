//! Tests for bearings and compass directions

use crate::coordinate::PointInput;
use crate::geodesy::{
    get_bearing, get_compass_direction, get_rhumb_line_bearing, BearingMode, Direction, ExactDirection,
    RoughDirection,
};

#[test]
fn test_cardinal_bearings() {
    let origin = [0.0, 0.0];
    assert!((get_bearing(&origin, &[0.0, 1.0]).unwrap() - 0.0).abs() < 1e-9);
    assert!((get_bearing(&origin, &[1.0, 0.0]).unwrap() - 90.0).abs() < 1e-9);
    assert!((get_bearing(&origin, &[0.0, -1.0]).unwrap() - 180.0).abs() < 1e-9);
    assert!((get_bearing(&origin, &[-1.0, 0.0]).unwrap() - 270.0).abs() < 1e-9);
}

#[test]
fn test_bearing_range() {
    let points = [
        PointInput::lat_lng(52.516272, 13.377722),
        PointInput::lat_lng(51.515, 7.453619),
        PointInput::lat_lng(-33.8688, 151.2093),
        PointInput::lat_lng(40.712784, -74.005941),
    ];
    for a in &points {
        for b in &points {
            if a == b {
                continue;
            }
            let great = get_bearing(a, b).unwrap();
            let rhumb = get_rhumb_line_bearing(a, b).unwrap();
            assert!((0.0..360.0).contains(&great));
            assert!((0.0..360.0).contains(&rhumb));
        }
    }
}

#[test]
fn test_rhumb_differs_from_great_circle() {
    let berlin = PointInput::lat_lng(52.516272, 13.377722);
    let new_york = PointInput::lat_lng(40.712784, -74.005941);

    let great = get_bearing(&berlin, &new_york).unwrap();
    let rhumb = get_rhumb_line_bearing(&berlin, &new_york).unwrap();

    // the great circle heads off north of west, the rhumb line south of west
    assert!(great > 270.0 && great < 330.0, "great circle {}", great);
    assert!(rhumb > 250.0 && rhumb < 270.0, "rhumb line {}", rhumb);
}

#[test]
fn test_rhumb_across_antimeridian() {
    let a = [179.0, 0.0];
    let b = [-179.0, 0.0];
    assert!((get_rhumb_line_bearing(&a, &b).unwrap() - 90.0).abs() < 1e-9);
}

#[test]
fn test_direction_sectors() {
    let north = Direction::from_bearing(0.0);
    assert_eq!(north.rough, RoughDirection::N);
    assert_eq!(north.exact, ExactDirection::N);

    let east = Direction::from_bearing(90.0);
    assert_eq!(east.rough, RoughDirection::E);
    assert_eq!(east.exact, ExactDirection::E);

    assert_eq!(Direction::from_bearing(45.0).exact, ExactDirection::NE);
    assert_eq!(Direction::from_bearing(359.0).exact, ExactDirection::N);
    assert_eq!(Direction::from_bearing(200.0).exact, ExactDirection::SSW);
    assert_eq!(Direction::from_bearing(-90.0).exact, ExactDirection::W);
    assert_eq!(Direction::from_bearing(135.0).rough, RoughDirection::E);
}

#[test]
fn test_compass_direction_modes() {
    let origin = PointInput::lat_lng(0.0, 0.0);
    let east = PointInput::lat_lng(0.0, 1.0);

    let great = get_compass_direction(&origin, &east, BearingMode::GreatCircle).unwrap();
    let rhumb = get_compass_direction(&origin, &east, BearingMode::RhumbLine).unwrap();

    assert_eq!(great.exact, ExactDirection::E);
    assert_eq!(rhumb.exact, ExactDirection::E);
    assert_eq!("rhumb".parse::<BearingMode>().unwrap(), BearingMode::RhumbLine);
    assert_eq!(BearingMode::default(), BearingMode::GreatCircle);
}
