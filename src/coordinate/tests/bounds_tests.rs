//! Tests for bounds and centers

use crate::coordinate::{
    get_bounds, get_bounds_of_distance, get_center, get_center_of_bounds, GeoPoint, PointInput,
};
use crate::errors::GeoError;

fn sample_points() -> Vec<PointInput> {
    vec![
        PointInput::lat_lng(52.516272, 13.377722),
        PointInput::lat_lng(51.515, 7.453619),
        PointInput::coords_3d(4.897070, 52.377956, 12.0),
        PointInput::lat_lng(51.503333, -0.119722),
    ]
}

#[test]
fn test_bounds_enclose_every_point() {
    let points = sample_points();
    let bounds = get_bounds(&points).unwrap();

    assert_eq!(bounds.min_lat, 51.503333);
    assert_eq!(bounds.max_lat, 52.516272);
    assert_eq!(bounds.min_lng, -0.119722);
    assert_eq!(bounds.max_lng, 13.377722);
    assert_eq!(bounds.min_elev, Some(12.0));
    assert_eq!(bounds.max_elev, Some(12.0));

    for point in &points {
        let p = crate::coordinate::normalize(point).unwrap();
        assert!(bounds.contains(&p));
    }
}

#[test]
fn test_bounds_without_elevation() {
    let bounds = get_bounds(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert!(bounds.min_elev.is_none());
    assert!(bounds.max_elev.is_none());
}

#[test]
fn test_zero_elevation_is_not_missing() {
    let bounds = get_bounds(&[[1.0, 2.0, 0.0], [3.0, 4.0, 5.0]]).unwrap();
    assert_eq!(bounds.min_elev, Some(0.0));
    assert_eq!(bounds.max_elev, Some(5.0));
}

#[test]
fn test_empty_collection() {
    let empty: Vec<PointInput> = Vec::new();
    assert!(matches!(get_bounds(&empty), Err(GeoError::EmptyPointSet)));
    assert!(matches!(get_center(&empty), Err(GeoError::EmptyPointSet)));
}

#[test]
fn test_center_and_center_of_bounds() {
    let points = [[0.0, 0.0], [0.0, 1.0], [0.0, 2.0], [0.0, 10.0]];

    let center = get_center(&points).unwrap();
    assert!((center.latitude - 3.25).abs() < 1e-12);
    assert_eq!(center.longitude, 0.0);

    let center_of_bounds = get_center_of_bounds(&points).unwrap();
    assert!((center_of_bounds.latitude - 5.0).abs() < 1e-12);
}

#[test]
fn test_bounds_of_distance() {
    let center = GeoPoint::new(34.0, -118.0).unwrap();
    let [sw, ne] = get_bounds_of_distance(&center, 1000.0).unwrap();

    assert!(sw.latitude < 34.0 && ne.latitude > 34.0);
    assert!(sw.longitude < -118.0 && ne.longitude > -118.0);

    // 1000 m on a 6378137 m sphere is about 0.00898 degrees of latitude
    assert!((ne.latitude - 34.0 - 0.008983).abs() < 1e-5);
    assert!((34.0 - sw.latitude - 0.008983).abs() < 1e-5);
}

#[test]
fn test_bounds_of_distance_over_pole() {
    let center = GeoPoint::new(89.99, 10.0).unwrap();
    let [sw, ne] = get_bounds_of_distance(&center, 10_000.0).unwrap();

    assert_eq!(sw.longitude, -180.0);
    assert_eq!(ne.longitude, 180.0);
    assert!((ne.latitude - 90.0).abs() < 1e-9);
}

#[test]
fn test_bounds_of_distance_across_antimeridian() {
    let center = GeoPoint::new(0.0, 179.999).unwrap();
    let [sw, ne] = get_bounds_of_distance(&center, 10_000.0).unwrap();

    assert!(sw.longitude > 179.0);
    assert!(ne.longitude < -179.0);
}
