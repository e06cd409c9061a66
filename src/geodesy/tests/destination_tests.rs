//! Tests for destination points

use crate::coordinate::{GeoPoint, PointInput};
use crate::errors::GeoError;
use crate::geodesy::{compute_destination_point, get_bearing, get_distance, get_distance_simple};

#[test]
fn test_one_degree_north() {
    let origin = GeoPoint::new(0.0, 0.0).unwrap();
    let dest = compute_destination_point(&origin, 111320.0, 0.0, None).unwrap();

    assert!((dest.latitude - 1.0).abs() < 1e-3, "got {}", dest.latitude);
    assert!(dest.longitude.abs() < 1e-9);

    // same sphere: the distance comes back exactly
    assert_eq!(get_distance_simple(&origin, &dest, 1.0).unwrap(), 111320.0);

    // the ellipsoid is flatter at the equator, so it differs a little
    let ellipsoidal = get_distance(&origin, &dest, 1.0, 0).unwrap();
    assert!((ellipsoidal - 111320.0).abs() / 111320.0 < 0.01, "got {}", ellipsoidal);
}

#[test]
fn test_destination_bearing_round_trip() {
    let start = PointInput::lat_lng(52.518611, 13.408056);
    let dest = compute_destination_point(&start, 15000.0, 180.0, None).unwrap();

    assert!(dest.latitude < 52.518611);
    assert!((dest.longitude - 13.408056).abs() < 1e-9);
    assert!((get_bearing(&start, &dest).unwrap() - 180.0).abs() < 1e-6);
}

#[test]
fn test_longitude_wraps_into_range() {
    let start = GeoPoint::new(0.0, 179.5).unwrap();
    let dest = compute_destination_point(&start, 111320.0, 90.0, None).unwrap();

    assert!(dest.longitude > -180.0 && dest.longitude <= 180.0);
    assert!(dest.longitude < -179.0, "got {}", dest.longitude);
}

#[test]
fn test_custom_radius() {
    let origin = GeoPoint::new(0.0, 0.0).unwrap();
    let unit_sphere = compute_destination_point(&origin, std::f64::consts::FRAC_PI_2, 0.0, Some(1.0)).unwrap();
    assert!((unit_sphere.latitude - 90.0).abs() < 1e-9);
}

#[test]
fn test_rejects_unusable_arguments() {
    let origin = GeoPoint::new(0.0, 0.0).unwrap();

    for (distance, bearing, radius) in [
        (f64::NAN, 0.0, None),
        (f64::INFINITY, 0.0, None),
        (1000.0, f64::NAN, None),
        (1000.0, 0.0, Some(0.0)),
        (1000.0, 0.0, Some(-6371000.0)),
        (1000.0, 0.0, Some(f64::NAN)),
    ] {
        assert!(
            matches!(
                compute_destination_point(&origin, distance, bearing, radius),
                Err(GeoError::InvalidArguments(_))
            ),
            "accepted distance {} bearing {} radius {:?}", distance, bearing, radius
        );
    }
}

#[test]
fn test_negative_distance_goes_backwards() {
    let origin = GeoPoint::new(0.0, 0.0).unwrap();
    let dest = compute_destination_point(&origin, -111320.0, 0.0, None).unwrap();
    assert!((dest.latitude + 1.0).abs() < 1e-3, "got {}", dest.latitude);
}
