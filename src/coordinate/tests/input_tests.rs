//! Tests for point normalization

use crate::coordinate::{
    get_elev, get_lat, get_lon, latitude, longitude, normalize, use_decimal, Angle, DecimalInput,
    DecimalValue, ElevationKey, KeyedPoint, LatitudeKey, LongitudeKey, PointInput, ToGeoPoint,
};
use crate::errors::GeoError;

#[test]
fn test_all_key_combinations_normalize() {
    for lat_key in LatitudeKey::ALL {
        for lng_key in LongitudeKey::ALL {
            let input = PointInput::from(KeyedPoint::new(lat_key, 37.774929, lng_key, -122.419416));
            let point = normalize(&input).unwrap();
            assert_eq!(point.latitude, 37.774929);
            assert_eq!(point.longitude, -122.419416);
            assert!(point.elevation.is_none());
        }
    }
}

#[test]
fn test_elevation_keys() {
    for key in ElevationKey::ALL {
        let input = PointInput::from(
            KeyedPoint::new(LatitudeKey::Latitude, 1.0, LongitudeKey::Lon, 2.0).with_elevation(key, 16.0),
        );
        assert_eq!(get_elev(&input).unwrap(), Some(16.0));
    }
}

#[test]
fn test_geojson_order() {
    let point = normalize(&PointInput::coords_3d(-74.005941, 40.712784, 10.0)).unwrap();
    assert_eq!(point.latitude, 40.712784);
    assert_eq!(point.longitude, -74.005941);
    assert_eq!(point.elevation, Some(10.0));

    assert_eq!(latitude(&[13.4, 52.5]).unwrap(), 52.5);
    assert_eq!(longitude(&[13.4, 52.5]).unwrap(), 13.4);
}

#[test]
fn test_wrong_coordinate_count_is_invalid() {
    let input = PointInput::Coordinates(vec![Angle::Decimal(1.0)]);
    assert!(matches!(normalize(&input), Err(GeoError::InvalidPoint(_))));

    let input = PointInput::Coordinates(vec![Angle::Decimal(1.0); 4]);
    assert!(matches!(normalize(&input), Err(GeoError::InvalidPoint(_))));
}

#[test]
fn test_out_of_range_is_invalid() {
    assert!(matches!(normalize(&PointInput::lat_lng(91.0, 0.0)), Err(GeoError::InvalidPoint(_))));
    assert!(matches!(normalize(&PointInput::coords(180.5, 0.0)), Err(GeoError::InvalidPoint(_))));
    assert!(normalize(&PointInput::lat_lng(-90.0, 180.0)).is_ok());
}

#[test]
fn test_sexagesimal_angles() {
    let input = PointInput::lat_lng("51° 31' 10.11\" N", "7° 28' 0\" W");
    let point = normalize(&input).unwrap();
    assert!((point.latitude - 51.519475).abs() < 1e-8);
    assert!((point.longitude + 7.46666667).abs() < 1e-8);
}

#[test]
fn test_raw_and_decimal_extraction() {
    let input = PointInput::lat_lng("51° 31' 10.11\" N", 7.0);

    assert_eq!(get_lat(&input, true).unwrap(), Angle::Sexagesimal("51° 31' 10.11\" N".to_string()));
    match get_lat(&input, false).unwrap() {
        Angle::Decimal(value) => assert!((value - 51.519475).abs() < 1e-8),
        other => panic!("expected decimal, got {:?}", other),
    }
    assert_eq!(get_lon(&input, true).unwrap(), Angle::Decimal(7.0));
}

#[test]
fn test_parse_text_forms() {
    let pair: PointInput = "-122.419416,37.774929".parse().unwrap();
    assert_eq!(pair, PointInput::coords(-122.419416, 37.774929));

    let record: PointInput = "lon=-118.244375, latitude=34.045771, alt=89, time=1000".parse().unwrap();
    let point = record.to_geo_point().unwrap();
    assert_eq!(point.latitude, 34.045771);
    assert_eq!(point.longitude, -118.244375);
    assert_eq!(point.elevation, Some(89.0));
    assert_eq!(record.timestamp(), Some(1000));

    let missing: Result<PointInput, _> = "lat=1,height=3".parse();
    assert!(matches!(missing, Err(GeoError::InvalidPoint(_))));
}

#[test]
fn test_use_decimal() {
    assert_eq!(use_decimal(&DecimalInput::Number(3.5)).unwrap(), DecimalValue::Number(3.5));
    assert_eq!(
        use_decimal(&DecimalInput::Text("12.25".to_string())).unwrap(),
        DecimalValue::Number(12.25)
    );

    let decoded = use_decimal(&DecimalInput::Text("45° 30' 0\" S".to_string())).unwrap();
    assert_eq!(decoded.as_number(), Some(-45.5));

    match use_decimal(&DecimalInput::Points(vec![
        PointInput::coords(1.0, 2.0),
        PointInput::lat_lng("45° 30' 0\"", 3.0),
    ])).unwrap() {
        DecimalValue::Points(points) => {
            assert_eq!(points.len(), 2);
            assert_eq!(points[1].latitude, 45.5);
        }
        other => panic!("expected points, got {:?}", other),
    }

    assert!(use_decimal(&DecimalInput::Text("nowhere".to_string())).is_err());
}
