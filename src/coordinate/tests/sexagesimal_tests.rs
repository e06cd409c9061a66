//! Tests for sexagesimal conversion

use crate::coordinate::{decimal_to_sexagesimal, is_sexagesimal, sexagesimal_to_decimal};
use crate::errors::GeoError;

#[test]
fn test_decimal_to_sexagesimal() {
    assert_eq!(decimal_to_sexagesimal(51.519475), "51° 31' 10.11\"");
    assert_eq!(decimal_to_sexagesimal(45.5), "45° 30' 0.00\"");
    assert_eq!(decimal_to_sexagesimal(-122.4194), "-122° 25' 9.84\"");
    assert_eq!(decimal_to_sexagesimal(0.0), "0° 0' 0.00\"");
}

#[test]
fn test_sexagesimal_to_decimal_with_hemisphere() {
    let north = sexagesimal_to_decimal("51° 31' 10.11\" N").unwrap();
    assert!((north - 51.519475).abs() < 1e-8);

    let west = sexagesimal_to_decimal("7° 28' 0\" W").unwrap();
    assert!((west + 7.46666667).abs() < 1e-8);

    let south = sexagesimal_to_decimal("45° 30' S").unwrap();
    assert_eq!(south, -45.5);
}

#[test]
fn test_round_trip() {
    for decimal in [0.0, 45.5, -122.4194] {
        let text = decimal_to_sexagesimal(decimal);
        let back = sexagesimal_to_decimal(&text).unwrap();
        assert!((back - decimal).abs() < 1e-4, "{} -> {} -> {}", decimal, text, back);
    }
}

#[test]
fn test_invalid_sexagesimal() {
    assert!(!is_sexagesimal("north of here"));
    assert!(is_sexagesimal("  12° 3' 4.5\" E "));
    match sexagesimal_to_decimal("north of here") {
        Err(GeoError::InvalidSexagesimal(s)) => assert_eq!(s, "north of here"),
        other => panic!("expected InvalidSexagesimal, got {:?}", other),
    }
}
