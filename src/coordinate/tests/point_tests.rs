//! Tests for the geographic point type

use crate::coordinate::GeoPoint;
use crate::guide::errors::GuideError;

#[test]
fn test_from_string() {
    let point = GeoPoint::from_string(" 52.52, 13.405 ").unwrap();
    assert_eq!(point, GeoPoint::new(52.52, 13.405));
}

#[test]
fn test_from_string_rejects_bad_input() {
    assert!(matches!(GeoPoint::from_string("52.52"), Err(GuideError::InvalidCoordinate(_))));
    assert!(matches!(GeoPoint::from_string("north,13.4"), Err(GuideError::InvalidCoordinate(_))));
    assert!(matches!(GeoPoint::from_string("91.0,0.0"), Err(GuideError::InvalidCoordinate(_))));
    assert!(matches!(GeoPoint::from_string("0.0,-180.5"), Err(GuideError::InvalidCoordinate(_))));
}

#[test]
fn test_validity_bounds() {
    assert!(GeoPoint::new(-90.0, -180.0).is_valid());
    assert!(GeoPoint::new(90.0, 180.0).is_valid());
    assert!(!GeoPoint::new(90.01, 0.0).is_valid());
    assert!(!GeoPoint::new(0.0, 180.01).is_valid());
}

#[test]
fn test_normalized_wraps_longitude() {
    assert_eq!(GeoPoint::new(10.0, 190.0).normalized().longitude, -170.0);
    assert_eq!(GeoPoint::new(10.0, -190.0).normalized().longitude, 170.0);
    assert_eq!(GeoPoint::new(10.0, 180.0).normalized().longitude, 180.0);
    assert_eq!(GeoPoint::new(10.0, -180.0).normalized().longitude, -180.0);
    assert_eq!(GeoPoint::new(10.0, 45.0).normalized(), GeoPoint::new(10.0, 45.0));
}

#[test]
fn test_normalized_clamps_latitude() {
    assert_eq!(GeoPoint::new(90.5, 0.0).normalized().latitude, 90.0);
    assert_eq!(GeoPoint::new(-91.0, 0.0).normalized().latitude, -90.0);
}
