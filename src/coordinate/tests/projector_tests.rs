//! Tests for the destination point projection

use approx::assert_abs_diff_eq;

use crate::coordinate::{GeoPoint, GeodesicProjector};

/// Roughly one degree of arc on the mean-radius sphere
const ONE_DEGREE_METERS: f64 = 111195.0;

fn sample_points() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(52.5200, 13.4050),
        GeoPoint::new(-33.8688, 151.2093),
        GeoPoint::new(64.1466, -21.9426),
        GeoPoint::new(-54.8019, -68.3030),
        GeoPoint::new(89.5, 179.9),
    ]
}

#[test]
fn test_zero_distance_returns_start() {
    let projector = GeodesicProjector::new();

    for start in sample_points() {
        for heading in [0.0, 45.0, 90.0, 180.0, 271.5, -30.0, 725.0] {
            let end = projector.destination_point(&start, heading, 0.0);
            assert_abs_diff_eq!(end.latitude, start.latitude, epsilon = 1e-9);
            assert_abs_diff_eq!(end.longitude, start.longitude, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_heading_is_periodic() {
    let projector = GeodesicProjector::new();
    let start = GeoPoint::new(48.8566, 2.3522);

    for heading in [0.0, 12.5, 90.0, 200.0, 359.0] {
        let a = projector.destination_point(&start, heading, 2500.0);
        let b = projector.destination_point(&start, heading + 360.0, 2500.0);
        let c = projector.destination_point(&start, heading - 360.0, 2500.0);
        assert!(a.approx_eq(&b, 1e-9), "{} vs {} at heading {}", a, b, heading);
        assert!(a.approx_eq(&c, 1e-9), "{} vs {} at heading {}", a, c, heading);
    }
}

#[test]
fn test_reverse_heading_round_trip() {
    let projector = GeodesicProjector::new();

    for start in sample_points().into_iter().take(5) {
        for heading in [0.0, 60.0, 135.0, 250.0] {
            for distance in [50.0, 500.0, 5000.0] {
                let out = projector.destination_point(&start, heading, distance);
                let back = projector.destination_point(&out, heading + 180.0, distance);
                assert!(
                    back.approx_eq(&start, 1e-4),
                    "round trip from {} on {} for {} m ended at {}",
                    start, heading, distance, back
                );
            }
        }
    }
}

#[test]
fn test_one_degree_north_from_origin() {
    let projector = GeodesicProjector::new();
    let end = projector.destination_point(&GeoPoint::new(0.0, 0.0), 0.0, ONE_DEGREE_METERS);

    assert_abs_diff_eq!(end.latitude, 1.0, epsilon = 0.01);
    assert_abs_diff_eq!(end.longitude, 0.0, epsilon = 0.01);
}

#[test]
fn test_one_degree_east_from_origin() {
    let projector = GeodesicProjector::new();
    let end = projector.destination_point(&GeoPoint::new(0.0, 0.0), 90.0, ONE_DEGREE_METERS);

    assert_abs_diff_eq!(end.latitude, 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(end.longitude, 1.0, epsilon = 0.01);
}

#[test]
fn test_south_and_west_headings() {
    let projector = GeodesicProjector::new();
    let origin = GeoPoint::new(0.0, 0.0);

    let south = projector.destination_point(&origin, 180.0, ONE_DEGREE_METERS);
    assert_abs_diff_eq!(south.latitude, -1.0, epsilon = 0.01);

    let west = projector.destination_point(&origin, 270.0, ONE_DEGREE_METERS);
    assert_abs_diff_eq!(west.longitude, -1.0, epsilon = 0.01);
}

#[test]
fn test_longitude_is_not_wrapped_across_antimeridian() {
    let projector = GeodesicProjector::new();
    let start = GeoPoint::new(0.0, 179.999);

    let end = projector.destination_point(&start, 90.0, 1000.0);

    assert!(end.longitude > 180.0, "expected raw longitude past 180, got {}", end.longitude);
    let wrapped = end.normalized();
    assert!(wrapped.longitude < -179.0);
    assert!(wrapped.is_valid());
}
