//! Tests for configuration parsing

use std::time::Duration;

use crate::config::GuideConfig;
use crate::coordinate::GeoPoint;
use crate::guide::errors::GuideError;
use crate::guide::state::LineColor;

#[test]
fn test_empty_config_uses_defaults() {
    let config = GuideConfig::from_str("").unwrap();

    assert_eq!(config, GuideConfig::default());
    assert_eq!(config.guide_line.heading, 0.0);
    assert_eq!(config.guide_line.length, 500.0);
    assert_eq!(config.guide_line.color, LineColor::new(0x00, 0xBC, 0xD4));
    assert!(config.guide_line.follow_mode);
    assert_eq!(config.map.zoom, 16.0);
    assert_eq!(config.poll.interval, Duration::from_millis(500));
    assert_eq!(config.poll.max_attempts, 10);
}

#[test]
fn test_full_config() {
    let content = r#"
        [guide_line]
        heading = 450.0
        length = 1200
        color = "Deep Orange"
        follow_location = false
        stroke_width = 4

        [guide_line.length_limits]
        min = 100.0
        max = 2000.0

        [map]
        zoom = 14
        initial_latitude = 51.5074
        initial_longitude = -0.1278

        [location]
        poll_interval_ms = 250
        max_poll_attempts = 4
    "#;

    let config = GuideConfig::from_str(content).unwrap();

    assert_eq!(config.guide_line.heading, 90.0);
    assert_eq!(config.guide_line.length, 1200.0);
    assert_eq!(config.guide_line.color, LineColor::new(0xFF, 0x57, 0x22));
    assert!(!config.guide_line.follow_mode);
    assert_eq!(config.guide_line.stroke_width, 4.0);
    assert_eq!(config.length_limits.min(), 100.0);
    assert_eq!(config.length_limits.max(), 2000.0);
    assert_eq!(config.map.zoom, 14.0);
    assert_eq!(config.map.initial_center, GeoPoint::new(51.5074, -0.1278));
    assert_eq!(config.poll.interval, Duration::from_millis(250));
    assert_eq!(config.poll.max_attempts, 4);
    assert_eq!(config.poll.budget(), Duration::from_secs(1));
}

#[test]
fn test_length_is_clamped_into_limits() {
    let config = GuideConfig::from_str("[guide_line]\nlength = 9000.0\n").unwrap();
    assert_eq!(config.guide_line.length, 5000.0);

    let config = GuideConfig::from_str("[guide_line.length_limits]\nmin = 800.0\n").unwrap();
    assert_eq!(config.guide_line.length, 800.0);
}

#[test]
fn test_hex_color() {
    let config = GuideConfig::from_str("[guide_line]\ncolor = \"#123456\"\n").unwrap();
    assert_eq!(config.guide_line.color, LineColor::new(0x12, 0x34, 0x56));
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(GuideConfig::from_str("[guide_line\n"), Err(GuideError::ConfigError(_))));
    assert!(matches!(GuideConfig::from_str("[guide_line]\nlength = -5.0\n"), Err(GuideError::InvalidLength(_))));
    assert!(matches!(GuideConfig::from_str("[guide_line]\nheading = \"north\"\n"), Err(GuideError::ConfigError(_))));
    assert!(matches!(GuideConfig::from_str("[guide_line]\ncolor = \"mauve\"\n"), Err(GuideError::UnknownColor(_))));
    assert!(matches!(GuideConfig::from_str("[guide_line]\nfollow_location = 1\n"), Err(GuideError::ConfigError(_))));
    assert!(matches!(
        GuideConfig::from_str("[guide_line.length_limits]\nmin = 300.0\nmax = 200.0\n"),
        Err(GuideError::InvalidLengthLimits(_, _))
    ));
    assert!(matches!(GuideConfig::from_str("[map]\ninitial_latitude = 95.0\n"), Err(GuideError::InvalidCoordinate(_))));
    assert!(matches!(GuideConfig::from_str("[location]\npoll_interval_ms = 0\n"), Err(GuideError::ConfigError(_))));
    assert!(matches!(GuideConfig::from_str("[location]\nmax_poll_attempts = 2.5\n"), Err(GuideError::ConfigError(_))));
}

#[test]
fn test_non_finite_numbers_are_rejected() {
    for value in ["nan", "inf", "-inf"] {
        let heading = format!("[guide_line]\nheading = {}\n", value);
        assert!(matches!(GuideConfig::from_str(&heading), Err(GuideError::InvalidHeading(_))), "heading = {}", value);

        let width = format!("[guide_line]\nstroke_width = {}\n", value);
        assert!(matches!(GuideConfig::from_str(&width), Err(GuideError::ConfigError(_))), "stroke_width = {}", value);

        let zoom = format!("[map]\nzoom = {}\n", value);
        assert!(matches!(GuideConfig::from_str(&zoom), Err(GuideError::ConfigError(_))), "zoom = {}", value);

        let limits = format!("[guide_line.length_limits]\nmax = {}\n", value);
        assert!(matches!(GuideConfig::from_str(&limits), Err(GuideError::InvalidLengthLimits(_, _))), "max = {}", value);
    }
}

#[test]
fn test_missing_file() {
    let result = GuideConfig::from_file("/nonexistent/mapline.toml");
    assert!(matches!(result, Err(GuideError::IoError(_))));
}
