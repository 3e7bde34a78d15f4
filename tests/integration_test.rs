//! Integration tests for the guide line engine

use std::time::Duration;

use approx::assert_abs_diff_eq;
use tokio::task::LocalSet;
use tokio::time::sleep;

use mapline::sim::{RecordingRenderer, ScriptedLocationProvider, StaticPermissions};
use mapline::{FixStatus, GeoPoint, GeodesicProjector, GuideConfig, LineColor, MapScreen};

fn example_config() -> GuideConfig {
    let path = format!("{}/mapline.example.toml", env!("CARGO_MANIFEST_DIR"));
    GuideConfig::from_file(&path).unwrap()
}

#[test]
fn test_example_config_loads() {
    let config = example_config();

    assert_eq!(config.guide_line.heading, 45.0);
    assert_eq!(config.guide_line.length, 750.0);
    assert_eq!(config.guide_line.color, LineColor::from_name("deep_orange").unwrap());
    assert_eq!(config.map.initial_center, GeoPoint::new(47.3769, 8.5417));
    assert_eq!(config.poll.budget(), Duration::from_secs(5));
}

#[test]
fn test_projection_scenarios() {
    let projector = GeodesicProjector::new();
    let origin = GeoPoint::new(0.0, 0.0);

    let north = projector.destination_point(&origin, 0.0, 111_195.0);
    assert_abs_diff_eq!(north.latitude, 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(north.longitude, 0.0, epsilon = 1e-9);

    let east = projector.destination_point(&origin, 90.0, 111_195.0);
    assert_abs_diff_eq!(east.latitude, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(east.longitude, 1.0, epsilon = 1e-4);

    let start = GeoPoint::new(37.7749, -122.4194);
    let same = projector.destination_point(&start, 123.0, 0.0);
    assert!(same.approx_eq(&start, 1e-9));
}

#[tokio::test(start_paused = true)]
async fn test_screen_session() {
    LocalSet::new().run_until(async {
        let config = example_config();
        let location = ScriptedLocationProvider::new(None, 0);
        let renderer = RecordingRenderer::new(GeoPoint::new(0.0, 0.0));
        let mut screen = MapScreen::create(&config, location.clone(), renderer.clone(), StaticPermissions::new(false, true));

        let initial = renderer.snapshot().current_line().copied().unwrap();
        assert_eq!(initial.start, config.map.initial_center);

        assert!(screen.request_permission().await);
        let fix = GeoPoint::new(47.3700, 8.5400);
        location.move_to(Some(fix));
        sleep(Duration::from_millis(100)).await;
        assert_eq!(screen.fix_status(), FixStatus::Tracking);

        let segment = screen.set_heading(90.0).unwrap();
        assert_eq!(segment.start, fix);
        assert_abs_diff_eq!(segment.end.latitude, fix.latitude, epsilon = 1e-4);
        assert!(segment.end.longitude > fix.longitude);

        let segment = screen.set_length(10_000.0).unwrap();
        let expected = GeodesicProjector::new().destination_point(&fix, 90.0, 5000.0);
        assert!(segment.end.approx_eq(&expected, 1e-9));

        drop(screen);
        let log = renderer.snapshot();
        assert!(log.overlays.is_empty());
        assert!(log.paused);
        assert!(!location.is_enabled());
    }).await;
}
