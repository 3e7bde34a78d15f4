//! Tests for argument handling of the CLI commands

use approx::assert_abs_diff_eq;
use clap::ArgMatches;

use crate::commands::cli::build_cli;
use crate::commands::{CommandFactory, MaplineCommandFactory, ProjectCommand, SimulateCommand};
use crate::coordinate::{GeoPoint, GeodesicProjector};
use crate::guide::errors::GuideError;

fn parse(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["mapline"];
    argv.extend_from_slice(args);
    build_cli().try_get_matches_from(argv).unwrap()
}

#[test]
fn test_project_defaults() {
    let command = ProjectCommand::new(&parse(&[])).unwrap();
    let end = command.destination();

    assert_abs_diff_eq!(end.latitude, (500.0_f64 / 6_371_000.0).to_degrees(), epsilon = 1e-9);
    assert_abs_diff_eq!(end.longitude, 0.0, epsilon = 1e-9);
}

#[test]
fn test_project_uses_lat_lon_and_distance_alias() {
    let args = parse(&["--lat", "-33.8688", "--lon", "151.2093", "--heading", "-90", "--distance", "2500"]);
    let end = ProjectCommand::new(&args).unwrap().destination();

    let expected = GeodesicProjector::new().destination_point(&GeoPoint::new(-33.8688, 151.2093), 270.0, 2500.0);
    assert!(end.approx_eq(&expected, 1e-9), "{} vs {}", end, expected);
}

#[test]
fn test_project_normalize_wraps_antimeridian() {
    let base = ["--lat", "0", "--lon", "179.99", "--heading", "90", "--length", "5000"];

    let raw = ProjectCommand::new(&parse(&base)).unwrap().destination();
    assert!(raw.longitude > 180.0);

    let mut normalized_args = base.to_vec();
    normalized_args.push("--normalize");
    let wrapped = ProjectCommand::new(&parse(&normalized_args)).unwrap().destination();
    assert!(wrapped.is_valid());
    assert_abs_diff_eq!(wrapped.longitude, raw.longitude - 360.0, epsilon = 1e-9);
}

#[test]
fn test_project_rejects_bad_input() {
    assert!(matches!(ProjectCommand::new(&parse(&["--distance", "-5"])), Err(GuideError::InvalidLength(_))));
    assert!(matches!(ProjectCommand::new(&parse(&["--heading", "inf"])), Err(GuideError::InvalidHeading(_))));
    assert!(matches!(ProjectCommand::new(&parse(&["--lat", "10"])), Err(GuideError::InvalidCoordinate(_))));
    assert!(matches!(ProjectCommand::new(&parse(&["--lat", "95", "--lon", "0"])), Err(GuideError::InvalidCoordinate(_))));
    assert!(matches!(ProjectCommand::new(&parse(&["--heading", "east"])), Err(GuideError::GenericError(_))));
}

#[test]
fn test_simulate_argument_errors() {
    assert!(matches!(SimulateCommand::new(&parse(&["-s", "--lon", "8.5"])), Err(GuideError::InvalidCoordinate(_))));
    assert!(matches!(SimulateCommand::new(&parse(&["-s", "--color", "mauve"])), Err(GuideError::UnknownColor(_))));
    assert!(matches!(SimulateCommand::new(&parse(&["-s", "--fix-after", "soon"])), Err(GuideError::GenericError(_))));
    assert!(matches!(SimulateCommand::new(&parse(&["-s", "--config", "/nonexistent/mapline.toml"])), Err(GuideError::IoError(_))));
}

#[test]
fn test_factory_selects_command() {
    let factory = MaplineCommandFactory::new();

    assert!(factory.create_command(&parse(&["--lat", "1", "--lon", "2"])).is_ok());
    assert!(factory.create_command(&parse(&["--simulate", "--lat", "1", "--lon", "2", "--color", "green"])).is_ok());
    assert!(factory.create_command(&parse(&["--simulate", "--color", "mauve"])).is_err());
}
