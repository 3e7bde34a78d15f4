//! Helpers for reading typed values out of clap matches

use clap::ArgMatches;

use crate::coordinate::GeoPoint;
use crate::guide::errors::{GuideError, GuideResult};

/// Read an optional floating point argument
pub fn get_f64(args: &ArgMatches, name: &str) -> GuideResult<Option<f64>> {
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<f64>()
            .map(Some)
            .map_err(|_| GuideError::GenericError(format!("Invalid value for --{}: '{}'", name, raw))),
    }
}

/// Read an optional unsigned integer argument
pub fn get_u32(args: &ArgMatches, name: &str) -> GuideResult<Option<u32>> {
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<u32>()
            .map(Some)
            .map_err(|_| GuideError::GenericError(format!("Invalid value for --{}: '{}'", name, raw))),
    }
}

/// Read the optional `--lat`/`--lon` pair
///
/// Both or neither must be given; the point must be in range.
pub fn get_point(args: &ArgMatches) -> GuideResult<Option<GeoPoint>> {
    match (get_f64(args, "lat")?, get_f64(args, "lon")?) {
        (None, None) => Ok(None),
        (Some(latitude), Some(longitude)) => {
            let point = GeoPoint::new(latitude, longitude);
            if point.is_valid() {
                Ok(Some(point))
            } else {
                Err(GuideError::InvalidCoordinate(format!("{} is out of range", point)))
            }
        }
        _ => Err(GuideError::InvalidCoordinate("--lat and --lon must be given together".to_string())),
    }
}
