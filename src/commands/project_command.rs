//! One-shot destination point projection

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::coordinate::{GeoPoint, GeodesicProjector};
use crate::guide::errors::{GuideError, GuideResult};
use crate::guide::state::DEFAULT_LENGTH;
use crate::utils::arg_utils::{get_f64, get_point};

/// Command that projects a single point and prints the result
pub struct ProjectCommand {
    /// Start point
    start: GeoPoint,
    /// Heading in degrees
    heading: f64,
    /// Distance in meters
    distance: f64,
    /// Wrap the output into the valid coordinate range
    normalize: bool,
}

impl ProjectCommand {
    /// Create a new project command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ProjectCommand instance or an error
    pub fn new(args: &ArgMatches) -> GuideResult<Self> {
        let start = get_point(args)?.unwrap_or(GeoPoint::new(0.0, 0.0));

        let heading = get_f64(args, "heading")?.unwrap_or(0.0);
        if !heading.is_finite() {
            return Err(GuideError::InvalidHeading(heading));
        }
        let distance = get_f64(args, "length")?.unwrap_or(DEFAULT_LENGTH);
        if !distance.is_finite() || distance < 0.0 {
            return Err(GuideError::InvalidLength(distance));
        }

        Ok(ProjectCommand {
            start,
            heading,
            distance,
            normalize: args.get_flag("normalize"),
        })
    }

    /// Compute the destination for the configured inputs
    pub fn destination(&self) -> GeoPoint {
        let end = GeodesicProjector::new().destination_point(&self.start, self.heading, self.distance);
        if self.normalize {
            end.normalized()
        } else {
            end
        }
    }
}

impl Command for ProjectCommand {
    fn execute(&self) -> GuideResult<()> {
        debug!("Projecting {} on {} deg for {} m", self.start, self.heading, self.distance);

        let end = self.destination();
        println!("{:.8},{:.8}", end.latitude, end.longitude);

        Ok(())
    }
}
