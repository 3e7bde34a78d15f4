//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod project_command;
pub mod simulate_command;
#[cfg(test)]
mod tests;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use project_command::ProjectCommand;
pub use simulate_command::SimulateCommand;

use clap::ArgMatches;
use crate::guide::errors::GuideResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct MaplineCommandFactory;

impl MaplineCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MaplineCommandFactory
    }
}

impl Default for MaplineCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for MaplineCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> GuideResult<Box<dyn Command>> {
        if args.get_flag("simulate") {
            Ok(Box::new(SimulateCommand::new(args)?))
        } else {
            // Default to a one-shot projection
            Ok(Box::new(ProjectCommand::new(args)?))
        }
    }
}
