//! Command line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the argument parser for the `mapline` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("mapline")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Project heading guide lines and simulate the guide line screen")
        .arg(
            Arg::new("lat")
                .long("lat")
                .help("Start latitude in degrees")
                .value_name("DEGREES")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("lon")
                .long("lon")
                .help("Start longitude in degrees")
                .value_name("DEGREES")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("heading")
                .long("heading")
                .help("Heading in degrees clockwise from north")
                .value_name("DEGREES")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .visible_alias("distance")
                .help("Line length in meters")
                .value_name("METERS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("normalize")
                .long("normalize")
                .help("Wrap the projected longitude into [-180, 180]")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("simulate")
                .short('s')
                .long("simulate")
                .help("Run a simulated map screen session")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file for the simulated screen")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("Line color name (teal, deep_orange, green, purple) or #RRGGBB")
                .value_name("COLOR")
                .required(false),
        )
        .arg(
            Arg::new("fix-after")
                .long("fix-after")
                .help("Location queries answered without a fix in the simulation")
                .value_name("COUNT")
                .required(false),
        )
        .arg(
            Arg::new("no-fix")
                .long("no-fix")
                .help("Simulated receiver never acquires a fix")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("deny")
                .long("deny")
                .help("Refuse the simulated location permission request")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-follow")
                .long("no-follow")
                .help("Disable follow mode in the simulation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
