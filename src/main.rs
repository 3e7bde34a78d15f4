use std::process;
use log::error;

use mapline::utils::logger::Logger;
use mapline::commands::{build_cli, CommandFactory, MaplineCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    if let Err(e) = Logger::init_global_logger(matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = MaplineCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
