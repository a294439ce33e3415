use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use imagesieve::commands::{CommandFactory, ImagesieveCommandFactory};
use imagesieve::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("imagesieve")
        .version("0.1")
        .about("Extract embedded images from PDF, DjVu, DOC and ZIP-based documents")
        .arg(
            Arg::new("inputs")
                .help("Documents to extract images from")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory to save extracted images to")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check-deps")
                .long("check-deps")
                .help("Only check which external tools are installed, then exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict-deps")
                .long("strict-deps")
                .help("Abort when any external tool is missing instead of continuing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("blank-threshold")
                .long("blank-threshold")
                .help("DjVu background-layer size in bytes at or below which a page counts as blank")
                .value_name("BYTES")
                .required(false),
        )
        .arg(
            Arg::new("min-render-size")
                .long("min-render-size")
                .help("Minimum size in bytes for a rendered DjVu page to be kept")
                .value_name("BYTES")
                .required(false),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    let log_file = "imagesieve.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("imagesieve-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ImagesieveCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
