//! Entry point for the port-interface diagram generator.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use s8r_diagrams_cli::PortArgs;

fn main() {
    // Parse configuration first
    let args = PortArgs::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'info' instead.",
            args.log_level
        );
        LevelFilter::Info
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting port interface diagram generation");
    debug!(args:?; "Parsed arguments");

    // Run the application
    if let Err(err) = s8r_diagrams_cli::run_ports(&args) {
        error!(err:err; "Run failed");
        process::exit(1);
    }

    info!("Completed successfully");
}
