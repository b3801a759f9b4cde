//! Entry point for the C4 architecture-diagram generator.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use s8r_diagrams_cli::ArchitectureArgs;

fn main() {
    // Parse configuration first
    let args = ArchitectureArgs::parse();

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

    info!(log_level:?; "Starting architecture diagram generation");
    debug!(args:?; "Parsed arguments");

    // Run the application
    if let Err(err) = s8r_diagrams_cli::run_architecture(&args) {
        error!(err:err; "Run failed");
        process::exit(1);
    }

    info!("Completed successfully");
}
