//! CLI logic for the Samstraumr diagram binaries.
//!
//! Both binaries share the same shape: resolve settings (flag > config file
//! > built-in default), probe rendering capability once, construct the
//! matching generator, and dispatch. Rendering-path failures are logged and
//! absorbed — they never change the exit code. Only fatal setup errors
//! (output directory, configuration file) propagate to `main`.

mod args;
mod config;

pub use args::{ArchitectureArgs, PortArgs, TypeArg};

use std::io;
use std::path::PathBuf;

use log::{error, info};
use thiserror::Error;

use s8r_diagrams::catalog::ArchitectureKind;
use s8r_diagrams::{
    ArchitectureGenerator, Capability, DEFAULT_OUTPUT_DIR, DetailLevel, OutputFormat,
    PortInterfaceGenerator,
};

/// Fatal setup errors for the diagram binaries.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),
}

/// Run the architecture-diagram generator.
///
/// # Errors
///
/// Returns [`CliError`] only for fatal setup problems: an unreadable or
/// invalid `--config` file, or a failure to create the output directory.
pub fn run_architecture(args: &ArchitectureArgs) -> Result<(), CliError> {
    let file_config = config::load_config(args.config.as_deref())?;

    let format = resolve_format(
        args.output.as_deref(),
        file_config.format(),
        ArchitectureGenerator::DEFAULT_FORMAT,
    );
    let output_dir = resolve_dir(args.dir.clone(), file_config.dir());

    info!(
        diagram_type:? = args.diagram_type,
        format:% = format,
        output_dir:% = output_dir.display();
        "Generating architecture diagrams"
    );

    let generator = ArchitectureGenerator::new(output_dir, format, Capability::detect())?;

    match args.diagram_type {
        TypeArg::All => {
            generator.generate_all();
        }
        TypeArg::Port => {
            info!("Port interface diagrams are generated by the `s8r-port-diagrams` binary");
        }
        TypeArg::Context => generate_single(&generator, ArchitectureKind::Context),
        TypeArg::Container => generate_single(&generator, ArchitectureKind::Container),
        TypeArg::Component => generate_single(&generator, ArchitectureKind::Component),
        TypeArg::Code => generate_single(&generator, ArchitectureKind::Code),
        TypeArg::Clean => generate_single(&generator, ArchitectureKind::CleanArchitecture),
    }

    Ok(())
}

/// Run the port-interface diagram generator (always the full batch).
///
/// # Errors
///
/// Same fatal-setup-only policy as [`run_architecture`].
pub fn run_ports(args: &PortArgs) -> Result<(), CliError> {
    let file_config = config::load_config(args.config.as_deref())?;

    let format = resolve_format(
        args.output.as_deref(),
        file_config.format(),
        PortInterfaceGenerator::DEFAULT_FORMAT,
    );
    let detail = args
        .detail
        .as_deref()
        .or(file_config.detail())
        .map(|value| DetailLevel::parse_or(value, DetailLevel::Medium))
        .unwrap_or_default();
    let output_dir = resolve_dir(args.dir.clone(), file_config.dir());

    info!(
        detail:% = detail,
        format:% = format,
        output_dir:% = output_dir.display();
        "Generating port interface diagrams"
    );

    let generator = PortInterfaceGenerator::new(output_dir, format, detail, Capability::detect())?;
    generator.generate_all();

    Ok(())
}

fn generate_single(generator: &ArchitectureGenerator, kind: ArchitectureKind) {
    if let Err(err) = generator.generate(kind) {
        error!(kind:% = kind, err:err; "Failed to generate diagram");
    }
}

fn resolve_format(flag: Option<&str>, file: Option<&str>, default: OutputFormat) -> OutputFormat {
    flag.or(file)
        .map(|value| OutputFormat::parse_or(value, default))
        .unwrap_or(default)
}

fn resolve_dir(flag: Option<PathBuf>, file: Option<&str>) -> PathBuf {
    flag.or_else(|| file.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_file_beats_default() {
        assert_eq!(
            resolve_format(Some("pdf"), Some("svg"), OutputFormat::Png),
            OutputFormat::Pdf
        );
        assert_eq!(
            resolve_format(None, Some("svg"), OutputFormat::Png),
            OutputFormat::Svg
        );
        assert_eq!(
            resolve_format(None, None, OutputFormat::Png),
            OutputFormat::Png
        );
    }

    #[test]
    fn unknown_format_falls_back_to_the_generator_default() {
        assert_eq!(
            resolve_format(Some("webp"), None, OutputFormat::Svg),
            OutputFormat::Svg
        );
    }

    #[test]
    fn directory_resolution_prefers_the_flag() {
        assert_eq!(
            resolve_dir(Some(PathBuf::from("a")), Some("b")),
            PathBuf::from("a")
        );
        assert_eq!(resolve_dir(None, Some("b")), PathBuf::from("b"));
        assert_eq!(resolve_dir(None, None), PathBuf::from(DEFAULT_OUTPUT_DIR));
    }
}
