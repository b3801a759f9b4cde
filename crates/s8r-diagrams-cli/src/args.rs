//! Command-line argument definitions for the diagram binaries.
//!
//! Two [`clap`]-parsed structures, one per binary. Output format and detail
//! level are accepted as free-form strings and routed through the library's
//! normalization (warn and substitute the default), so an unrecognized value
//! never aborts the process.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Diagram selection for the architecture-diagram binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Context,
    Container,
    Component,
    Code,
    Clean,
    /// Reserved: port diagrams live in the `s8r-port-diagrams` binary.
    Port,
    All,
}

/// Command-line arguments for the architecture diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ArchitectureArgs {
    /// Type of C4 diagram to generate
    #[arg(long = "type", value_enum, default_value_t = TypeArg::All)]
    pub diagram_type: TypeArg,

    /// Output format: png, svg, or pdf (default: png)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output directory (default: docs/diagrams)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Command-line arguments for the port-interface diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PortArgs {
    /// Output format: png, svg, or pdf (default: svg)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Detail level: low, medium, or high (default: medium)
    #[arg(long)]
    pub detail: Option<String>,

    /// Output directory (default: docs/diagrams)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_defaults_select_the_whole_batch() {
        let args = ArchitectureArgs::try_parse_from(["s8r-c4-diagrams"]).expect("parse");
        assert_eq!(args.diagram_type, TypeArg::All);
        assert_eq!(args.output, None);
        assert_eq!(args.dir, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn architecture_type_flag_accepts_every_kind() {
        for (value, expected) in [
            ("context", TypeArg::Context),
            ("container", TypeArg::Container),
            ("component", TypeArg::Component),
            ("code", TypeArg::Code),
            ("clean", TypeArg::Clean),
            ("port", TypeArg::Port),
            ("all", TypeArg::All),
        ] {
            let args = ArchitectureArgs::try_parse_from(["s8r-c4-diagrams", "--type", value])
                .expect("parse");
            assert_eq!(args.diagram_type, expected);
        }
    }

    #[test]
    fn architecture_type_flag_rejects_unknown_kinds() {
        assert!(ArchitectureArgs::try_parse_from(["s8r-c4-diagrams", "--type", "sequence"]).is_err());
    }

    #[test]
    fn output_and_detail_are_free_form() {
        // Normalization happens later, so junk parses fine here.
        let args = PortArgs::try_parse_from([
            "s8r-port-diagrams",
            "--output",
            "webp",
            "--detail",
            "extreme",
        ])
        .expect("parse");
        assert_eq!(args.output.as_deref(), Some("webp"));
        assert_eq!(args.detail.as_deref(), Some("extreme"));
    }

    #[test]
    fn directory_flag_is_a_path() {
        let args =
            PortArgs::try_parse_from(["s8r-port-diagrams", "--dir", "build/diagrams"]).expect("parse");
        assert_eq!(args.dir, Some(PathBuf::from("build/diagrams")));
    }
}
