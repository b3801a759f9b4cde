//! Generator behavior against a stubbed rendering capability.
//!
//! These tests exercise the full generator surface without requiring a
//! Graphviz installation: an unavailable capability must degrade every call
//! to an error result and an empty batch, while still ensuring the output
//! directory exists.

use tempfile::tempdir;

use s8r_diagrams::catalog::{ArchitectureKind, PortKind};
use s8r_diagrams::{
    ArchitectureGenerator, Capability, DetailLevel, OutputFormat, PortInterfaceGenerator,
    RenderError,
};

#[test]
fn constructor_creates_missing_output_directories() {
    let temp = tempdir().expect("temp dir");
    let nested = temp.path().join("docs").join("diagrams");
    assert!(!nested.exists());

    let generator = ArchitectureGenerator::new(
        &nested,
        ArchitectureGenerator::DEFAULT_FORMAT,
        Capability::new(false),
    )
    .expect("generator construction");

    assert!(nested.is_dir());
    assert_eq!(generator.output_dir(), nested);
}

#[test]
fn directory_creation_is_idempotent() {
    let temp = tempdir().expect("temp dir");
    let dir = temp.path().join("out");

    for _ in 0..2 {
        PortInterfaceGenerator::new(
            &dir,
            PortInterfaceGenerator::DEFAULT_FORMAT,
            DetailLevel::Medium,
            Capability::new(false),
        )
        .expect("repeated construction against an existing directory");
    }
    assert!(dir.is_dir());
}

#[test]
fn unavailable_pipeline_degrades_every_architecture_diagram() {
    let temp = tempdir().expect("temp dir");
    let generator = ArchitectureGenerator::new(
        temp.path().join("diagrams"),
        OutputFormat::Png,
        Capability::new(false),
    )
    .expect("generator construction");

    for kind in ArchitectureKind::ALL {
        assert!(matches!(
            generator.generate(kind),
            Err(RenderError::Unavailable)
        ));
    }

    assert!(generator.generate_all().is_empty());

    // Nothing was written.
    let entries: Vec<_> = std::fs::read_dir(generator.output_dir())
        .expect("read output dir")
        .collect();
    assert!(entries.is_empty());
}

#[test]
fn unavailable_pipeline_degrades_every_port_diagram() {
    let temp = tempdir().expect("temp dir");
    let generator = PortInterfaceGenerator::new(
        temp.path().join("diagrams"),
        OutputFormat::Svg,
        DetailLevel::High,
        Capability::new(false),
    )
    .expect("generator construction");

    for kind in PortKind::ALL {
        assert!(matches!(
            generator.generate(kind),
            Err(RenderError::Unavailable)
        ));
    }

    assert!(generator.generate_all().is_empty());
}

#[test]
fn batch_covers_every_kind_exactly_once() {
    assert_eq!(ArchitectureKind::ALL.len(), 5);
    assert_eq!(PortKind::ALL.len(), 4);
}

#[test]
fn generators_expose_their_documented_defaults() {
    assert_eq!(ArchitectureGenerator::DEFAULT_FORMAT, OutputFormat::Png);
    assert_eq!(PortInterfaceGenerator::DEFAULT_FORMAT, OutputFormat::Svg);

    let temp = tempdir().expect("temp dir");
    let generator = PortInterfaceGenerator::new(
        temp.path(),
        PortInterfaceGenerator::DEFAULT_FORMAT,
        DetailLevel::parse_or("bogus", DetailLevel::Medium),
        Capability::new(false),
    )
    .expect("generator construction");
    assert_eq!(generator.detail(), DetailLevel::Medium);
}
