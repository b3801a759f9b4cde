//! Diagram generators: configuration, per-kind generation, and batch runs.
//!
//! A generator owns its normalized output settings and a [`Renderer`], and
//! exposes one method per diagram plus a batch run over every kind. Failures
//! on the rendering path are per-diagram: the batch logs them and keeps
//! going. The only fatal condition is failing to create the output
//! directory, which surfaces from the constructor as an `io::Error`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::catalog::{ArchitectureKind, PortKind};
use crate::config::{DetailLevel, OutputFormat};
use crate::error::RenderError;
use crate::render::{Capability, Renderer};

/// Generates the C4 architecture diagrams.
pub struct ArchitectureGenerator {
    output_dir: PathBuf,
    format: OutputFormat,
    renderer: Renderer,
}

impl ArchitectureGenerator {
    /// Default output format for architecture diagrams.
    pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Png;

    /// Create a generator writing into `output_dir`.
    ///
    /// The directory and any missing ancestors are created; creation is
    /// idempotent. A filesystem failure here is an environment problem and
    /// propagates as a fatal error.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        format: OutputFormat,
        capability: Capability,
    ) -> io::Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            format,
            renderer: Renderer::new(capability),
        })
    }

    /// The directory diagrams are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate one diagram, returning the written file's path.
    ///
    /// When the rendering pipeline is unavailable this short-circuits before
    /// the diagram specification is even built.
    pub fn generate(&self, kind: ArchitectureKind) -> Result<PathBuf, RenderError> {
        if !self.renderer.available() {
            return Err(RenderError::Unavailable);
        }

        let diagram = kind.build();
        let stem = self.output_dir.join(kind.file_stem());
        let output = self.renderer.render(&diagram, &stem, self.format)?;

        info!(kind:% = kind, output:% = output.display(); "Generated diagram");
        Ok(output)
    }

    /// Generate every architecture diagram in the fixed batch order.
    ///
    /// Returns the paths of the diagrams that were produced; failures are
    /// logged per diagram and never abort the batch.
    pub fn generate_all(&self) -> Vec<PathBuf> {
        let mut generated = Vec::new();
        for kind in ArchitectureKind::ALL {
            match self.generate(kind) {
                Ok(path) => generated.push(path),
                Err(err) => error!(kind:% = kind, err:err; "Failed to generate diagram"),
            }
        }

        if generated.is_empty() {
            error!("No architecture diagrams were generated");
        } else {
            info!(count = generated.len(); "Generated architecture diagrams");
        }
        generated
    }
}

/// Generates the port-interface diagrams.
pub struct PortInterfaceGenerator {
    output_dir: PathBuf,
    format: OutputFormat,
    detail: DetailLevel,
    renderer: Renderer,
}

impl PortInterfaceGenerator {
    /// Default output format for port-interface diagrams.
    pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Svg;

    /// Create a generator writing into `output_dir`.
    ///
    /// Same directory semantics as [`ArchitectureGenerator::new`]. `detail`
    /// is threaded to the detailed-ports builder; the other kinds ignore it.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        format: OutputFormat,
        detail: DetailLevel,
        capability: Capability,
    ) -> io::Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            format,
            detail,
            renderer: Renderer::new(capability),
        })
    }

    /// The directory diagrams are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The normalized detail level this generator builds with.
    pub fn detail(&self) -> DetailLevel {
        self.detail
    }

    /// Generate one diagram, returning the written file's path.
    pub fn generate(&self, kind: PortKind) -> Result<PathBuf, RenderError> {
        if !self.renderer.available() {
            return Err(RenderError::Unavailable);
        }

        let diagram = kind.build(self.detail);
        let stem = self.output_dir.join(kind.file_stem());
        let output = self.renderer.render(&diagram, &stem, self.format)?;

        info!(kind:% = kind, output:% = output.display(); "Generated diagram");
        Ok(output)
    }

    /// Generate every port-interface diagram in the fixed batch order.
    pub fn generate_all(&self) -> Vec<PathBuf> {
        let mut generated = Vec::new();
        for kind in PortKind::ALL {
            match self.generate(kind) {
                Ok(path) => generated.push(path),
                Err(err) => error!(kind:% = kind, err:err; "Failed to generate diagram"),
            }
        }

        if generated.is_empty() {
            error!("No port interface diagrams were generated");
        } else {
            info!(count = generated.len(); "Generated port interface diagrams");
        }
        generated
    }
}
