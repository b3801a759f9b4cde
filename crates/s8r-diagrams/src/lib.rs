//! Architecture and port-interface diagram generation for the Samstraumr
//! project.
//!
//! Diagrams are declared as in-memory trees of labeled nodes, nested groups,
//! and directed edges (see [`model`]), built from a fixed [`catalog`] of
//! diagram kinds, and rendered by delegating layout and rasterization to
//! Graphviz. The pipeline's absence or failure never panics: generators
//! degrade per diagram and report through the log.
//!
//! # Examples
//!
//! ```rust,no_run
//! use s8r_diagrams::{ArchitectureGenerator, Capability, OutputFormat};
//! use s8r_diagrams::catalog::ArchitectureKind;
//!
//! let generator = ArchitectureGenerator::new(
//!     "docs/diagrams",
//!     OutputFormat::Png,
//!     Capability::detect(),
//! )?;
//!
//! // One diagram...
//! let path = generator.generate(ArchitectureKind::Context);
//!
//! // ...or the whole batch, collecting what succeeded.
//! let generated = generator.generate_all();
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod model;

mod error;
mod generator;
mod render;

pub use config::{DEFAULT_OUTPUT_DIR, DetailLevel, OutputFormat};
pub use error::RenderError;
pub use generator::{ArchitectureGenerator, PortInterfaceGenerator};
pub use render::Capability;
