//! Render dispatch onto the Graphviz pipeline.
//!
//! The model tree is translated into a DOT graph and handed to Graphviz for
//! layout and rasterization. Graphviz is an external collaborator: its
//! absence is a detected, non-fatal condition, and any failure it raises is
//! caught at this boundary and returned as a [`RenderError`].

mod dot;

use std::path::{Path, PathBuf};
use std::process::Command;

use graphviz_rust::cmd::{CommandArg, Format};
use graphviz_rust::printer::PrinterContext;
use log::{debug, warn};

use crate::config::OutputFormat;
use crate::error::RenderError;
use crate::model::Diagram;

/// Availability of the external rendering pipeline.
///
/// Probed once and passed into each generator at construction time, so the
/// unavailable path is exercisable in tests by injecting a stub.
#[derive(Debug, Clone, Copy)]
pub struct Capability {
    rendering_available: bool,
}

impl Capability {
    /// Probe for the Graphviz `dot` executable on PATH.
    ///
    /// Logs install hints when the executable is missing; never fails.
    pub fn detect() -> Self {
        let rendering_available = Command::new("dot")
            .arg("-V")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false);

        if !rendering_available {
            warn!("Graphviz `dot` was not found on PATH; diagram rendering is disabled");
            warn!("Install it with `apt-get install graphviz` (Debian/Ubuntu) or `brew install graphviz` (macOS)");
        }

        Self {
            rendering_available,
        }
    }

    /// Create a capability with a fixed availability, bypassing the probe.
    pub fn new(rendering_available: bool) -> Self {
        Self {
            rendering_available,
        }
    }

    /// Whether the rendering pipeline can be invoked.
    pub fn rendering_available(&self) -> bool {
        self.rendering_available
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => Format::Png,
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Pdf => Format::Pdf,
        }
    }
}

/// Invokes the layout engine for fully constructed diagram specifications.
pub(crate) struct Renderer {
    capability: Capability,
}

impl Renderer {
    pub(crate) fn new(capability: Capability) -> Self {
        Self { capability }
    }

    pub(crate) fn available(&self) -> bool {
        self.capability.rendering_available()
    }

    /// Lay out and rasterize `diagram`, writing `<stem>.<format>`.
    ///
    /// Returns the path of the written file. Pipeline failures (bad graph,
    /// broken Graphviz installation) surface as [`RenderError::Pipeline`];
    /// they never panic and never abort the process.
    pub(crate) fn render(
        &self,
        diagram: &Diagram,
        stem: &Path,
        format: OutputFormat,
    ) -> Result<PathBuf, RenderError> {
        if !self.available() {
            return Err(RenderError::Unavailable);
        }

        let graph = dot::to_graph(diagram);
        let output = stem.with_extension(format.extension());

        debug!(
            output:% = output.display(),
            format:% = format;
            "Invoking layout engine"
        );

        graphviz_rust::exec(
            graph,
            &mut PrinterContext::default(),
            vec![
                CommandArg::Format(format.into()),
                CommandArg::Output(output.display().to_string()),
            ],
        )
        .map_err(RenderError::Pipeline)?;

        Ok(output)
    }
}
