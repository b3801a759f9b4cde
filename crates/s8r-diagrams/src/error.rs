//! Error types for diagram generation.

use std::io;

use thiserror::Error;

/// Failure modes at the rendering-pipeline boundary.
///
/// Callers treat both variants as "this diagram was not produced" and keep
/// going, but the two conditions stay distinguishable: `Unavailable` means
/// there was nothing to invoke, `Pipeline` means the invocation failed.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The Graphviz `dot` executable was not found when capability was
    /// probed; no rendering was attempted.
    #[error("rendering pipeline unavailable: Graphviz `dot` was not found on PATH")]
    Unavailable,

    /// The layout engine was invoked and failed.
    #[error("layout engine failed: {0}")]
    Pipeline(#[source] io::Error),
}
