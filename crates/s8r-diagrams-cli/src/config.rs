//! Optional TOML configuration for the diagram binaries.
//!
//! The file supplies defaults below the command line: flag > file >
//! built-in default. All values are optional strings; format and detail go
//! through the same normalization as flag values.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::CliError;

/// Contents of a `--config` file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    dir: Option<String>,
    format: Option<String>,
    detail: Option<String>,
}

impl FileConfig {
    pub(crate) fn dir(&self) -> Option<&str> {
        self.output.dir.as_deref()
    }

    pub(crate) fn format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    pub(crate) fn detail(&self) -> Option<&str> {
        self.output.detail.as_deref()
    }
}

/// Load configuration from `path`, or empty defaults when no file was given.
///
/// # Errors
///
/// An unreadable or syntactically invalid file is a fatal setup error; there
/// is no silent fallback once a file was explicitly requested.
pub(crate) fn load_config(path: Option<&Path>) -> Result<FileConfig, CliError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(FileConfig::default()),
    }
}
