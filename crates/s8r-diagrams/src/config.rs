//! Output configuration: formats, detail levels, and their normalization.
//!
//! Requested values are validated against fixed domains. An unrecognized
//! value is never an error: [`OutputFormat::parse_or`] and
//! [`DetailLevel::parse_or`] log one warning naming the rejected value and
//! substitute the caller's default.

use std::fmt::{self, Display};
use std::str::FromStr;

use log::warn;

/// Default directory diagrams are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "docs/diagrams";

/// Image format produced by the rendering pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
}

impl OutputFormat {
    /// The file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Parse a requested format, substituting `default` for values outside
    /// the supported domain. Logs one warning per rejected value.
    pub fn parse_or(value: &str, default: OutputFormat) -> OutputFormat {
        value.parse().unwrap_or_else(|_| {
            warn!(
                requested = value,
                substituted:% = default;
                "Unsupported output format, substituting default"
            );
            default
        })
    }
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err("unsupported output format (expected png, svg, or pdf)"),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Detail level for the port-interface diagrams.
///
/// Only the detailed-ports diagram is sensitive to this: `High` adds the
/// standard-implementation group to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DetailLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl DetailLevel {
    /// Parse a requested detail level, substituting `default` for values
    /// outside the supported domain. Logs one warning per rejected value.
    pub fn parse_or(value: &str, default: DetailLevel) -> DetailLevel {
        value.parse().unwrap_or_else(|_| {
            warn!(
                requested = value,
                substituted:% = default;
                "Unsupported detail level, substituting default"
            );
            default
        })
    }
}

impl FromStr for DetailLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(DetailLevel::Low),
            "medium" => Ok(DetailLevel::Medium),
            "high" => Ok(DetailLevel::High),
            _ => Err("unsupported detail level (expected low, medium, or high)"),
        }
    }
}

impl Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DetailLevel::Low => "low",
            DetailLevel::Medium => "medium",
            DetailLevel::High => "high",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_is_case_insensitive() {
        assert_eq!("PNG".parse(), Ok(OutputFormat::Png));
        assert_eq!("Svg".parse(), Ok(OutputFormat::Svg));
        assert_eq!("pdf".parse(), Ok(OutputFormat::Pdf));
    }

    #[test]
    fn unknown_format_substitutes_the_default() {
        assert_eq!(
            OutputFormat::parse_or("webp", OutputFormat::Png),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::parse_or("webp", OutputFormat::Svg),
            OutputFormat::Svg
        );
        // A valid value is never substituted.
        assert_eq!(
            OutputFormat::parse_or("pdf", OutputFormat::Png),
            OutputFormat::Pdf
        );
    }

    #[test]
    fn detail_parsing_is_case_insensitive() {
        assert_eq!("LOW".parse(), Ok(DetailLevel::Low));
        assert_eq!("Medium".parse(), Ok(DetailLevel::Medium));
        assert_eq!("high".parse(), Ok(DetailLevel::High));
    }

    #[test]
    fn unknown_detail_substitutes_the_default() {
        assert_eq!(
            DetailLevel::parse_or("extreme", DetailLevel::Medium),
            DetailLevel::Medium
        );
        assert_eq!(
            DetailLevel::parse_or("high", DetailLevel::Medium),
            DetailLevel::High
        );
    }

    #[test]
    fn extensions_match_display() {
        for format in [OutputFormat::Png, OutputFormat::Svg, OutputFormat::Pdf] {
            assert_eq!(format.extension(), format.to_string());
        }
    }
}
