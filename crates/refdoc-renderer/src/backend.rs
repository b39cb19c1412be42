//! Render backend trait for format-specific output.
//!
//! The layout of a reference is fixed by [`render`](crate::render); backends
//! only decide how each block looks in their format.

use std::fmt;
use std::str::FromStr;

use crate::document::{Definition, Table};

/// Backend trait for format-specific rendering operations.
///
/// All methods append to `out`. Implementations must be deterministic: the
/// same block always produces the same bytes.
pub trait RenderBackend {
    /// Write anything that precedes the first block (e.g. an HTML `<head>`).
    fn begin(_title: &str, _out: &mut String) {}

    /// Write anything that follows the last block.
    fn end(_out: &mut String) {}

    /// Render the centered, enlarged document title.
    fn title(text: &str, out: &mut String);

    /// Render the bold revision notice.
    ///
    /// # Arguments
    ///
    /// * `name` - Document name
    /// * `revised` - Display-formatted revision date, if known
    /// * `history_url` - Link target for the revision history
    /// * `out` - Output buffer to write to
    fn revision_notice(name: &str, revised: Option<&str>, history_url: &str, out: &mut String);

    /// Render a formatted text block.
    fn text(text: &str, out: &mut String);

    /// Render a section heading. Level 1 is a top-level section.
    fn heading(level: u8, text: &str, out: &mut String);

    /// Render a definition list, one `term: definition` line per entry.
    fn definition_list(entries: &[Definition], out: &mut String);

    /// Render a table with its header row.
    fn table(table: &Table, out: &mut String);
}

/// Output format of a rendered document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    /// The logical document serialized as JSON.
    #[cfg(feature = "serde")]
    Json,
}

impl OutputFormat {
    /// Conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            #[cfg(feature = "serde")]
            Self::Json => "json",
        }
    }

    /// Canonical name used in configuration and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            #[cfg(feature = "serde")]
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown output format: {0:?}")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            #[cfg(feature = "serde")]
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}
