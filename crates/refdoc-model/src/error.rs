//! Model error types.

use std::fmt;
use std::path::PathBuf;

/// Named record collections of a reference document.
///
/// Used to identify where a malformed record or a lint diagnostic was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubsectionKind {
    TermDefinitions,
    PresenceConditions,
    FieldTypes,
    FieldSigns,
    DatasetAttributes,
    DatasetFiles,
}

impl SubsectionKind {
    /// Key of the subsection in the source tree.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TermDefinitions => "term_definitions",
            Self::PresenceConditions => "presence_conditions",
            Self::FieldTypes => "field_types",
            Self::FieldSigns => "field_signs",
            Self::DatasetAttributes => "dataset_attributes",
            Self::DatasetFiles => "dataset_files",
        }
    }

    /// Heading shown for the subsection in rendered output.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::TermDefinitions => "Term Definitions",
            Self::PresenceConditions => "Presence Conditions",
            Self::FieldTypes => "Field Types",
            Self::FieldSigns => "Field Signs",
            Self::DatasetAttributes => "Dataset Attributes",
            Self::DatasetFiles => "Dataset Files",
        }
    }

    /// Number of positional fields each record of the subsection carries.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::DatasetAttributes | Self::DatasetFiles => 3,
            _ => 2,
        }
    }

    /// Position of the definition (or description) field within a record.
    #[must_use]
    pub(crate) fn text_index(self) -> usize {
        match self {
            Self::DatasetFiles => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for SubsectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error loading or validating a reference document.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Input file not found.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A required field is absent from the tree.
    #[error("Missing required field: {0}")]
    MissingField(String),
    /// A record does not have the number of fields its subsection requires.
    #[error(
        "Malformed record in {subsection} at index {index}: expected {expected} fields, found {found}"
    )]
    MalformedRecord {
        subsection: SubsectionKind,
        /// Zero-based position of the record in its collection.
        index: usize,
        expected: usize,
        found: usize,
    },
}
