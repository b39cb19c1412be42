//! Content checks on a validated reference.
//!
//! Validation only guarantees shape. Lint looks at values: empty names or
//! definitions, presence labels outside the recognized vocabulary, and file
//! names listed twice. Diagnostics are warnings and never block rendering.

use std::collections::HashSet;
use std::fmt;

use crate::error::SubsectionKind;
use crate::presence::Presence;
use crate::record::Reference;

/// A warning about one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub subsection: SubsectionKind,
    /// Zero-based position of the record in its collection.
    pub index: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.subsection, self.index, self.message)
    }
}

/// Check record values. Diagnostics are returned in document order.
#[must_use]
pub fn lint(reference: &Reference) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (kind, subsection) in reference.term_subsections() {
        for (index, entry) in subsection.entries.iter().enumerate() {
            check_text(&mut diagnostics, kind, index, &entry.name, &entry.definition);
        }
    }

    if let Some(attrs) = &reference.dataset_attributes {
        let kind = SubsectionKind::DatasetAttributes;
        for (index, entry) in attrs.entries.iter().enumerate() {
            check_text(&mut diagnostics, kind, index, &entry.name, &entry.definition);
            if entry.example.trim().is_empty() {
                diagnostics.push(Diagnostic {
                    subsection: kind,
                    index,
                    message: format!("empty example for {:?}", entry.name),
                });
            }
        }
    }

    let kind = SubsectionKind::DatasetFiles;
    let mut seen = HashSet::new();
    for (index, file) in reference.dataset_files.entries.iter().enumerate() {
        check_text(&mut diagnostics, kind, index, &file.name, &file.description);
        if let Err(err) = file.presence.parse::<Presence>() {
            diagnostics.push(Diagnostic {
                subsection: kind,
                index,
                message: err.to_string(),
            });
        }
        if !seen.insert(file.name.as_str()) {
            diagnostics.push(Diagnostic {
                subsection: kind,
                index,
                message: format!("duplicate file name {:?}", file.name),
            });
        }
    }

    diagnostics
}

fn check_text(
    diagnostics: &mut Vec<Diagnostic>,
    subsection: SubsectionKind,
    index: usize,
    name: &str,
    text: &str,
) {
    if name.trim().is_empty() {
        diagnostics.push(Diagnostic {
            subsection,
            index,
            message: "empty name".to_owned(),
        });
    }
    if text.trim().is_empty() {
        diagnostics.push(Diagnostic {
            subsection,
            index,
            message: format!("empty definition for {name:?}"),
        });
    }
}
