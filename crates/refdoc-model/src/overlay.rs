//! Language overlays.
//!
//! An overlay is a small YAML file that supplies translated labels and
//! comments for a shared base document. Entries are matched by subject
//! identifier, i.e. the first field of a record:
//!
//! ```yaml
//! language: es
//! document:
//!   name: Referencia de GTFS Schedule
//! labels:
//!   Dataset:
//!     label: Conjunto de datos
//!     comment: Un conjunto completo de archivos.
//!   agency.txt:
//!     comment: Agencias de transporte.
//! ```
//!
//! `label` replaces the displayed name, `comment` replaces the definition
//! (or the description, for dataset files). The shape of the base document
//! is never changed.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::document::{Record, ReferenceDocument};
use crate::error::{ModelError, SubsectionKind};

/// Translated text for one subject.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Label {
    pub label: Option<String>,
    pub comment: Option<String>,
}

/// Replacement top-level texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentLabels {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A language overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Overlay {
    /// Language tag, e.g. `es` or `pt-BR`.
    pub language: String,
    pub document: DocumentLabels,
    pub labels: HashMap<String, Label>,
}

impl Overlay {
    /// Parse an overlay from YAML content.
    pub fn from_yaml_str(content: &str) -> Result<Self, ModelError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load an overlay file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let overlay = Self::from_yaml_str(&std::fs::read_to_string(path)?)?;
        tracing::debug!(
            path = %path.display(),
            language = %overlay.language,
            labels = overlay.labels.len(),
            "Loaded overlay"
        );
        Ok(overlay)
    }

    /// Return a copy of `base` with this overlay's texts applied.
    ///
    /// Overlay values win over base values. Records whose arity does not
    /// match their subsection are copied untouched so that validation still
    /// reports them.
    #[must_use]
    pub fn apply(&self, base: &ReferenceDocument) -> ReferenceDocument {
        let mut doc = base.clone();

        if let Some(name) = &self.document.name {
            doc.name = Some(name.clone());
        }
        if let Some(description) = &self.document.description {
            doc.description = Some(description.clone());
        }

        let mut matched = HashSet::new();
        for (kind, records) in record_collections(&mut doc) {
            for record in records.iter_mut() {
                if let Some(key) = self.apply_to_record(kind, record) {
                    matched.insert(key);
                }
            }
        }

        for key in self.labels.keys().filter(|k| !matched.contains(k.as_str())) {
            tracing::debug!(language = %self.language, subject = %key, "Overlay label matched no record");
        }

        doc
    }

    /// Apply the matching label, returning the matched key.
    fn apply_to_record(&self, kind: SubsectionKind, record: &mut Record) -> Option<&str> {
        if record.len() != kind.arity() {
            return None;
        }
        let (key, label) = self.labels.get_key_value(&record.0[0])?;
        if let Some(comment) = &label.comment {
            record.0[kind.text_index()].clone_from(comment);
        }
        if let Some(text) = &label.label {
            record.0[0].clone_from(text);
        }
        Some(key.as_str())
    }
}

/// All record collections of the document, with their subsection.
fn record_collections(doc: &mut ReferenceDocument) -> Vec<(SubsectionKind, &mut Vec<Record>)> {
    let mut collections = Vec::new();

    if let Some(conventions) = doc.document_conventions.as_mut() {
        if let Some(records) = conventions
            .term_definitions
            .as_mut()
            .and_then(|s| s.terms.as_mut())
        {
            collections.push((SubsectionKind::TermDefinitions, records));
        }
        if let Some(records) = conventions
            .presence_conditions
            .as_mut()
            .and_then(|s| s.conditions.as_mut())
        {
            collections.push((SubsectionKind::PresenceConditions, records));
        }
        if let Some(records) = conventions
            .field_types
            .as_mut()
            .and_then(|s| s.types.as_mut())
        {
            collections.push((SubsectionKind::FieldTypes, records));
        }
        if let Some(records) = conventions
            .field_signs
            .as_mut()
            .and_then(|s| s.signs.as_mut())
        {
            collections.push((SubsectionKind::FieldSigns, records));
        }
        if let Some(records) = conventions
            .dataset_attributes
            .as_mut()
            .and_then(|s| s.attributes.as_mut())
        {
            collections.push((SubsectionKind::DatasetAttributes, records));
        }
    }

    if let Some(records) = doc.dataset_files.as_mut().and_then(|s| s.files.as_mut()) {
        collections.push((SubsectionKind::DatasetFiles, records));
    }

    collections
}
