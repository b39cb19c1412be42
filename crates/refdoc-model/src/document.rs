//! Raw reference document tree as deserialized from YAML or JSON.
//!
//! Every field is optional at this level so that missing data surfaces as a
//! [`ModelError::MissingField`] naming the dotted path, rather than as a
//! generic parse error.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ModelError, SubsectionKind};

/// Positional record: a sequence of scalar fields.
///
/// Numbers and booleans are accepted and kept as their textual form, so
/// `[Integer, A whole number, 42]` loads as three strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Scalar>")]
pub struct Record(pub Vec<String>);

impl Record {
    /// Build a record from string fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Field values in order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<Vec<Scalar>> for Record {
    fn from(values: Vec<Scalar>) -> Self {
        Self(
            values
                .into_iter()
                .map(|value| match value {
                    Scalar::Bool(b) => b.to_string(),
                    Scalar::Int(i) => i.to_string(),
                    Scalar::Float(f) => f.to_string(),
                    Scalar::Str(s) => s,
                })
                .collect(),
        )
    }
}

/// Top-level node of the reference source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReferenceDocument {
    /// Document name, used as the title.
    pub name: Option<String>,
    /// Link target of the revision notice.
    pub revision_history_url: Option<String>,
    /// Revision date as a `YYYY-MM-DD` literal.
    pub revision_date: Option<String>,
    /// Introductory formatted text.
    pub description: Option<String>,
    pub document_conventions: Option<DocumentConventions>,
    pub dataset_files: Option<DatasetFileListing>,
}

/// The "Document Conventions" part of the reference.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConventions {
    pub term_definitions: Option<TermDefinitions>,
    pub presence_conditions: Option<PresenceConditions>,
    pub field_types: Option<FieldTypes>,
    pub field_signs: Option<FieldSigns>,
    /// Optional fifth subsection.
    pub dataset_attributes: Option<DatasetAttributes>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TermDefinitions {
    pub description: Option<String>,
    pub terms: Option<Vec<Record>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresenceConditions {
    pub description: Option<String>,
    pub conditions: Option<Vec<Record>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldTypes {
    pub description: Option<String>,
    pub types: Option<Vec<Record>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldSigns {
    pub description: Option<String>,
    pub signs: Option<Vec<Record>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetAttributes {
    pub description: Option<String>,
    pub attributes: Option<Vec<Record>>,
}

/// The "Dataset Files" listing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetFileListing {
    pub description: Option<String>,
    pub files: Option<Vec<Record>>,
}

/// Borrowed view of one record collection with its location in the tree.
pub(crate) struct RawSubsection<'a> {
    pub kind: SubsectionKind,
    /// Dotted path of the subsection, e.g. `document_conventions.field_types`.
    pub path: String,
    /// Key of the record collection within the subsection.
    pub collection: &'static str,
    pub description: Option<&'a str>,
    pub records: Option<&'a [Record]>,
}

impl RawSubsection<'_> {
    /// Description text, or a missing-field error.
    pub fn require_description(&self) -> Result<String, ModelError> {
        self.description
            .map(str::to_owned)
            .ok_or_else(|| ModelError::MissingField(format!("{}.description", self.path)))
    }

    /// Record collection, or a missing-field error.
    pub fn require_records(&self) -> Result<&[Record], ModelError> {
        self.records
            .ok_or_else(|| ModelError::MissingField(format!("{}.{}", self.path, self.collection)))
    }
}

impl ReferenceDocument {
    /// Parse a document from YAML content.
    ///
    /// Uses `serde_yaml`, so block scalars (`|`, `>`) in descriptions keep
    /// their line structure.
    pub fn from_yaml_str(content: &str) -> Result<Self, ModelError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a document from JSON content.
    pub fn from_json_str(content: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a document from a file.
    ///
    /// Files with a `.json` extension are parsed as JSON, everything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), json = is_json, "Loading reference document");

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Document conventions, or a missing-field error.
    pub(crate) fn require_conventions(&self) -> Result<&DocumentConventions, ModelError> {
        self.document_conventions
            .as_ref()
            .ok_or_else(|| ModelError::MissingField("document_conventions".to_owned()))
    }

    /// Dataset file listing, or a missing-field error.
    pub(crate) fn require_files(&self) -> Result<&DatasetFileListing, ModelError> {
        self.dataset_files
            .as_ref()
            .ok_or_else(|| ModelError::MissingField("dataset_files".to_owned()))
    }
}

impl DocumentConventions {
    /// Views of the four required subsections in document order.
    ///
    /// A missing subsection yields a missing-field error.
    pub(crate) fn required_subsections(&self) -> Result<[RawSubsection<'_>; 4], ModelError> {
        fn missing(key: &str) -> ModelError {
            ModelError::MissingField(format!("document_conventions.{key}"))
        }

        let terms = self
            .term_definitions
            .as_ref()
            .ok_or_else(|| missing("term_definitions"))?;
        let conditions = self
            .presence_conditions
            .as_ref()
            .ok_or_else(|| missing("presence_conditions"))?;
        let types = self
            .field_types
            .as_ref()
            .ok_or_else(|| missing("field_types"))?;
        let signs = self
            .field_signs
            .as_ref()
            .ok_or_else(|| missing("field_signs"))?;

        Ok([
            conventions_view(
                SubsectionKind::TermDefinitions,
                "terms",
                terms.description.as_deref(),
                terms.terms.as_deref(),
            ),
            conventions_view(
                SubsectionKind::PresenceConditions,
                "conditions",
                conditions.description.as_deref(),
                conditions.conditions.as_deref(),
            ),
            conventions_view(
                SubsectionKind::FieldTypes,
                "types",
                types.description.as_deref(),
                types.types.as_deref(),
            ),
            conventions_view(
                SubsectionKind::FieldSigns,
                "signs",
                signs.description.as_deref(),
                signs.signs.as_deref(),
            ),
        ])
    }

    /// View of the optional dataset attributes subsection.
    pub(crate) fn attributes_subsection(&self) -> Option<RawSubsection<'_>> {
        self.dataset_attributes.as_ref().map(|attrs| {
            conventions_view(
                SubsectionKind::DatasetAttributes,
                "attributes",
                attrs.description.as_deref(),
                attrs.attributes.as_deref(),
            )
        })
    }
}

impl DatasetFileListing {
    pub(crate) fn subsection(&self) -> RawSubsection<'_> {
        RawSubsection {
            kind: SubsectionKind::DatasetFiles,
            path: "dataset_files".to_owned(),
            collection: "files",
            description: self.description.as_deref(),
            records: self.files.as_deref(),
        }
    }
}

fn conventions_view<'a>(
    kind: SubsectionKind,
    collection: &'static str,
    description: Option<&'a str>,
    records: Option<&'a [Record]>,
) -> RawSubsection<'a> {
    RawSubsection {
        kind,
        path: format!("document_conventions.{}", kind.key()),
        collection,
        description,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let doc = ReferenceDocument::from_yaml_str("  \n ").unwrap();
        assert_eq!(doc, ReferenceDocument::default());
    }

    #[test]
    fn test_parse_top_level_fields() {
        let yaml = r#"
name: GTFS Schedule Reference
revision_history_url: https://gtfs.org/revision-history
revision_date: "2025-10-28"
description: |
  First line.
  Second line.
"#;
        let doc = ReferenceDocument::from_yaml_str(yaml).unwrap();
        assert_eq!(doc.name.as_deref(), Some("GTFS Schedule Reference"));
        assert_eq!(
            doc.revision_history_url.as_deref(),
            Some("https://gtfs.org/revision-history")
        );
        assert_eq!(doc.revision_date.as_deref(), Some("2025-10-28"));
        assert_eq!(doc.description.as_deref(), Some("First line.\nSecond line.\n"));
        assert!(doc.document_conventions.is_none());
        assert!(doc.dataset_files.is_none());
    }

    #[test]
    fn test_parse_uniformly_indented_document() {
        let yaml = "  name: Ref\n  dataset_files:\n    description: Files.\n";
        let doc = ReferenceDocument::from_yaml_str(yaml).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Ref"));
        assert_eq!(
            doc.dataset_files.unwrap().description.as_deref(),
            Some("Files.")
        );
    }

    #[test]
    fn test_record_scalars_become_text() {
        let yaml = r#"
dataset_files:
  description: Files.
  files:
    - [agency.txt, Required, 42]
    - [stops.txt, true, 1.5]
"#;
        let doc = ReferenceDocument::from_yaml_str(yaml).unwrap();
        let files = doc.dataset_files.unwrap().files.unwrap();
        assert_eq!(files[0], Record::new(["agency.txt", "Required", "42"]));
        assert_eq!(files[1], Record::new(["stops.txt", "true", "1.5"]));
    }

    #[test]
    fn test_records_keep_declared_arity() {
        let yaml = r"
document_conventions:
  dataset_attributes:
    description: Attributes.
    attributes:
      - [Unique rows, Each row is unique]
";
        let doc = ReferenceDocument::from_yaml_str(yaml).unwrap();
        let attrs = doc
            .document_conventions
            .unwrap()
            .dataset_attributes
            .unwrap()
            .attributes
            .unwrap();
        assert_eq!(attrs[0].len(), 2);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"name": "Ref", "dataset_files": {"description": "d", "files": [["a.txt", "Optional", "x"]]}}"#;
        let doc = ReferenceDocument::from_json_str(json).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Ref"));
        assert_eq!(doc.dataset_files.unwrap().files.unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let result = ReferenceDocument::from_yaml_str("name: [invalid yaml");
        assert!(matches!(result, Err(ModelError::Yaml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ReferenceDocument::load(Path::new("/nonexistent/schedule.yaml"));
        assert!(matches!(result, Err(ModelError::NotFound(_))));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("schedule.yaml");
        let json_path = dir.path().join("schedule.json");
        std::fs::write(&yaml_path, "name: From YAML\n").unwrap();
        std::fs::write(&json_path, r#"{"name": "From JSON"}"#).unwrap();

        let from_yaml = ReferenceDocument::load(&yaml_path).unwrap();
        let from_json = ReferenceDocument::load(&json_path).unwrap();
        assert_eq!(from_yaml.name.as_deref(), Some("From YAML"));
        assert_eq!(from_json.name.as_deref(), Some("From JSON"));
    }

    #[test]
    fn test_missing_subsection_reports_path() {
        let conventions = DocumentConventions {
            term_definitions: Some(TermDefinitions::default()),
            ..Default::default()
        };
        let Err(err) = conventions.required_subsections() else {
            panic!("expected missing field error");
        };
        assert!(matches!(err, ModelError::MissingField(ref field)
            if field == "document_conventions.presence_conditions"));
    }
}
