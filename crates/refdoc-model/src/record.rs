//! Typed records and the validated reference.

use crate::document::{RawSubsection, Record, ReferenceDocument};
use crate::error::{ModelError, SubsectionKind};

/// A `term: definition` pair. Used by every conventions subsection except
/// dataset attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermEntry {
    pub name: String,
    pub definition: String,
}

/// A dataset attribute with a worked example.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeEntry {
    pub name: String,
    pub definition: String,
    pub example: String,
}

/// One row of the dataset file listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    /// Presence category, kept verbatim. See [`crate::Presence`] for the
    /// recognized vocabulary.
    pub presence: String,
    pub description: String,
}

/// Conversion from a positional record of known arity.
trait Entry: Sized {
    /// Build the entry. `fields` has exactly the subsection's arity.
    fn from_fields(fields: &[String]) -> Self;
}

impl Entry for TermEntry {
    fn from_fields(fields: &[String]) -> Self {
        Self {
            name: fields[0].clone(),
            definition: fields[1].clone(),
        }
    }
}

impl Entry for AttributeEntry {
    fn from_fields(fields: &[String]) -> Self {
        Self {
            name: fields[0].clone(),
            definition: fields[1].clone(),
            example: fields[2].clone(),
        }
    }
}

impl Entry for FileEntry {
    fn from_fields(fields: &[String]) -> Self {
        Self {
            name: fields[0].clone(),
            presence: fields[1].clone(),
            description: fields[2].clone(),
        }
    }
}

/// A described collection of typed entries in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subsection<T> {
    pub description: String,
    pub entries: Vec<T>,
}

/// A fully validated reference document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub revision_history_url: String,
    pub revision_date: Option<String>,
    pub description: String,
    pub term_definitions: Subsection<TermEntry>,
    pub presence_conditions: Subsection<TermEntry>,
    pub field_types: Subsection<TermEntry>,
    pub field_signs: Subsection<TermEntry>,
    pub dataset_attributes: Option<Subsection<AttributeEntry>>,
    pub dataset_files: Subsection<FileEntry>,
}

impl Reference {
    /// The four `term: definition` subsections in document order.
    #[must_use]
    pub fn term_subsections(&self) -> [(SubsectionKind, &Subsection<TermEntry>); 4] {
        [
            (SubsectionKind::TermDefinitions, &self.term_definitions),
            (SubsectionKind::PresenceConditions, &self.presence_conditions),
            (SubsectionKind::FieldTypes, &self.field_types),
            (SubsectionKind::FieldSigns, &self.field_signs),
        ]
    }
}

impl ReferenceDocument {
    /// Validate the tree and convert it into a [`Reference`].
    ///
    /// Checks, in document order, that every required field is present and
    /// that every record has exactly the arity of its subsection. The first
    /// problem found is returned; nothing is converted partially.
    pub fn validate(&self) -> Result<Reference, ModelError> {
        let name = require(self.name.as_deref(), "name")?;
        let revision_history_url =
            require(self.revision_history_url.as_deref(), "revision_history_url")?;
        let description = require(self.description.as_deref(), "description")?;

        let conventions = self.require_conventions()?;
        let [terms, conditions, types, signs] = conventions.required_subsections()?;
        let term_definitions = convert(&terms)?;
        let presence_conditions = convert(&conditions)?;
        let field_types = convert(&types)?;
        let field_signs = convert(&signs)?;
        let dataset_attributes = conventions
            .attributes_subsection()
            .map(|raw| convert(&raw))
            .transpose()?;

        let dataset_files = convert(&self.require_files()?.subsection())?;

        Ok(Reference {
            name,
            revision_history_url,
            revision_date: self.revision_date.clone(),
            description,
            term_definitions,
            presence_conditions,
            field_types,
            field_signs,
            dataset_attributes,
            dataset_files,
        })
    }
}

fn require(value: Option<&str>, field: &str) -> Result<String, ModelError> {
    value
        .map(str::to_owned)
        .ok_or_else(|| ModelError::MissingField(field.to_owned()))
}

fn convert<T: Entry>(raw: &RawSubsection<'_>) -> Result<Subsection<T>, ModelError> {
    let description = raw.require_description()?;
    let records = raw.require_records()?;
    let entries = records
        .iter()
        .enumerate()
        .map(|(index, record)| check_arity(raw.kind, index, record).map(T::from_fields))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Subsection {
        description,
        entries,
    })
}

fn check_arity(
    kind: SubsectionKind,
    index: usize,
    record: &Record,
) -> Result<&[String], ModelError> {
    let expected = kind.arity();
    if record.len() == expected {
        Ok(record.fields())
    } else {
        Err(ModelError::MalformedRecord {
            subsection: kind,
            index,
            expected,
            found: record.len(),
        })
    }
}
