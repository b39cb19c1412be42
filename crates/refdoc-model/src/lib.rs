//! Reference document tree for refdoc.
//!
//! The hand-maintained YAML (or JSON) source of truth is deserialized into a
//! [`ReferenceDocument`], a loosely-typed tree whose records are positional
//! tuples. [`ReferenceDocument::validate`] converts it into a [`Reference`]
//! made of typed records ([`TermEntry`], [`AttributeEntry`], [`FileEntry`]),
//! failing on missing fields or records of the wrong arity.
//!
//! # Example
//!
//! ```
//! use refdoc_model::ReferenceDocument;
//!
//! let yaml = r#"
//! name: GTFS Schedule Reference
//! revision_history_url: https://gtfs.org/revision-history
//! description: This document defines the format of a GTFS dataset.
//! document_conventions:
//!   term_definitions:
//!     description: Terms used in this document.
//!     terms:
//!       - [Dataset, A complete set of files defined by this reference.]
//!   presence_conditions:
//!     description: Presence of fields and files.
//!     conditions: []
//!   field_types:
//!     description: Field types.
//!     types: []
//!   field_signs:
//!     description: Field signs.
//!     signs: []
//! dataset_files:
//!   description: Files making up a dataset.
//!   files:
//!     - [agency.txt, Required, Transit agencies.]
//! "#;
//!
//! let reference = ReferenceDocument::from_yaml_str(yaml)?.validate()?;
//! assert_eq!(reference.term_definitions.entries[0].name, "Dataset");
//! assert_eq!(reference.dataset_files.entries[0].presence, "Required");
//! # Ok::<(), refdoc_model::ModelError>(())
//! ```

mod convert;
mod document;
mod error;
mod lint;
mod overlay;
mod presence;
mod record;

pub use convert::yaml_to_json;
pub use document::{
    DatasetAttributes, DatasetFileListing, DocumentConventions, FieldSigns, FieldTypes,
    PresenceConditions, Record, ReferenceDocument, TermDefinitions,
};
pub use error::{ModelError, SubsectionKind};
pub use lint::{Diagnostic, lint};
pub use overlay::{DocumentLabels, Label, Overlay};
pub use presence::{Presence, UnknownPresence};
pub use record::{AttributeEntry, FileEntry, Reference, Subsection, TermEntry};
