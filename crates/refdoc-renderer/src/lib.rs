//! Reference document renderer with pluggable backends.
//!
//! [`render`] turns a [`ReferenceDocument`](refdoc_model::ReferenceDocument)
//! into a logical [`Document`]: an ordered list of [`Block`]s (title,
//! revision notice, text, headings, definition lists and one table). The
//! document is then written out through a [`RenderBackend`].
//!
//! # Architecture
//!
//! - [`render`]: validates the whole input, then lays it out. Validation
//!   failures abort before any block is produced.
//! - [`MarkdownBackend`]: GitHub-flavored markdown.
//! - [`HtmlBackend`]: standalone HTML5 page; descriptions, definitions and
//!   table cells are markdown and go through `pulldown-cmark`.
//! - With the `serde` feature, the logical document itself can be emitted as
//!   JSON.
//!
//! # Example
//!
//! ```
//! use refdoc_model::ReferenceDocument;
//! use refdoc_renderer::{OutputFormat, render};
//!
//! let yaml = r#"
//! name: GTFS Schedule Reference
//! revision_history_url: https://gtfs.org/revision-history
//! description: Defines a GTFS dataset.
//! document_conventions:
//!   term_definitions: {description: Terms., terms: [[Dataset, A complete set of files.]]}
//!   presence_conditions: {description: Presence., conditions: []}
//!   field_types: {description: Types., types: []}
//!   field_signs: {description: Signs., signs: []}
//! dataset_files:
//!   description: Files.
//!   files: [[agency.txt, Required, Transit agencies.]]
//! "#;
//!
//! let doc = ReferenceDocument::from_yaml_str(yaml)?;
//! let markdown = render(&doc)?.to_output(OutputFormat::Markdown)?;
//! assert!(markdown.contains("- Dataset: A complete set of files."));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod backend;
mod date;
mod document;
mod error;
mod html;
mod markdown;
mod render;

pub use backend::{OutputFormat, RenderBackend, UnknownFormat};
pub use date::format_date;
pub use document::{Block, Definition, Document, FILE_TABLE_HEADER, Table};
pub use error::RenderError;
pub use html::{HtmlBackend, escape_html};
pub use markdown::MarkdownBackend;
pub use render::{layout, render};
