//! Reference layout.

use refdoc_model::{Reference, ReferenceDocument, SubsectionKind, TermEntry};

use crate::date::format_date;
use crate::document::{Block, Definition, Document, FILE_TABLE_HEADER, Table};
use crate::error::RenderError;

const CONVENTIONS_HEADING: &str = "Document Conventions";

/// Render a reference document tree.
///
/// The whole tree is validated before layout starts, so a missing field or a
/// malformed record anywhere returns an error and no blocks at all.
pub fn render(doc: &ReferenceDocument) -> Result<Document, RenderError> {
    let reference = doc.validate()?;
    layout(&reference)
}

/// Lay out a validated reference.
///
/// Sections and entries follow source order exactly. Fails only when the
/// revision date cannot be parsed.
pub fn layout(reference: &Reference) -> Result<Document, RenderError> {
    let revised = reference
        .revision_date
        .as_deref()
        .map(format_date)
        .transpose()?;

    let mut blocks = vec![
        Block::Title {
            text: reference.name.clone(),
        },
        Block::RevisionNotice {
            name: reference.name.clone(),
            revised,
            history_url: reference.revision_history_url.clone(),
        },
        text(&reference.description),
        heading(1, CONVENTIONS_HEADING),
    ];

    for (kind, subsection) in reference.term_subsections() {
        blocks.push(heading(2, kind.title()));
        blocks.push(text(&subsection.description));
        blocks.push(Block::DefinitionList {
            entries: subsection.entries.iter().map(term_definition).collect(),
        });
    }

    if let Some(attrs) = &reference.dataset_attributes {
        blocks.push(heading(2, SubsectionKind::DatasetAttributes.title()));
        blocks.push(text(&attrs.description));
        blocks.push(Block::DefinitionList {
            entries: attrs
                .entries
                .iter()
                .map(|entry| Definition {
                    term: entry.name.clone(),
                    definition: entry.definition.clone(),
                    example: Some(entry.example.clone()),
                })
                .collect(),
        });
    }

    let files = &reference.dataset_files;
    blocks.push(heading(1, SubsectionKind::DatasetFiles.title()));
    blocks.push(text(&files.description));
    blocks.push(Block::Table(Table {
        header: FILE_TABLE_HEADER.iter().map(|h| (*h).to_owned()).collect(),
        rows: files
            .entries
            .iter()
            .map(|file| {
                vec![
                    file.name.clone(),
                    file.presence.clone(),
                    file.description.clone(),
                ]
            })
            .collect(),
        borderless: true,
    }));

    tracing::debug!(
        blocks = blocks.len(),
        files = files.entries.len(),
        "Laid out reference"
    );

    Ok(Document {
        title: reference.name.clone(),
        blocks,
    })
}

fn term_definition(entry: &TermEntry) -> Definition {
    Definition {
        term: entry.name.clone(),
        definition: entry.definition.clone(),
        example: None,
    }
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_owned(),
    }
}

fn text(text: &str) -> Block {
    Block::Text {
        text: text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use refdoc_model::{ModelError, Record};

    use super::*;
    use crate::backend::OutputFormat;

    const SAMPLE: &str = r#"
name: GTFS Schedule Reference
revision_history_url: https://gtfs.org/revision-history
revision_date: "2025-10-28"
description: This document defines the format and structure of a GTFS dataset.
document_conventions:
  term_definitions:
    description: Terms used in this document.
    terms:
      - [Dataset, A complete set of files defined by this specification reference.]
      - [Record, A basic data structure comprised of a number of different field values.]
  presence_conditions:
    description: Presence conditions applicable to fields and files.
    conditions:
      - [Required, The field must be included.]
      - [Optional, The field may be omitted.]
  field_types:
    description: Field types.
    types:
      - [Color, A color encoded as a six-digit hexadecimal number.]
  field_signs:
    description: Signs applicable to numeric fields.
    signs: []
  dataset_attributes:
    description: Attributes used to describe a dataset.
    attributes:
      - [Primary key, The fields that uniquely identify a row., trip_id]
dataset_files:
  description: This specification defines the following files.
  files:
    - [agency.txt, Required, Transit agencies with service represented in this dataset.]
    - [stops.txt, Conditionally Required, Stops where vehicles pick up or drop off riders.]
"#;

    fn sample() -> ReferenceDocument {
        ReferenceDocument::from_yaml_str(SAMPLE).unwrap()
    }

    fn headings(doc: &Document) -> Vec<(u8, &str)> {
        doc.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    fn files_mut(doc: &mut ReferenceDocument) -> &mut Vec<Record> {
        doc.dataset_files
            .as_mut()
            .and_then(|listing| listing.files.as_mut())
            .unwrap()
    }

    #[test]
    fn test_block_order() {
        let doc = render(&sample()).unwrap();
        assert_eq!(
            doc.blocks[0],
            Block::Title {
                text: "GTFS Schedule Reference".to_owned()
            }
        );
        assert_eq!(
            doc.blocks[1],
            Block::RevisionNotice {
                name: "GTFS Schedule Reference".to_owned(),
                revised: Some("October 28, 2025".to_owned()),
                history_url: "https://gtfs.org/revision-history".to_owned(),
            }
        );
        assert_eq!(
            doc.blocks[2],
            Block::Text {
                text: "This document defines the format and structure of a GTFS dataset."
                    .to_owned()
            }
        );
        assert_eq!(
            headings(&doc),
            vec![
                (1, "Document Conventions"),
                (2, "Term Definitions"),
                (2, "Presence Conditions"),
                (2, "Field Types"),
                (2, "Field Signs"),
                (2, "Dataset Attributes"),
                (1, "Dataset Files"),
            ]
        );
        assert!(matches!(doc.blocks.last(), Some(Block::Table(_))));
    }

    #[test]
    fn test_term_definitions_in_order() {
        let doc = render(&sample()).unwrap();
        let lines: Vec<String> = doc
            .definitions_under("Term Definitions")
            .unwrap()
            .iter()
            .map(Definition::text)
            .collect();
        assert_eq!(
            lines,
            vec![
                "Dataset: A complete set of files defined by this specification reference.",
                "Record: A basic data structure comprised of a number of different field values.",
            ]
        );
    }

    #[test]
    fn test_attribute_has_example() {
        let doc = render(&sample()).unwrap();
        let attrs = doc.definitions_under("Dataset Attributes").unwrap();
        assert_eq!(attrs[0].example.as_deref(), Some("trip_id"));
        let terms = doc.definitions_under("Field Types").unwrap();
        assert!(terms[0].example.is_none());
    }

    #[test]
    fn test_empty_subsection_still_rendered() {
        let doc = render(&sample()).unwrap();
        let signs = doc.definitions_under("Field Signs").unwrap();
        assert!(signs.is_empty());
    }

    #[test]
    fn test_file_table() {
        let doc = render(&sample()).unwrap();
        let table = doc.table().unwrap();
        assert_eq!(table.header, vec!["File Name", "Presence", "Description"]);
        assert!(table.borderless);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "agency.txt");
        assert_eq!(table.rows[1][0], "stops.txt");
        assert_eq!(table.rows[1][1], "Conditionally Required");
    }

    #[test]
    fn test_table_has_one_row_per_file() {
        let mut input = sample();
        *files_mut(&mut input) = (0..31)
            .map(|i| Record::new([format!("file{i}.txt"), "Optional".to_owned(), "x".to_owned()]))
            .collect();
        let doc = render(&input).unwrap();
        let table = doc.table().unwrap();
        assert_eq!(table.rows.len(), 31);
        assert_eq!(table.rows[30][0], "file30.txt");
    }

    #[test]
    fn test_render_is_idempotent() {
        let input = sample();
        let first = render(&input).unwrap();
        let second = render(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.to_output(OutputFormat::Markdown).unwrap(),
            second.to_output(OutputFormat::Markdown).unwrap()
        );
        assert_eq!(
            first.to_output(OutputFormat::Html).unwrap(),
            second.to_output(OutputFormat::Html).unwrap()
        );
        assert_eq!(input, sample());
    }

    #[test]
    fn test_reversing_one_subsection_changes_only_it() {
        let original = render(&sample()).unwrap();

        let mut reversed_input = sample();
        if let Some(terms) = reversed_input
            .document_conventions
            .as_mut()
            .and_then(|c| c.term_definitions.as_mut())
            .and_then(|t| t.terms.as_mut())
        {
            terms.reverse();
        }
        let reversed = render(&reversed_input).unwrap();

        assert_eq!(original.blocks.len(), reversed.blocks.len());
        for (a, b) in original.blocks.iter().zip(&reversed.blocks) {
            match (a, b) {
                (
                    Block::DefinitionList { entries: left },
                    Block::DefinitionList { entries: right },
                ) if left.len() == 2 && left[0].term == "Dataset" => {
                    let mut expected = left.clone();
                    expected.reverse();
                    assert_eq!(&expected, right);
                }
                _ => assert_eq!(a, b),
            }
        }
    }

    #[test]
    fn test_missing_example_fails() {
        let mut input = sample();
        if let Some(attrs) = input
            .document_conventions
            .as_mut()
            .and_then(|c| c.dataset_attributes.as_mut())
            .and_then(|a| a.attributes.as_mut())
        {
            attrs.push(Record::new(["Unique rows", "Rows are unique."]));
        }
        let err = render(&input).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Model(ModelError::MalformedRecord {
                subsection: SubsectionKind::DatasetAttributes,
                index: 1,
                ..
            })
        ));
        assert!(err.to_string().contains("dataset_attributes at index 1"));
    }

    #[test]
    fn test_malformed_file_yields_no_table() {
        let mut input = sample();
        let mut files: Vec<Record> = (0..31)
            .map(|i| Record::new([format!("file{i}.txt"), "Optional".to_owned(), "x".to_owned()]))
            .collect();
        files[4] = Record::new(["file4.txt", "Optional"]);
        *files_mut(&mut input) = files;

        let result = render(&input);
        let Err(RenderError::Model(ModelError::MalformedRecord {
            subsection, index, ..
        })) = result
        else {
            panic!("expected a malformed record error, got {result:?}");
        };
        assert_eq!(subsection, SubsectionKind::DatasetFiles);
        assert_eq!(index, 4);
    }

    #[test]
    fn test_missing_conventions_fails() {
        let mut input = sample();
        input.document_conventions = None;
        let err = render(&input).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: document_conventions");
    }

    #[test]
    fn test_missing_dataset_files_fails() {
        let mut input = sample();
        input.dataset_files = None;
        assert!(matches!(
            render(&input),
            Err(RenderError::Model(ModelError::MissingField(_)))
        ));
    }

    #[test]
    fn test_without_attributes_subsection() {
        let mut input = sample();
        if let Some(conventions) = input.document_conventions.as_mut() {
            conventions.dataset_attributes = None;
        }
        let doc = render(&input).unwrap();
        assert!(!headings(&doc).contains(&(2, "Dataset Attributes")));
    }

    #[test]
    fn test_without_revision_date() {
        let mut input = sample();
        input.revision_date = None;
        let doc = render(&input).unwrap();
        assert!(matches!(
            &doc.blocks[1],
            Block::RevisionNotice { revised: None, .. }
        ));
    }

    #[test]
    fn test_invalid_revision_date() {
        let mut input = sample();
        input.revision_date = Some("October 2025".to_owned());
        assert!(matches!(
            render(&input),
            Err(RenderError::InvalidDate { .. })
        ));
    }
}
