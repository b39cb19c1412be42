//! Logical structure of a rendered reference.

use crate::backend::{OutputFormat, RenderBackend};
use crate::error::RenderError;
use crate::html::HtmlBackend;
use crate::markdown::MarkdownBackend;

/// Header of the dataset files table.
pub const FILE_TABLE_HEADER: [&str; 3] = ["File Name", "Presence", "Description"];

/// One entry of a definition list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Definition {
    pub term: String,
    pub definition: String,
    /// Worked example, shown emphasized after the definition.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub example: Option<String>,
}

impl Definition {
    /// Plain `term: definition` text, without the example.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}: {}", self.term, self.definition)
    }
}

/// A table with a literal header row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Render without cell borders.
    pub borderless: bool,
}

/// A block of the rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Block {
    /// Centered document title in an enlarged heading style.
    Title { text: String },
    /// Bold notice pointing at the revision history.
    RevisionNotice {
        name: String,
        /// Revision date already formatted for display.
        revised: Option<String>,
        history_url: String,
    },
    /// Formatted text, emitted verbatim.
    Text { text: String },
    Heading { level: u8, text: String },
    DefinitionList { entries: Vec<Definition> },
    Table(Table),
}

/// A rendered reference: blocks in output order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Write the document through a backend.
    #[must_use]
    pub fn write<B: RenderBackend>(&self) -> String {
        let mut out = String::with_capacity(8192);
        B::begin(&self.title, &mut out);
        for block in &self.blocks {
            match block {
                Block::Title { text } => B::title(text, &mut out),
                Block::RevisionNotice {
                    name,
                    revised,
                    history_url,
                } => B::revision_notice(name, revised.as_deref(), history_url, &mut out),
                Block::Text { text } => B::text(text, &mut out),
                Block::Heading { level, text } => B::heading(*level, text, &mut out),
                Block::DefinitionList { entries } => B::definition_list(entries, &mut out),
                Block::Table(table) => B::table(table, &mut out),
            }
        }
        B::end(&mut out);
        out
    }

    /// Produce the final output for a format.
    pub fn to_output(&self, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Markdown => Ok(self.write::<MarkdownBackend>()),
            OutputFormat::Html => Ok(self.write::<HtmlBackend>()),
            #[cfg(feature = "serde")]
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// The first table in the document, if any.
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.blocks.iter().find_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Definition list following the heading with the given text.
    #[must_use]
    pub fn definitions_under(&self, heading: &str) -> Option<&[Definition]> {
        let start = self.blocks.iter().position(
            |block| matches!(block, Block::Heading { text, .. } if text == heading),
        )?;
        self.blocks[start..]
            .iter()
            .skip(1)
            .take_while(|block| !matches!(block, Block::Heading { .. }))
            .find_map(|block| match block {
                Block::DefinitionList { entries } => Some(entries.as_slice()),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            title: "Ref".to_owned(),
            blocks: vec![
                Block::Heading {
                    level: 2,
                    text: "Term Definitions".to_owned(),
                },
                Block::DefinitionList {
                    entries: vec![Definition {
                        term: "Dataset".to_owned(),
                        definition: "A set.".to_owned(),
                        example: None,
                    }],
                },
                Block::Heading {
                    level: 2,
                    text: "Field Signs".to_owned(),
                },
                Block::Text {
                    text: "No entries.".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn test_definition_text() {
        let def = Definition {
            term: "Record".to_owned(),
            definition: "A basic data structure.".to_owned(),
            example: Some("ignored".to_owned()),
        };
        assert_eq!(def.text(), "Record: A basic data structure.");
    }

    #[test]
    fn test_definitions_under() {
        let doc = sample();
        let defs = doc.definitions_under("Term Definitions").unwrap();
        assert_eq!(defs.len(), 1);
        assert!(doc.definitions_under("Field Signs").is_none());
        assert!(doc.definitions_under("Missing").is_none());
    }

    #[test]
    fn test_table_absent() {
        assert!(sample().table().is_none());
    }
}
