//! Markdown backend.
//!
//! Produces GitHub-flavored markdown. The title uses an inline `<h1>` so it
//! can be centered; every other block is plain markdown.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::document::{Definition, Table};
use crate::html::escape_html;

/// Markdown render backend.
pub struct MarkdownBackend;

impl RenderBackend for MarkdownBackend {
    fn end(out: &mut String) {
        let len = out.trim_end().len();
        out.truncate(len);
        out.push('\n');
    }

    fn title(text: &str, out: &mut String) {
        write!(out, "<h1 align=\"center\">{}</h1>\n\n", escape_html(text)).unwrap();
    }

    fn revision_notice(name: &str, revised: Option<&str>, history_url: &str, out: &mut String) {
        let name = escape_inline(name);
        match revised {
            Some(date) => write!(out, "**{name}, revised {}.", escape_inline(date)).unwrap(),
            None => write!(out, "**{name}.").unwrap(),
        }
        write!(
            out,
            " See [Revision History](<{}>) for more details.**\n\n",
            history_url.trim().replace('<', "\\<").replace('>', "\\>")
        )
        .unwrap();
    }

    fn text(text: &str, out: &mut String) {
        let text = text.trim_end();
        if !text.is_empty() {
            out.push_str(text);
            out.push_str("\n\n");
        }
    }

    fn heading(level: u8, text: &str, out: &mut String) {
        // Level 1 sits below the document title.
        let hashes = "#".repeat(usize::from(level.clamp(1, 5)) + 1);
        write!(out, "{hashes} {text}\n\n").unwrap();
    }

    fn definition_list(entries: &[Definition], out: &mut String) {
        if entries.is_empty() {
            return;
        }
        for entry in entries {
            let mut item = entry.text().trim().to_owned();
            if let Some(example) = &entry.example {
                let example = example.split_whitespace().collect::<Vec<_>>().join(" ");
                write!(item, " *Example: {example}*").unwrap();
            }
            writeln!(out, "- {}", indent_continuation(&item)).unwrap();
        }
        out.push('\n');
    }

    fn table(table: &Table, out: &mut String) {
        write_row(&table.header, out);
        out.push('|');
        for _ in &table.header {
            out.push_str("---|");
        }
        out.push('\n');
        for row in &table.rows {
            write_row(row, out);
        }
        out.push('\n');
    }
}

fn write_row(cells: &[String], out: &mut String) {
    out.push('|');
    for cell in cells {
        write!(out, " {} |", escape_cell(cell)).unwrap();
    }
    out.push('\n');
}

/// Indent every line after the first so the text stays inside its list item.
fn indent_continuation(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            if line.trim().is_empty() {
                continue;
            }
            result.push_str("  ");
        }
        result.push_str(line);
    }
    result
}

/// Escape characters that would end or open inline markup.
fn escape_inline(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Keep a cell on one line and its pipes literal.
fn escape_cell(cell: &str) -> String {
    cell.trim().replace('|', "\\|").replace('\n', "<br>")
}
