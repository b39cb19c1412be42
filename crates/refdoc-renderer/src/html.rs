//! HTML backend.
//!
//! Produces a standalone HTML5 page. Descriptions, definitions, examples and
//! table cells are markdown and go through `pulldown-cmark`, as they do when
//! the markdown output is viewed. Titles, headings and the table header are
//! escaped.

use std::fmt::Write;

use pulldown_cmark::{Options, Parser};

use crate::backend::RenderBackend;
use crate::document::{Definition, Table};

const STYLE: &str = "\
h1.title { text-align: center; font-size: 2.5em; }
ul.definitions { list-style: none; padding-left: 0; }
ul.definitions .term { font-weight: bold; }
table.borderless, table.borderless th, table.borderless td { border: none; border-collapse: collapse; }
table.borderless th, table.borderless td { padding: 0.25em 1em 0.25em 0; text-align: left; vertical-align: top; }
";

/// HTML render backend.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn begin(title: &str, out: &mut String) {
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        writeln!(out, "<title>{}</title>", escape_html(title)).unwrap();
        writeln!(out, "<style>\n{STYLE}</style>").unwrap();
        out.push_str("</head>\n<body>\n");
    }

    fn end(out: &mut String) {
        out.push_str("</body>\n</html>\n");
    }

    fn title(text: &str, out: &mut String) {
        writeln!(out, "<h1 class=\"title\">{}</h1>", escape_html(text)).unwrap();
    }

    fn revision_notice(name: &str, revised: Option<&str>, history_url: &str, out: &mut String) {
        out.push_str("<p class=\"revision-notice\"><strong>");
        match revised {
            Some(date) => {
                write!(out, "{}, revised {}.", escape_html(name), escape_html(date)).unwrap();
            }
            None => write!(out, "{}.", escape_html(name)).unwrap(),
        }
        writeln!(
            out,
            " See <a href=\"{}\">Revision History</a> for more details.</strong></p>",
            escape_html(history_url)
        )
        .unwrap();
    }

    fn text(text: &str, out: &mut String) {
        pulldown_cmark::html::push_html(out, Parser::new_ext(text, markdown_options()));
    }

    fn heading(level: u8, text: &str, out: &mut String) {
        let level = level.clamp(1, 5) + 1;
        writeln!(out, "<h{level}>{}</h{level}>", escape_html(text)).unwrap();
    }

    fn definition_list(entries: &[Definition], out: &mut String) {
        out.push_str("<ul class=\"definitions\">\n");
        for entry in entries {
            write!(
                out,
                "<li><span class=\"term\">{}</span>: {}",
                render_inline(&entry.term),
                render_inline(&entry.definition)
            )
            .unwrap();
            if let Some(example) = &entry.example {
                write!(out, " <em>Example: {}</em>", render_inline(example)).unwrap();
            }
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n");
    }

    fn table(table: &Table, out: &mut String) {
        if table.borderless {
            out.push_str("<table class=\"borderless\">\n");
        } else {
            out.push_str("<table>\n");
        }
        out.push_str("<thead><tr>");
        for cell in &table.header {
            write!(out, "<th>{}</th>", escape_html(cell)).unwrap();
        }
        out.push_str("</tr></thead>\n<tbody>\n");
        for row in &table.rows {
            out.push_str("<tr>");
            for cell in row {
                write!(out, "<td>{}</td>", render_inline(cell)).unwrap();
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
    }
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Render a short markdown value. A single paragraph loses its `<p>` wrapper
/// so it can sit inside a list item or table cell.
fn render_inline(text: &str) -> String {
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, Parser::new_ext(text.trim(), markdown_options()));
    let html = html.trim_end();
    match html.strip_prefix("<p>").and_then(|s| s.strip_suffix("</p>")) {
        Some(inner) if !inner.contains("<p>") => inner.to_owned(),
        _ => html.to_owned(),
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
