//! Inline emphasis extraction.

use crate::markup::{self, wrap};
use crate::model::{Hyperlink, Inline, Paragraph, TextRun};

/// Render a paragraph's runs and hyperlinks as escaped text with emphasis
/// tags, in document order.
///
/// Falls back to the escaped plain text when no inline element carries
/// text.
pub fn format_paragraph(paragraph: &Paragraph) -> String {
    let parts: Vec<String> = paragraph
        .content
        .iter()
        .filter_map(|inline| match inline {
            Inline::Run(run) => format_run(run),
            Inline::Hyperlink(link) => format_hyperlink(link),
        })
        .collect();

    if parts.is_empty() {
        return markup::text(&paragraph.plain_text());
    }
    parts.concat()
}

/// A normal run gets at most one emphasis tag: bold, else italic, else
/// underline.
fn format_run(run: &TextRun) -> Option<String> {
    if run.is_empty() {
        return None;
    }
    let text = markup::text(&run.text);
    let formatted = if run.bold {
        wrap("strong", &text)
    } else if run.italic {
        wrap("em", &text)
    } else if run.underline {
        wrap("u", &text)
    } else {
        text
    };
    Some(formatted)
}

/// Hyperlink emphasis flags combine, nesting strong inside em inside u.
fn format_hyperlink(link: &Hyperlink) -> Option<String> {
    let text = link.text();
    if text.is_empty() {
        return None;
    }
    let mut formatted = markup::text(&text);
    if link.bold {
        formatted = wrap("strong", &formatted);
    }
    if link.italic {
        formatted = wrap("em", &formatted);
    }
    if link.underline {
        formatted = wrap("u", &formatted);
    }
    Some(formatted)
}
