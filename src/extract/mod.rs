//! Content extraction from a parsed Word body.
//!
//! Walks the body in document order, removes the title and effective-date
//! paragraphs, infers a heading level for every remaining paragraph and
//! renders tables to markup.

mod heading;
mod inline;
mod meta;
mod table;

pub use heading::{
    infer_heading_level, rule, HeadingCandidate, HeadingRule, HEADING_RULES, SPECIAL_SUBHEADING,
};
pub(crate) use heading::CHINESE_ORDINAL;
pub use inline::format_paragraph;
pub use meta::{detect_meta, effective_date_from, is_bare_date_label, DATE_MARKER};
pub use table::render_table;

use std::path::Path;

use crate::model::{Block, Body, ContentItem, Extraction};

/// Extract content items and metadata from a document body.
///
/// `source` is the document path; its stem becomes the title when the
/// body has no non-empty paragraph.
pub fn extract(body: &Body, source: &Path) -> Extraction {
    let meta = detect_meta(body, source);
    let mut items = Vec::with_capacity(body.blocks.len());
    let mut title_skipped = false;
    let mut date_skipped = false;

    for block in &body.blocks {
        match block {
            Block::Paragraph(paragraph) => {
                let plain = paragraph.plain_text();
                let trimmed = plain.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if !title_skipped && trimmed == meta.title {
                    title_skipped = true;
                    continue;
                }

                if is_bare_date_label(trimmed) {
                    continue;
                }

                if !date_skipped && is_date_paragraph(trimmed, meta.effective_date.as_deref()) {
                    date_skipped = true;
                    continue;
                }

                let level = infer_heading_level(&paragraph.style_name, &plain);
                items.push(ContentItem::paragraph(
                    format_paragraph(paragraph),
                    plain.as_str(),
                    paragraph.style_name.as_str(),
                    level,
                ));
            }
            Block::Table(table) => items.push(ContentItem::table(render_table(table))),
        }
    }

    log::debug!(
        "Extracted {} items (title: '{}', date: {:?})",
        items.len(),
        meta.title,
        meta.effective_date
    );
    Extraction { items, meta }
}

/// Whether `text` is the paragraph the detected date was read from.
fn is_date_paragraph(text: &str, date: Option<&str>) -> bool {
    date.is_some_and(|date| text == date || effective_date_from(text).as_deref() == Some(date))
}
