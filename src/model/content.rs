//! Extracted content types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One item of extracted document content, in original block order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A paragraph with an inferred heading level
    Paragraph {
        /// Text with inline emphasis markup (`<strong>`, `<em>`, `<u>`)
        formatted_text: String,
        /// Markup-free text, used for pattern matching
        plain_text: String,
        /// Style name of the source paragraph
        style_name: String,
        /// 0 for body text, 1..=6 for headings
        heading_level: u8,
    },

    /// A table, already rendered to markup
    Table {
        /// Table markup, inserted verbatim
        rendered_markup: String,
    },
}

impl ContentItem {
    /// Create a paragraph item.
    pub fn paragraph(
        formatted_text: impl Into<String>,
        plain_text: impl Into<String>,
        style_name: impl Into<String>,
        heading_level: u8,
    ) -> Self {
        ContentItem::Paragraph {
            formatted_text: formatted_text.into(),
            plain_text: plain_text.into(),
            style_name: style_name.into(),
            heading_level,
        }
    }

    /// Create a table item.
    pub fn table(rendered_markup: impl Into<String>) -> Self {
        ContentItem::Table {
            rendered_markup: rendered_markup.into(),
        }
    }

    /// Heading level of a paragraph item; `None` for tables.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            ContentItem::Paragraph { heading_level, .. } => Some(*heading_level),
            ContentItem::Table { .. } => None,
        }
    }

    /// Plain text of a paragraph item; `None` for tables.
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            ContentItem::Paragraph { plain_text, .. } => Some(plain_text),
            ContentItem::Table { .. } => None,
        }
    }

    /// Formatted text of a paragraph item; `None` for tables.
    pub fn formatted_text(&self) -> Option<&str> {
        match self {
            ContentItem::Paragraph { formatted_text, .. } => Some(formatted_text),
            ContentItem::Table { .. } => None,
        }
    }

    /// Check if this is a paragraph at the given heading level.
    pub fn is_heading_level(&self, level: u8) -> bool {
        self.heading_level() == Some(level)
    }

    /// Check if this is a table item.
    pub fn is_table(&self) -> bool {
        matches!(self, ContentItem::Table { .. })
    }
}

/// Document-level metadata detected during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// First non-empty paragraph, or the source file stem
    pub title: String,

    /// Effective date text, if a dated paragraph was found
    pub effective_date: Option<String>,
}

/// Output of the extractor: content items plus metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    /// Content in original order, title and date paragraphs removed
    pub items: Vec<ContentItem>,

    /// Detected title and effective date
    pub meta: DocumentMeta,
}

impl Extraction {
    /// Count paragraph items per heading level (index 0 = body text).
    pub fn heading_counts(&self) -> [usize; 7] {
        let mut counts = [0usize; 7];
        for level in self.items.iter().filter_map(|i| i.heading_level()) {
            if let Some(slot) = counts.get_mut(level as usize) {
                *slot += 1;
            }
        }
        counts
    }

    /// Number of table items.
    pub fn table_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_table()).count()
    }

    /// Serialize items and metadata to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}
