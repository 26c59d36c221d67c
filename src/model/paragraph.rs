//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// Style name used when a paragraph carries no explicit style.
pub(crate) const DEFAULT_STYLE_NAME: &str = "Normal";

/// A paragraph of text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Resolved style name (e.g. "Normal", "Heading 2", "List Paragraph")
    pub style_name: String,

    /// Runs and hyperlinks in document order
    pub content: Vec<Inline>,
}

impl Paragraph {
    /// Create a new empty paragraph with the default style.
    pub fn new() -> Self {
        Self {
            style_name: DEFAULT_STYLE_NAME.to_string(),
            content: Vec::new(),
        }
    }

    /// Create a paragraph with one plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Set the style name.
    pub fn with_style(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    /// Add a text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(Inline::Run(run));
    }

    /// Add a hyperlink.
    pub fn add_hyperlink(&mut self, link: Hyperlink) {
        self.content.push(Inline::Hyperlink(link));
    }

    /// Plain text of the paragraph: every run and hyperlink, in order.
    pub fn plain_text(&self) -> String {
        self.content.iter().map(|c| c.text()).collect()
    }

    /// Direct runs of the paragraph, excluding runs nested in hyperlinks.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            Inline::Run(run) => Some(run),
            Inline::Hyperlink(_) => None,
        })
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// A text run with emphasis flags
    Run(TextRun),

    /// A hyperlink wrapping one or more runs
    Hyperlink(Hyperlink),
}

impl Inline {
    /// Text carried by this inline element.
    pub fn text(&self) -> String {
        match self {
            Inline::Run(run) => run.text.clone(),
            Inline::Hyperlink(link) => link.text(),
        }
    }
}

/// A run of text with consistent emphasis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,
}

impl TextRun {
    /// Create a new text run without emphasis.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::new(text)
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::new(text)
        }
    }

    /// Create an underlined text run.
    pub fn underline(text: impl Into<String>) -> Self {
        Self {
            underline: true,
            ..Self::new(text)
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A hyperlink element.
///
/// Word stores hyperlinks as a separate element wrapping their own runs.
/// The emphasis flags here are recovered from the run properties inside
/// the hyperlink and apply to the whole link text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Runs inside the hyperlink
    pub runs: Vec<TextRun>,

    /// Relationship id of the link target, if any
    pub relationship_id: Option<String>,

    /// Bold link text
    pub bold: bool,

    /// Italic link text
    pub italic: bool,

    /// Underlined link text
    pub underline: bool,
}

impl Hyperlink {
    /// Create a hyperlink from a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::new(text)],
            ..Default::default()
        }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_includes_hyperlinks_in_order() {
        let mut p = Paragraph::new();
        p.add_run(TextRun::new("请阅读"));
        p.add_hyperlink(Hyperlink::with_text("《隐私政策》"));
        p.add_run(TextRun::bold("。"));
        assert_eq!(p.plain_text(), "请阅读《隐私政策》。");
        assert_eq!(p.runs().count(), 2);
    }

    #[test]
    fn test_blank_paragraph() {
        assert!(Paragraph::with_text("  \t ").is_blank());
        assert!(Paragraph::new().is_blank());
        assert!(!Paragraph::with_text("一、总则").is_blank());
    }

    #[test]
    fn test_default_style() {
        let p = Paragraph::new();
        assert_eq!(p.style_name, "Normal");
        let p = Paragraph::with_text("x").with_style("Heading 1");
        assert_eq!(p.style_name, "Heading 1");
    }
}
