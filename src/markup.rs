//! Small HTML markup helpers shared by extraction and rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Escape text for element content.
pub fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

/// Escape text for a double-quoted attribute value.
pub fn attribute(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

/// Wrap already-escaped markup in an element.
pub fn wrap(tag: &str, inner: &str) -> String {
    format!("<{tag}>{inner}</{tag}>")
}

/// Inline emphasis tags that formatted text may open with.
pub(crate) const INLINE_TAGS: &[&str] = &["strong", "em", "u"];
