//! Paragraph style resolution from `word/styles.xml`.

use std::collections::HashMap;

use roxmltree::Document as XmlDocument;

use super::xml::{attr, child, is_tag, strip_bom};
use crate::error::Result;
use crate::model::DEFAULT_STYLE_NAME;

/// Built-in styles whose stored names are lowercase but whose UI names are
/// capitalized.
const BUILTIN_UI_NAMES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("title", "Title"),
];

/// Paragraph styles of a document, keyed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_name: Option<String>,
}

impl StyleSheet {
    /// Create an empty style sheet (every lookup resolves to "Normal").
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `word/styles.xml` content.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = XmlDocument::parse(strip_bom(xml))?;
        let mut sheet = Self::new();

        for style in doc.descendants().filter(|n| is_tag(n, "style")) {
            if attr(&style, "type") != Some("paragraph") {
                continue;
            }
            let Some(id) = attr(&style, "styleId") else {
                continue;
            };
            let name = child(&style, "name")
                .and_then(|n| attr(&n, "val"))
                .map(ui_name)
                .unwrap_or_else(|| id.to_string());

            if matches!(attr(&style, "default"), Some("1") | Some("true")) {
                sheet.default_name = Some(name.clone());
            }
            sheet.names.insert(id.to_string(), name);
        }

        log::debug!("Loaded {} paragraph styles", sheet.names.len());
        Ok(sheet)
    }

    /// Register a style id and name.
    pub fn insert(&mut self, id: impl Into<String>, name: &str) {
        self.names.insert(id.into(), ui_name(name));
    }

    /// Name of the default paragraph style.
    pub fn default_name(&self) -> &str {
        self.default_name.as_deref().unwrap_or(DEFAULT_STYLE_NAME)
    }

    /// Resolve a paragraph's style id to its name.
    ///
    /// Missing or unknown ids resolve to the default paragraph style.
    pub fn resolve(&self, style_id: Option<&str>) -> String {
        style_id
            .and_then(|id| self.names.get(id))
            .map(String::as_str)
            .unwrap_or_else(|| self.default_name())
            .to_string()
    }

    /// Number of known paragraph styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no styles are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Map a stored style name to the name shown in Word's UI.
fn ui_name(stored: &str) -> String {
    if let Some(level) = stored.strip_prefix("heading ") {
        if level.chars().all(|c| c.is_ascii_digit()) && !level.is_empty() {
            return format!("Heading {}", level);
        }
    }
    BUILTIN_UI_NAMES
        .iter()
        .find(|(internal, _)| *internal == stored)
        .map(|(_, ui)| ui.to_string())
        .unwrap_or_else(|| stored.to_string())
}
