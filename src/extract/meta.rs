//! Title and effective-date detection.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Body, DocumentMeta};

/// Marker identifying the effective-date paragraph.
pub const DATE_MARKER: &str = "生效日期";

/// Marker variants stripped when no date pattern matches.
const DATE_MARKER_LABELS: &[&str] = &["生效日期：", "生效日期:"];

/// `YYYY年M月D日` or `YYYY-M-D`, anywhere in the text.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}年\d{1,2}月\d{1,2}日|\d{4}-\d{1,2}-\d{1,2})").unwrap()
});

/// Detect the title and effective date of a document.
///
/// Only top-level paragraphs are scanned; tables are ignored.
pub fn detect_meta(body: &Body, source: &Path) -> DocumentMeta {
    let mut title: Option<String> = None;
    let mut effective_date: Option<String> = None;

    for paragraph in body.paragraphs() {
        let plain = paragraph.plain_text();
        let text = plain.trim();

        if title.is_none() && !text.is_empty() {
            title = Some(text.to_string());
        }
        if effective_date.is_none() {
            effective_date = effective_date_from(text);
        }
        if title.is_some() && effective_date.is_some() {
            break;
        }
    }

    let title = title.unwrap_or_else(|| {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("No leading paragraph, using file stem '{}' as title", stem);
        stem
    });

    DocumentMeta {
        title,
        effective_date,
    }
}

/// Extract the effective date from one paragraph's text.
///
/// Returns `None` when the text lacks the marker, or when nothing is left
/// after removing the marker label.
pub fn effective_date_from(text: &str) -> Option<String> {
    if !text.contains(DATE_MARKER) {
        return None;
    }
    if let Some(m) = DATE_PATTERN.find(text) {
        return Some(m.as_str().to_string());
    }

    let stripped = DATE_MARKER_LABELS
        .iter()
        .fold(text.to_string(), |acc, label| acc.replace(label, ""));
    let stripped = stripped.trim();
    (!stripped.is_empty()).then(|| stripped.to_string())
}

/// A paragraph holding the date marker label and nothing else.
pub fn is_bare_date_label(text: &str) -> bool {
    text.contains(DATE_MARKER) && effective_date_from(text).is_none()
}
