//! Level-2 heading number normalization.
//!
//! Legal documents often mix `一、` and `1. ` numbering, skip numbers or
//! leave the first heading unnumbered. [`normalize_headings`] picks the
//! convention most level-2 headings already use and renumbers every
//! level-2 heading sequentially in that convention.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::CHINESE_ORDINAL;
use crate::markup::{self, INLINE_TAGS};
use crate::model::ContentItem;

/// Arabic heading prefix: number, dot, whitespace.
static ARABIC_ORDINAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Chinese prefix and the phrase after it; the phrase may span lines.
static CHINESE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([一二三四五六七八九十]+、\s*)(.+)$").unwrap());

/// Arabic prefix and the phrase after it.
static ARABIC_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)^(\d+\.\s+)(.+)$").unwrap());

const CHINESE_DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Heading numbering convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingStyle {
    /// `一、`, `二、`, ...
    Chinese,
    /// `1. `, `2. `, ...
    Arabic,
}

impl NumberingStyle {
    /// Render the prefix for a 1-based heading number.
    pub fn prefix(self, number: usize) -> String {
        match self {
            NumberingStyle::Chinese => format!("{}、", to_chinese_numeral(number)),
            NumberingStyle::Arabic => format!("{}. ", number),
        }
    }
}

/// Convert a number to Chinese numerals.
///
/// Supports 1 to 99; other values fall back to decimal digits.
pub fn to_chinese_numeral(number: usize) -> String {
    match number {
        1..=9 => CHINESE_DIGITS[number].to_string(),
        10 => "十".to_string(),
        11..=19 => format!("十{}", CHINESE_DIGITS[number - 10]),
        20..=99 => format!(
            "{}十{}",
            CHINESE_DIGITS[number / 10],
            CHINESE_DIGITS[number % 10]
        ),
        _ => number.to_string(),
    }
}

/// Tally of numbering prefixes among level-2 headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberingCensus {
    /// Headings starting with a Chinese ordinal
    pub chinese: usize,
    /// Headings starting with `N. `
    pub arabic: usize,
    /// Headings with neither
    pub unnumbered: usize,
}

impl NumberingCensus {
    /// Count prefixes over plain heading texts.
    pub fn count<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut census = Self::default();
        for text in texts {
            let text = text.trim();
            if CHINESE_ORDINAL.is_match(text) {
                census.chinese += 1;
            } else if ARABIC_ORDINAL.is_match(text) {
                census.arabic += 1;
            } else {
                census.unnumbered += 1;
            }
        }
        census
    }

    /// The dominant convention; Arabic on ties and when nothing is numbered.
    pub fn dominant(&self) -> NumberingStyle {
        if self.chinese > self.arabic && self.chinese > 0 {
            NumberingStyle::Chinese
        } else {
            NumberingStyle::Arabic
        }
    }
}

/// Renumber every level-2 heading in place.
///
/// Returns the convention applied, or `None` when fewer than two level-2
/// headings exist and nothing was changed. Both the formatted and the plain
/// text of each heading are rewritten.
pub fn normalize_headings(items: &mut [ContentItem]) -> Option<NumberingStyle> {
    let headings: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_heading_level(2))
        .map(|(i, _)| i)
        .collect();

    if headings.len() < 2 {
        return None;
    }

    let census = NumberingCensus::count(headings.iter().filter_map(|&i| items[i].plain_text()));
    let style = census.dominant();
    log::debug!(
        "Level-2 numbering: {} chinese, {} arabic, {} unnumbered -> {:?}",
        census.chinese,
        census.arabic,
        census.unnumbered,
        style
    );

    for (position, &index) in headings.iter().enumerate() {
        if let ContentItem::Paragraph {
            formatted_text,
            plain_text,
            ..
        } = &mut items[index]
        {
            let (bare_formatted, bare_plain) = split_heading(formatted_text, plain_text);
            let prefix = style.prefix(position + 1);
            *formatted_text = format!("{}{}", prefix, bare_formatted);
            *plain_text = format!("{}{}", prefix, bare_plain);
        }
    }

    Some(style)
}

/// Consume a sequence of items and return it normalized.
pub fn normalized(mut items: Vec<ContentItem>) -> Vec<ContentItem> {
    normalize_headings(&mut items);
    items
}

/// Split a heading into its bare formatted and plain phrase, dropping any
/// recognized numbering prefix.
fn split_heading(formatted: &str, plain: &str) -> (String, String) {
    let plain = plain.trim();
    let caps = CHINESE_SPLIT
        .captures(plain)
        .or_else(|| ARABIC_SPLIT.captures(plain));

    match caps {
        Some(caps) => {
            let prefix = &caps[1];
            let phrase = &caps[2];
            let bare_formatted = strip_markup_prefix(formatted, prefix)
                .unwrap_or_else(|| markup::text(phrase));
            (bare_formatted, phrase.to_string())
        }
        None => (formatted.to_string(), plain.to_string()),
    }
}

/// Remove `prefix` from the start of formatted text, stepping over inline
/// tags so the markup around the phrase survives.
///
/// Returns `None` when the formatted text does not begin with the prefix.
fn strip_markup_prefix(formatted: &str, prefix: &str) -> Option<String> {
    let mut kept = String::new();
    let mut rest = formatted.trim_start();
    let mut wanted = prefix.chars().peekable();
    let mut matched_any = false;

    while let Some(&expected) = wanted.peek() {
        if rest.starts_with('<') {
            let end = rest.find('>')? + 1;
            kept.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }
        let c = rest.chars().next()?;
        if c == expected {
            wanted.next();
            matched_any = true;
        } else if !(c.is_whitespace() && !matched_any) {
            return None;
        }
        rest = &rest[c.len_utf8()..];
    }

    kept.push_str(rest);
    Some(remove_empty_tags(kept))
}

fn remove_empty_tags(mut html: String) -> String {
    loop {
        let before = html.len();
        for tag in INLINE_TAGS {
            html = html.replace(&format!("<{tag}></{tag}>"), "");
        }
        if html.len() == before {
            return html;
        }
    }
}
