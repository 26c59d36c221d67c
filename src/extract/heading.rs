//! Heading-level inference.
//!
//! Levels are decided by an ordered table of named rules. Each rule looks
//! at the paragraph's style name and trimmed text and either claims the
//! paragraph with a level or passes. The first rule that claims wins; a
//! paragraph no rule claims is body text (level 0).

use std::sync::LazyLock;

use regex::Regex;

/// Chinese ordinal heading prefix, e.g. `一、` or `十二、`.
pub(crate) static CHINESE_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[一二三四五六七八九十]+、").unwrap());

/// Numbered heading: number, dot, whitespace, then a non-digit.
static NUMBER_DOT_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+[^\d]").unwrap());

/// Sub-numbered heading such as `2.1 `.
static SUB_NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\d+\s+").unwrap());

/// Numbered list heading such as `3、`.
static NUMBER_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+、").unwrap());

/// Number followed by a dot, anywhere a list item could start.
static NUMBER_DOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

/// The one phrase always treated as a level-3 heading.
pub const SPECIAL_SUBHEADING: &str = "权限申请使用";

/// Sentence punctuation that disqualifies a short line from being a heading.
const SENTENCE_PUNCTUATION: &[char] = &['。', '！', '？', '；', '，'];

/// Characters that mark a line as a list item or aside.
const LIST_MARKER_STARTS: &[char] = &['（', '(', '【', '[', '·', '—', '-'];

/// Paragraphs in a list style this long or longer are body text.
const LIST_PARAGRAPH_BODY_LEN: usize = 50;

/// Sub-numbered lines up to this length are headings.
const SUB_NUMBERED_MAX_LEN: usize = 30;

/// Short-line headings must be shorter than this.
const SHORT_LINE_MAX_LEN: usize = 30;

/// What a heading rule looks at.
#[derive(Debug, Clone, Copy)]
pub struct HeadingCandidate<'a> {
    /// Paragraph style name
    pub style_name: &'a str,
    /// Trimmed paragraph text
    pub text: &'a str,
    /// Length of `text` in characters
    pub char_len: usize,
}

impl<'a> HeadingCandidate<'a> {
    /// Build a candidate; `text` is trimmed here.
    pub fn new(style_name: &'a str, text: &'a str) -> Self {
        let text = text.trim();
        Self {
            style_name,
            text,
            char_len: text.chars().count(),
        }
    }
}

/// A named heading rule.
#[derive(Debug, Clone, Copy)]
pub struct HeadingRule {
    /// Short name, for logs and tests
    pub name: &'static str,
    /// Returns the level when the rule claims the paragraph
    pub classify: fn(&HeadingCandidate) -> Option<u8>,
}

impl HeadingRule {
    /// Apply the rule.
    pub fn apply(&self, candidate: &HeadingCandidate) -> Option<u8> {
        (self.classify)(candidate)
    }
}

/// All heading rules in priority order.
pub const HEADING_RULES: &[HeadingRule] = &[
    HeadingRule {
        name: "heading-style",
        classify: heading_style,
    },
    HeadingRule {
        name: "chinese-ordinal",
        classify: chinese_ordinal,
    },
    HeadingRule {
        name: "number-dot-title",
        classify: number_dot_title,
    },
    HeadingRule {
        name: "list-paragraph",
        classify: list_paragraph,
    },
    HeadingRule {
        name: "short-sub-numbered",
        classify: short_sub_numbered,
    },
    HeadingRule {
        name: "number-comma",
        classify: number_comma,
    },
    HeadingRule {
        name: "special-phrase",
        classify: special_phrase,
    },
    HeadingRule {
        name: "short-line",
        classify: short_line,
    },
];

/// Infer the heading level of a paragraph: 0 for body text, 1..=6 for headings.
pub fn infer_heading_level(style_name: &str, text: &str) -> u8 {
    let candidate = HeadingCandidate::new(style_name, text);
    for rule in HEADING_RULES {
        if let Some(level) = rule.apply(&candidate) {
            log::trace!("'{}' -> h{} by {}", candidate.text, level, rule.name);
            return level;
        }
    }
    0
}

/// Look up a rule by name.
pub fn rule(name: &str) -> Option<&'static HeadingRule> {
    HEADING_RULES.iter().find(|r| r.name == name)
}

/// Style names containing "Heading N" map to level N, lowest N first.
fn heading_style(c: &HeadingCandidate) -> Option<u8> {
    (1..=6u8).find(|n| c.style_name.contains(&format!("Heading {}", n)))
}

fn chinese_ordinal(c: &HeadingCandidate) -> Option<u8> {
    CHINESE_ORDINAL.is_match(c.text).then_some(2)
}

fn number_dot_title(c: &HeadingCandidate) -> Option<u8> {
    NUMBER_DOT_TITLE.is_match(c.text).then_some(2)
}

/// Sub-numbered lines are headings only while short; longer ones are
/// numbered body clauses.
fn short_sub_numbered(c: &HeadingCandidate) -> Option<u8> {
    (SUB_NUMBERED.is_match(c.text) && c.char_len <= SUB_NUMBERED_MAX_LEN).then_some(3)
}

fn number_comma(c: &HeadingCandidate) -> Option<u8> {
    NUMBER_COMMA.is_match(c.text).then_some(3)
}

fn special_phrase(c: &HeadingCandidate) -> Option<u8> {
    (c.text == SPECIAL_SUBHEADING).then_some(3)
}

/// "List Paragraph" styled blocks are headings unless they open with a
/// bracketed marker or run long.
fn list_paragraph(c: &HeadingCandidate) -> Option<u8> {
    if !c.style_name.contains("List Paragraph") {
        return None;
    }
    if c.text.starts_with('【') || c.char_len >= LIST_PARAGRAPH_BODY_LEN {
        Some(0)
    } else {
        Some(2)
    }
}

/// Short lines without sentence punctuation or list markers are headings.
fn short_line(c: &HeadingCandidate) -> Option<u8> {
    let is_short = c.char_len < SHORT_LINE_MAX_LEN;
    let has_punctuation = c.text.contains(SENTENCE_PUNCTUATION);
    let starts_with_marker = c.text.starts_with(LIST_MARKER_STARTS)
        || NUMBER_COMMA.is_match(c.text)
        || NUMBER_DOT.is_match(c.text);

    (is_short && !has_punctuation && !starts_with_marker).then_some(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(style: &str, text: &str) -> u8 {
        infer_heading_level(style, text)
    }

    #[test]
    fn test_rules_are_ordered() {
        let names: Vec<_> = HEADING_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "heading-style",
                "chinese-ordinal",
                "number-dot-title",
                "list-paragraph",
                "short-sub-numbered",
                "number-comma",
                "special-phrase",
                "short-line",
            ]
        );
    }

    #[test]
    fn test_heading_style_wins() {
        assert_eq!(level("Heading 1", "这是一个很长的句子，包含标点符号。"), 1);
        assert_eq!(level("Heading 4", "1.1 节"), 4);
        assert_eq!(level("Heading 6", "x"), 6);
        // "Heading 10" contains "Heading 1"
        assert_eq!(level("Heading 10", "x"), 1);
    }

    #[test]
    fn test_chinese_ordinal() {
        assert_eq!(level("Normal", "一、总则"), 2);
        assert_eq!(level("Normal", "十二、附则，以及其他很长的内容说明。"), 2);
        assert_eq!(rule("chinese-ordinal").unwrap().apply(&HeadingCandidate::new("Normal", "（一）说明")), None);
    }

    #[test]
    fn test_number_dot_title() {
        assert_eq!(level("Normal", "2. 定义，包括以下内容。"), 2);
        let r = rule("number-dot-title").unwrap();
        assert_eq!(r.apply(&HeadingCandidate::new("Normal", "2. 定义")), Some(2));
        assert_eq!(r.apply(&HeadingCandidate::new("Normal", "2.1 定义")), None);
        assert_eq!(r.apply(&HeadingCandidate::new("Normal", "2. 1")), None);
    }

    // Documented special case: a "List Paragraph" block is a heading unless it
    // starts with 【 or is at least 50 characters long.
    #[test]
    fn test_list_paragraph_special_case() {
        assert_eq!(level("List Paragraph", "个人信息的收集，和使用"), 2);
        assert_eq!(level("List Paragraph", "【特别提示】请仔细阅读"), 0);
        let long: String = "很".repeat(50);
        assert_eq!(level("List Paragraph", &long), 0);
        let just_short: String = "很".repeat(49) + "，";
        assert_eq!(just_short.chars().count(), 50);
        assert_eq!(level("List Paragraph", &just_short), 0);
        let under: String = "很".repeat(48) + "，";
        assert_eq!(level("List Paragraph", &under), 2);
    }

    #[test]
    fn test_sub_numbered_length_limit() {
        assert_eq!(level("Normal", "2.1 收集的信息"), 3);
        let long = format!("9.1 {}", "我们会根据法律法规的要求保存您的信息并在期限届满后删除或匿名化处理");
        assert!(long.chars().count() > 30);
        assert_eq!(level("Normal", &long), 0);
    }

    #[test]
    fn test_number_comma_and_special_phrase() {
        assert_eq!(level("Normal", "1、账号注册，需要手机号。"), 3);
        assert_eq!(level("Normal", "权限申请使用"), 3);
        assert_eq!(level("Normal", "  权限申请使用  "), 3);
    }

    #[test]
    fn test_short_line_heuristic() {
        assert_eq!(level("Normal", "未成年人保护"), 2);
        assert_eq!(level("Normal", "我们如何使用信息。"), 0);
        assert_eq!(level("Normal", "（1）设备信息"), 0);
        assert_eq!(level("Normal", "(a) device"), 0);
        assert_eq!(level("Normal", "【注意】"), 0);
        assert_eq!(level("Normal", "[注意]"), 0);
        assert_eq!(level("Normal", "·列表项"), 0);
        assert_eq!(level("Normal", "—破折号"), 0);
        assert_eq!(level("Normal", "-连字符"), 0);
        assert_eq!(level("Normal", "3.附录"), 0);
    }

    #[test]
    fn test_body_text_fallback() {
        let long = "本协议是您与我们之间关于使用本服务所订立的协议，请您务必审慎阅读并充分理解各条款内容。";
        assert_eq!(level("Normal", long), 0);
        assert_eq!(level("Normal", &"字".repeat(30)), 0);
        assert_eq!(level("Normal", &"字".repeat(29)), 2);
    }
}
