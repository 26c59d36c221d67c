//! Document kinds and output file naming.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `YYYY年M月D日` at the start of the text.
static CHINESE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})年(\d{1,2})月(\d{1,2})日").unwrap());

/// `YYYY-M-D` at the start of the text.
static DASHED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})").unwrap());

/// Kind of agreement document, used for file naming and footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// User agreement / terms of service
    UserAgreement,
    /// Privacy policy
    PrivacyPolicy,
    /// Children's privacy policy
    ChildrenPrivacy,
    /// Anything else (e.g. third-party sharing lists)
    Document,
}

impl DocumentKind {
    /// All kinds in footer order.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::UserAgreement,
        DocumentKind::PrivacyPolicy,
        DocumentKind::ChildrenPrivacy,
        DocumentKind::Document,
    ];

    /// File name slug.
    pub fn slug(self) -> &'static str {
        match self {
            DocumentKind::UserAgreement => "user-agreement",
            DocumentKind::PrivacyPolicy => "privacy-policy",
            DocumentKind::ChildrenPrivacy => "children-privacy",
            DocumentKind::Document => "document",
        }
    }

    /// Footer link label.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::UserAgreement => "用户协议",
            DocumentKind::PrivacyPolicy => "隐私协议",
            DocumentKind::ChildrenPrivacy => "儿童隐私保护",
            DocumentKind::Document => "第三方清单",
        }
    }

    /// Classify a document by its title.
    pub fn from_title(title: &str) -> Self {
        if title.contains("隐私") && title.contains("儿童") {
            DocumentKind::ChildrenPrivacy
        } else if title.contains("隐私") {
            DocumentKind::PrivacyPolicy
        } else if title.contains("用户") && (title.contains("协议") || title.contains("服务")) {
            DocumentKind::UserAgreement
        } else {
            DocumentKind::Document
        }
    }

    /// Classify a rendered page by its file stem; unknown stems count as
    /// user agreements.
    pub fn from_file_stem(stem: &str) -> Self {
        let stem = stem.to_lowercase();
        if stem.contains("user-agreement") || stem.contains("用户协议") {
            DocumentKind::UserAgreement
        } else if stem.contains("privacy-policy") || stem.contains("隐私协议") {
            DocumentKind::PrivacyPolicy
        } else if stem.contains("children-privacy") || stem.contains("儿童隐私") {
            DocumentKind::ChildrenPrivacy
        } else if stem.contains("document") {
            DocumentKind::Document
        } else {
            DocumentKind::UserAgreement
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Reformat an effective date written as `YYYY年M月D日` or `YYYY-M-D` to
/// `YYYYMMDD`, zero-padding month and day.
///
/// The digits are not checked against the calendar, so `2026年2月30日`
/// yields `20260230`.
pub fn date_digits(date: &str) -> Option<String> {
    let caps = CHINESE_DATE
        .captures(date)
        .or_else(|| DASHED_DATE.captures(date))?;
    Some(format!("{}{:0>2}{:0>2}", &caps[1], &caps[2], &caps[3]))
}

/// First day of the month containing `today`.
pub fn first_of_month(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// Format the effective date as `YYYYMMDD` for file names.
///
/// Missing or unparsable dates fall back to the first day of the current
/// month.
pub fn filename_date(date: Option<&str>, today: NaiveDate) -> String {
    let fallback = || first_of_month(today).format("%Y%m%d").to_string();
    match date {
        Some(text) => date_digits(text).unwrap_or_else(|| {
            log::warn!("Unparsable effective date '{}', using current month", text);
            fallback()
        }),
        None => fallback(),
    }
}

/// Date shown in the page header.
pub fn display_date(date: Option<&str>, today: NaiveDate) -> String {
    match date {
        Some(text) => text.to_string(),
        None => format!("{}年{}月1日", today.year(), today.month()),
    }
}

/// Output file name: `{kind}-{YYYYMMDD}.html`.
pub fn output_filename(title: &str, date: Option<&str>, today: NaiveDate) -> String {
    format!(
        "{}-{}.html",
        DocumentKind::from_title(title).slug(),
        filename_date(date, today)
    )
}
