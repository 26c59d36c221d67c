//! Rendering options and configuration.

use chrono::{Local, NaiveDate};

/// Default copyright line shown in the page footer.
pub const DEFAULT_COPYRIGHT: &str = "上海东桓文化科技有限公司 © 2026";

/// Default page language.
pub const DEFAULT_LANG: &str = "zh-CN";

/// Options for rendering a page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Footer copyright line
    pub copyright: String,

    /// `lang` attribute of the page
    pub lang: String,

    /// Date used for fallbacks (None = local clock)
    pub today: Option<NaiveDate>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer copyright line.
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    /// Set the page language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Pin the current date instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The current date, pinned or from the local clock.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            copyright: DEFAULT_COPYRIGHT.to_string(),
            lang: DEFAULT_LANG.to_string(),
            today: None,
        }
    }
}
