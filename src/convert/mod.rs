//! Conversion pipeline: parse, extract, normalize, render, write.
//!
//! # Example
//!
//! ```no_run
//! use wordh5::convert::{ConvertOptions, Converter};
//! use std::path::Path;
//!
//! fn main() -> wordh5::Result<()> {
//!     let converter = Converter::new(ConvertOptions::default());
//!     let result = converter.convert(Path::new("隐私政策.docx"))?;
//!     println!("{}", result.output_path.display());
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::validate_input;
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::model::{Body, DocumentMeta, Extraction};
use crate::normalize::{normalize_headings, NumberingStyle};
use crate::parser::DocxParser;
use crate::render::{
    footer_links, output_filename, DirectoryListing, FooterLink, FsDirectory, HtmlRenderer,
    RenderOptions,
};

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Render but do not write the output file
    pub dry_run: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Where the page was (or would be) written
    pub output_path: PathBuf,

    /// Rendered page
    pub html: String,

    /// Detected title and effective date
    pub meta: DocumentMeta,

    /// Number of content items on the page
    pub item_count: usize,

    /// Paragraph items per heading level (index 0 = body text)
    pub heading_counts: [usize; 7],

    /// Numbering applied to level-2 headings, if any
    pub numbering: Option<NumberingStyle>,

    /// Footer links placed on the page
    pub footer: Vec<FooterLink>,

    /// Whether the file was written
    pub written: bool,
}

impl ConvertResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.html.len()
    }
}

/// Converts Word documents to HTML pages next to the source file.
pub struct Converter {
    options: ConvertOptions,
    listing: Box<dyn DirectoryListing>,
}

impl Converter {
    /// Create a converter that scans the real filesystem for sibling pages.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_listing(options, FsDirectory)
    }

    /// Create a converter with a custom directory listing.
    pub fn with_listing(options: ConvertOptions, listing: impl DirectoryListing + 'static) -> Self {
        Self {
            options,
            listing: Box::new(listing),
        }
    }

    /// The conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert the `.docx` file at `path`.
    pub fn convert(&self, path: &Path) -> Result<ConvertResult> {
        validate_input(path)?;
        let body = DocxParser::open(path)?.parse()?;
        self.convert_body(&body, path)
    }

    /// Convert an already parsed body; `source` decides the output directory
    /// and the fallback title.
    pub fn convert_body(&self, body: &Body, source: &Path) -> Result<ConvertResult> {
        let mut extraction = extract(body, source);
        let numbering = normalize_headings(&mut extraction.items);

        let dir = output_dir(source);
        let footer = footer_links(self.listing.as_ref(), &dir)?;

        let render = &self.options.render;
        let file_name = output_filename(
            &extraction.meta.title,
            extraction.meta.effective_date.as_deref(),
            render.today(),
        );
        let output_path = dir.join(file_name);
        let html = HtmlRenderer::new(render.clone()).render(
            &extraction.items,
            &extraction.meta,
            &footer,
        );

        let written = if self.options.dry_run {
            log::info!("Dry run, not writing {}", output_path.display());
            false
        } else {
            fs::write(&output_path, &html).map_err(|source| Error::Write {
                path: output_path.clone(),
                source,
            })?;
            log::info!("Wrote {} ({} bytes)", output_path.display(), html.len());
            true
        };

        Ok(ConvertResult {
            output_path,
            html,
            heading_counts: extraction.heading_counts(),
            item_count: extraction.items.len(),
            meta: extraction.meta,
            numbering,
            footer,
            written,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

/// Extract and normalize a `.docx` without rendering.
pub fn extract_normalized(path: &Path) -> Result<Extraction> {
    validate_input(path)?;
    let body = DocxParser::open(path)?.parse()?;
    let mut extraction = extract(&body, path);
    normalize_headings(&mut extraction.items);
    Ok(extraction)
}

/// Directory the page is written to: the source's parent, or the current
/// directory for bare file names.
fn output_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;
    use crate::render::ListedFile;
    use chrono::NaiveDate;
    use std::time::SystemTime;

    struct FakeDirectory(Vec<ListedFile>);

    impl DirectoryListing for FakeDirectory {
        fn html_files(&self, _dir: &Path) -> Result<Vec<ListedFile>> {
            Ok(self.0.clone())
        }
    }

    fn options() -> ConvertOptions {
        ConvertOptions::new()
            .with_dry_run(true)
            .with_render_options(
                RenderOptions::new().with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()),
            )
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new().with_dry_run(true);
        assert!(options.dry_run);
        assert!(!ConvertOptions::default().dry_run);
    }

    #[test]
    fn test_convert_body_dry_run() {
        let mut body = Body::new();
        body.push(Paragraph::with_text("隐私政策"));
        body.push(Paragraph::with_text("生效日期：2026年1月1日"));
        body.push(Paragraph::with_text("一、总则"));
        body.push(Paragraph::with_text("本政策说明我们如何处理信息。"));
        body.push(Paragraph::with_text("2. 定义"));

        let listing = FakeDirectory(vec![ListedFile::new(
            "user-agreement-20260101.html",
            SystemTime::UNIX_EPOCH,
        )]);
        let converter = Converter::with_listing(options(), listing);
        let result = converter
            .convert_body(&body, Path::new("/agreements/隐私政策.docx"))
            .unwrap();

        assert!(!result.written);
        assert_eq!(
            result.output_path,
            PathBuf::from("/agreements/privacy-policy-20260101.html")
        );
        assert_eq!(result.item_count, 3);
        assert_eq!(result.heading_counts[2], 2);
        assert_eq!(result.numbering, Some(NumberingStyle::Arabic));
        assert!(result.html.contains("<h2>1. 总则</h2>"));
        assert!(result.html.contains("<h2>2. 定义</h2>"));
        assert!(result.html.contains("./user-agreement-20260101.html"));
        assert_eq!(result.footer.len(), 1);
    }

    #[test]
    fn test_convert_rejects_missing_and_wrong_extension() {
        let converter = Converter::with_listing(options(), FakeDirectory(vec![]));
        let err = converter.convert(Path::new("/no/such/file.docx")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agreement.pdf");
        fs::write(&path, b"%PDF-1.7").unwrap();
        let err = converter.convert(&path).unwrap_err();
        assert!(matches!(err, Error::InputWrongExtension(_)));
    }

    #[test]
    fn test_output_dir_for_bare_name() {
        assert_eq!(output_dir(Path::new("a.docx")), PathBuf::from("."));
        assert_eq!(output_dir(Path::new("/x/a.docx")), PathBuf::from("/x"));
    }
}
