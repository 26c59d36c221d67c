//! # wordh5
//!
//! Converts Word (`.docx`) agreement documents into styled, self-contained
//! HTML5 pages.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordh5::convert_file;
//!
//! fn main() -> wordh5::Result<()> {
//!     let result = convert_file("儿童隐私保护政策.docx")?;
//!     println!("{}", result.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parse**: read the OOXML body into paragraphs and tables
//! - **Extract**: detect title and effective date, infer heading levels,
//!   keep inline emphasis, render tables
//! - **Normalize**: renumber level-2 headings in the document's dominant
//!   convention (`一、` or `1. `)
//! - **Render**: fill the page template, name the file after the document
//!   kind and date, and link sibling pages in the footer

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod markup;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, Converter};
pub use error::{Error, Result};
pub use model::{
    Block, Body, ContentItem, DocumentMeta, Extraction, Hyperlink, Inline, Paragraph, Table,
    TableCell, TableRow, TextRun,
};
pub use normalize::{normalize_headings, to_chinese_numeral, NumberingStyle};
pub use parser::{DocxParser, StyleSheet};
pub use render::{DirectoryListing, DocumentKind, FsDirectory, ListedFile, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse a `.docx` file and return its body.
///
/// # Example
///
/// ```no_run
/// use wordh5::parse_file;
///
/// let body = parse_file("用户协议.docx").unwrap();
/// println!("Paragraphs: {}", body.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Body> {
    let path = path.as_ref();
    detect::validate_input(path)?;
    DocxParser::open(path)?.parse()
}

/// Parse a `.docx` from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Body> {
    DocxParser::from_bytes(data)?.parse()
}

/// Parse a `.docx` from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Body> {
    DocxParser::from_reader(reader)?.parse()
}

/// Extract content items and metadata from a `.docx` file.
///
/// Headings are returned as inferred; they are not renumbered.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    let path = path.as_ref();
    let body = parse_file(path)?;
    Ok(extract::extract(&body, path))
}

/// Convert a `.docx` file to an HTML page written next to it.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConvertResult> {
    Converter::default().convert(path.as_ref())
}

/// Convert a `.docx` file with custom options.
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ConvertOptions,
) -> Result<ConvertResult> {
    Converter::new(options).convert(path.as_ref())
}
