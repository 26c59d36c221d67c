//! Document model types for Word content representation.
//!
//! Two layers live here. The source layer (`Body`, `Block`, `Paragraph`,
//! `Table`) mirrors the block structure of a `.docx` body as read from
//! OOXML. The content layer (`ContentItem`, `DocumentMeta`) is what the
//! extractor produces and the renderer consumes.

mod body;
mod content;
mod paragraph;
mod table;

pub use body::{Block, Body};
pub use content::{ContentItem, DocumentMeta, Extraction};
pub(crate) use paragraph::DEFAULT_STYLE_NAME;
pub use paragraph::{Hyperlink, Inline, Paragraph, TextRun};
pub use table::{Table, TableCell, TableRow};
