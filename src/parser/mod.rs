//! Word (.docx) parsing module.
//!
//! Reads the OOXML parts of a `.docx` container and builds the source
//! model in [`crate::model`].

mod docx_parser;
mod styles;
mod xml;

pub use docx_parser::DocxParser;
pub use styles::StyleSheet;
