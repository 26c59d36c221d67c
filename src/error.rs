//! Error types for wordh5 library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wordh5 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
///
/// Every variant is fatal to a single conversion run. Heading misclassification
/// and unparsable dates are not errors; they fall back to defaults.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input path does not carry the `.docx` extension.
    #[error("Expected a .docx file: {}", .0.display())]
    InputWrongExtension(PathBuf),

    /// The document structure could not be read.
    #[error("Document parsing error: {0}")]
    Parse(String),

    /// Output could not be produced (e.g. JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The rendered page could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// I/O error when reading files or listing directories.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Parse(format!("container read failed: {}", e)),
            zip::result::ZipError::FileNotFound => {
                Error::Parse("missing part in .docx container".into())
            }
            _ => Error::Parse(err.to_string()),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Parse(format!("malformed XML: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InputNotFound(PathBuf::from("missing.docx"));
        assert_eq!(err.to_string(), "File not found: missing.docx");

        let err = Error::InputWrongExtension(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "Expected a .docx file: notes.txt");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_becomes_parse() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;
        let err = Error::Write {
            path: PathBuf::from("out.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to write out.html"));
    }
}
