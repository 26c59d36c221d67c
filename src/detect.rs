//! Word container detection and input validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Expected extension of Word documents (lowercase, no dot).
pub const DOCX_EXTENSION: &str = "docx";

/// Validate a conversion input path.
///
/// # Returns
/// * `Err(Error::InputNotFound)` if the path does not exist
/// * `Err(Error::InputWrongExtension)` if the extension is not `.docx`
///   (case-insensitive)
///
/// # Example
/// ```no_run
/// use wordh5::detect::validate_input;
///
/// validate_input("用户协议.docx").unwrap();
/// ```
pub fn validate_input<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    if !has_docx_extension(path) {
        return Err(Error::InputWrongExtension(path.to_path_buf()));
    }
    Ok(())
}

/// Check whether a path ends in `.docx`, ignoring case.
pub fn has_docx_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DOCX_EXTENSION))
        .unwrap_or(false)
}

/// Check that a file on disk starts with the ZIP container magic.
pub fn detect_container_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::Parse("file is too short to be a .docx container".into()))?;
    detect_container_from_bytes(&header)
}

/// Check that bytes start with the ZIP container magic.
pub fn detect_container_from_bytes(data: &[u8]) -> Result<()> {
    if is_docx_container(data) {
        Ok(())
    } else {
        Err(Error::Parse("not a ZIP-based .docx container".into()))
    }
}

/// Quick check if data looks like an OOXML (ZIP) container.
pub fn is_docx_container(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_zip_magic() {
        assert!(detect_container_from_bytes(b"PK\x03\x04\x14\x00").is_ok());
        assert!(matches!(
            detect_container_from_bytes(b"%PDF-1.7"),
            Err(Error::Parse(_))
        ));
        assert!(detect_container_from_bytes(b"PK").is_err());
    }

    #[test]
    fn test_extension_check() {
        assert!(has_docx_extension(&PathBuf::from("a/隐私政策.docx")));
        assert!(has_docx_extension(&PathBuf::from("A.DOCX")));
        assert!(!has_docx_extension(&PathBuf::from("a.doc")));
        assert!(!has_docx_extension(&PathBuf::from("docx")));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate_input("/definitely/not/here.docx").unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn test_validate_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();
        let err = validate_input(&path).unwrap_err();
        assert!(matches!(err, Error::InputWrongExtension(_)));
    }
}
