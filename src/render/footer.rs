//! Cross-document footer navigation.
//!
//! Each output directory collects one page per agreement kind, possibly in
//! several dated versions. The footer links the most recently modified page
//! of every kind present.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use super::kind::DocumentKind;
use crate::error::Result;
use crate::markup;

/// A rendered page found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    /// File name including the `.html` extension
    pub file_name: String,
    /// Last modification time
    pub modified: SystemTime,
}

impl ListedFile {
    /// Create a listed file.
    pub fn new(file_name: impl Into<String>, modified: SystemTime) -> Self {
        Self {
            file_name: file_name.into(),
            modified,
        }
    }

    /// File name without the extension.
    pub fn stem(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }
}

/// Read-only view of the `.html` files in a directory.
pub trait DirectoryListing {
    /// List the `.html` files directly inside `dir`.
    fn html_files(&self, dir: &Path) -> Result<Vec<ListedFile>>;
}

/// Directory listing backed by the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectory;

impl DirectoryListing for FsDirectory {
    fn html_files(&self, dir: &Path) -> Result<Vec<ListedFile>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            files.push(ListedFile::new(
                entry.file_name().to_string_lossy().into_owned(),
                metadata.modified()?,
            ));
        }
        Ok(files)
    }
}

/// One footer navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    /// Kind of the linked page
    pub kind: DocumentKind,
    /// File name of the linked page
    pub file_name: String,
}

impl FooterLink {
    /// Link text.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Render as an indented anchor line.
    pub fn to_html(&self) -> String {
        format!(
            "          <a href=\"./{}\">{}</a>\n",
            markup::attribute(&self.file_name),
            self.label()
        )
    }
}

/// Pick the newest page of each kind and order the links by kind.
///
/// Files are classified by stem. When two files of one kind share a
/// modification time, the one listed first is kept.
pub fn select_footer_links(files: &[ListedFile]) -> Vec<FooterLink> {
    let mut latest: HashMap<DocumentKind, &ListedFile> = HashMap::new();
    for file in files {
        let kind = DocumentKind::from_file_stem(file.stem());
        let newer = latest
            .get(&kind)
            .map_or(true, |current| file.modified > current.modified);
        if newer {
            latest.insert(kind, file);
        }
    }

    DocumentKind::ALL
        .iter()
        .filter_map(|kind| {
            latest.get(kind).map(|file| FooterLink {
                kind: *kind,
                file_name: file.file_name.clone(),
            })
        })
        .collect()
}

/// Compute footer links for the pages in `dir`.
pub fn footer_links(listing: &dyn DirectoryListing, dir: &Path) -> Result<Vec<FooterLink>> {
    let files = listing.html_files(dir)?;
    let links = select_footer_links(&files);
    log::debug!(
        "Footer: {} html files in {} -> {} links",
        files.len(),
        dir.display(),
        links.len()
    );
    Ok(links)
}

/// Render footer links as consecutive anchor lines.
pub fn render_footer_links(links: &[FooterLink]) -> String {
    links.iter().map(FooterLink::to_html).collect()
}
