//! Rendering module for turning extracted content into HTML pages.

mod footer;
mod html;
mod kind;
mod options;

pub use footer::{
    footer_links, render_footer_links, select_footer_links, DirectoryListing, FooterLink,
    FsDirectory, ListedFile,
};
pub use html::{render_items, to_html, HtmlRenderer};
pub use kind::{
    date_digits, display_date, filename_date, first_of_month, output_filename,
    DocumentKind,
};
pub use options::{RenderOptions, DEFAULT_COPYRIGHT, DEFAULT_LANG};
