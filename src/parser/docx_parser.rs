//! Word document parser over the OOXML container.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use roxmltree::{Document as XmlDocument, Node};
use zip::ZipArchive;

use super::styles::StyleSheet;
use super::xml::{attr, child, children, is_tag, strip_bom, toggle_on};
use crate::detect::detect_container_from_bytes;
use crate::error::{Error, Result};
use crate::model::{Block, Body, Hyperlink, Paragraph, Table, TableCell, TableRow, TextRun};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// Widest table Word can produce; bounds merged-cell expansion when the
/// table declares no grid.
const MAX_TABLE_COLUMNS: usize = 63;

/// Word document parser.
///
/// Holds the raw XML of the main document part and the resolved paragraph
/// styles; [`DocxParser::parse`] walks the body in document order.
#[derive(Debug)]
pub struct DocxParser {
    document_xml: String,
    styles: StyleSheet,
}

impl DocxParser {
    /// Open a `.docx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a `.docx` from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_container_from_bytes(data)?;
        let mut zip = ZipArchive::new(Cursor::new(data))?;
        Self::from_archive(&mut zip)
    }

    /// Parse a `.docx` from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_archive<R: Read + Seek>(zip: &mut ZipArchive<R>) -> Result<Self> {
        let document_xml = read_part(zip, DOCUMENT_PART)?
            .ok_or_else(|| Error::Parse(format!("missing {} in container", DOCUMENT_PART)))?;

        let styles = match read_part(zip, STYLES_PART)? {
            Some(xml) => StyleSheet::parse(&xml)?,
            None => {
                log::debug!("No {} in container, using default styles", STYLES_PART);
                StyleSheet::new()
            }
        };

        Ok(Self {
            document_xml,
            styles,
        })
    }

    /// Create a parser from raw part contents.
    pub fn from_parts(document_xml: impl Into<String>, styles: StyleSheet) -> Self {
        Self {
            document_xml: document_xml.into(),
            styles,
        }
    }

    /// The resolved paragraph styles.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Parse the main document part and return its body.
    pub fn parse(&self) -> Result<Body> {
        let xml = XmlDocument::parse(strip_bom(&self.document_xml))?;
        let body_node = xml
            .descendants()
            .find(|n| is_tag(n, "body"))
            .ok_or_else(|| Error::Parse("document has no body element".into()))?;

        let mut body = Body::new();
        self.parse_blocks(&body_node, &mut body.blocks);

        log::debug!(
            "Parsed body: {} paragraphs, {} tables",
            body.paragraph_count(),
            body.table_count()
        );
        Ok(body)
    }

    fn parse_blocks(&self, parent: &Node, out: &mut Vec<Block>) {
        for node in parent.children().filter(|n| n.is_element()) {
            match node.tag_name().name() {
                "p" => out.push(Block::Paragraph(self.parse_paragraph(&node))),
                "tbl" => out.push(Block::Table(self.parse_table(&node))),
                "sdt" => {
                    if let Some(content) = child(&node, "sdtContent") {
                        self.parse_blocks(&content, out);
                    }
                }
                _ => {}
            }
        }
    }

    fn parse_paragraph(&self, node: &Node) -> Paragraph {
        let style_id = child(node, "pPr")
            .and_then(|ppr| child(&ppr, "pStyle"))
            .and_then(|s| attr(&s, "val"));
        let mut paragraph = Paragraph::new().with_style(self.styles.resolve(style_id));

        for inline in node.children().filter(|n| n.is_element()) {
            match inline.tag_name().name() {
                "r" => paragraph.add_run(parse_run(&inline)),
                "hyperlink" => paragraph.add_hyperlink(parse_hyperlink(&inline)),
                _ => {}
            }
        }
        paragraph
    }

    fn parse_table(&self, node: &Node) -> Table {
        let mut table = Table::new();
        let mut previous: Vec<TableCell> = Vec::new();
        let grid_width = match child(node, "tblGrid").map(|g| children(&g, "gridCol").count()) {
            Some(n) if n > 0 => n,
            _ => MAX_TABLE_COLUMNS,
        };

        for tr in children(node, "tr") {
            let mut cells: Vec<TableCell> = Vec::new();
            for tc in children(&tr, "tc") {
                let props = child(&tc, "tcPr");
                let span = props
                    .and_then(|p| child(&p, "gridSpan"))
                    .and_then(|g| attr(&g, "val"))
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(1)
                    .max(1);
                let room = grid_width.saturating_sub(cells.len()).max(1);
                if span > room {
                    log::debug!("gridSpan {} exceeds table grid, clamped to {}", span, room);
                }
                let span = span.min(room);
                let continues_above = props
                    .and_then(|p| child(&p, "vMerge"))
                    .map(|v| attr(&v, "val") != Some("restart"))
                    .unwrap_or(false);

                let column = cells.len();
                let cell = match previous.get(column) {
                    Some(above) if continues_above => above.clone(),
                    _ => TableCell::new(
                        children(&tc, "p")
                            .map(|p| self.parse_paragraph(&p))
                            .collect(),
                    ),
                };
                cells.extend(std::iter::repeat(cell).take(span));
            }
            previous = cells.clone();
            table.add_row(TableRow::new(cells));
        }
        table
    }
}

/// Read a part of the container as text; `None` when the part is absent.
fn read_part<R: Read + Seek>(zip: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match zip.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| Error::Parse(format!("{} is not valid UTF-8 text: {}", name, e)))?;
    Ok(Some(text))
}

#[derive(Debug, Default, Clone, Copy)]
struct Emphasis {
    bold: bool,
    italic: bool,
    underline: bool,
}

impl Emphasis {
    /// Read emphasis from a run properties element.
    fn from_run_properties(rpr: &Node) -> Self {
        Self {
            bold: child(rpr, "b").map(|b| toggle_on(&b)).unwrap_or(false),
            italic: child(rpr, "i").map(|i| toggle_on(&i)).unwrap_or(false),
            underline: child(rpr, "u")
                .map(|u| attr(&u, "val") != Some("none"))
                .unwrap_or(false),
        }
    }

    /// Read emphasis for a hyperlink, where complex-script variants count too.
    fn from_hyperlink_properties(rpr: &Node) -> Self {
        let on = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| child(rpr, name))
                .any(|n| toggle_on(&n))
        };
        Self {
            bold: on(&["b", "bCs"]),
            italic: on(&["i", "iCs"]),
            underline: child(rpr, "u")
                .map(|u| attr(&u, "val") != Some("none"))
                .unwrap_or(false),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
        }
    }
}

fn parse_run(node: &Node) -> TextRun {
    let emphasis = child(node, "rPr")
        .map(|rpr| Emphasis::from_run_properties(&rpr))
        .unwrap_or_default();

    let mut text = String::new();
    for part in node.children().filter(|n| n.is_element()) {
        match part.tag_name().name() {
            "t" => text.push_str(part.text().unwrap_or("")),
            "tab" | "ptab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }

    TextRun {
        text,
        bold: emphasis.bold,
        italic: emphasis.italic,
        underline: emphasis.underline,
    }
}

fn parse_hyperlink(node: &Node) -> Hyperlink {
    let runs: Vec<TextRun> = children(node, "r").map(|r| parse_run(&r)).collect();

    let direct = children(node, "rPr")
        .map(|rpr| Emphasis::from_hyperlink_properties(&rpr))
        .fold(Emphasis::default(), Emphasis::merge);
    let nested = children(node, "r")
        .filter_map(|r| child(&r, "rPr"))
        .map(|rpr| Emphasis::from_hyperlink_properties(&rpr))
        .fold(Emphasis::default(), Emphasis::merge);
    let emphasis = direct.merge(nested);

    Hyperlink {
        runs,
        relationship_id: attr(node, "id").map(str::to_string),
        bold: emphasis.bold,
        italic: emphasis.italic,
        underline: emphasis.underline,
    }
}
