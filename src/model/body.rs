//! Document body types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// The body of a Word document: its blocks in original order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Body {
    /// Top-level blocks (paragraphs and tables)
    pub blocks: Vec<Block>,
}

impl Body {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body from blocks.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Append a block.
    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Iterate over top-level paragraphs, skipping tables.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    /// Number of top-level paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Number of top-level tables.
    pub fn table_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Table(_)))
            .count()
    }

    /// Check if the body has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A block-level element of the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),
    /// A table
    Table(Table),
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(t)
    }
}
