//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row, always treated as the header.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Rows after the header.
    pub fn body(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row, one per grid column
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Paragraphs in the cell
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create a cell from paragraphs.
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Create a cell holding one plain paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(vec![Paragraph::with_text(text)])
    }

    /// Cell text: paragraph texts joined by newlines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check whether any direct run in the cell is bold.
    pub fn has_bold_run(&self) -> bool {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs())
            .any(|r| r.bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    #[test]
    fn test_header_and_body() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![TableCell::with_text("名称")]));
        table.add_row(TableRow::new(vec![TableCell::with_text("微信")]));
        table.add_row(TableRow::new(vec![TableCell::with_text("支付宝")]));

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.header().unwrap().cells[0].plain_text(), "名称");
        assert_eq!(table.body().len(), 2);
    }

    #[test]
    fn test_empty_table_has_no_body() {
        let table = Table::new();
        assert!(table.header().is_none());
        assert!(table.body().is_empty());
    }

    #[test]
    fn test_cell_text_joins_paragraphs() {
        let cell = TableCell::new(vec![Paragraph::with_text("第一行"), Paragraph::with_text("第二行")]);
        assert_eq!(cell.plain_text(), "第一行\n第二行");
    }

    #[test]
    fn test_cell_bold_detection() {
        let mut para = Paragraph::new();
        para.add_run(TextRun::new("普通"));
        para.add_run(TextRun::bold("加粗"));
        assert!(TableCell::new(vec![para]).has_bold_run());
        assert!(!TableCell::with_text("普通").has_bold_run());
    }
}
