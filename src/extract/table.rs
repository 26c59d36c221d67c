//! Table markup rendering.

use crate::markup::{self, wrap};
use crate::model::Table;

/// Render a table to markup.
///
/// The first row is always the header. A header cell is wrapped in
/// `<strong>` when any run in it is bold. Body cells keep trimmed plain
/// text only; their formatting is dropped.
pub fn render_table(table: &Table) -> String {
    let mut html = String::from("<div class=\"table-wrapper\">\n  <table>\n");

    if let Some(header) = table.header() {
        html.push_str("    <thead>\n      <tr>\n");
        for cell in &header.cells {
            let text = markup::text(cell.plain_text().trim());
            let cell_html = if cell.has_bold_run() {
                wrap("strong", &text)
            } else {
                text
            };
            html.push_str(&format!("        <th>{}</th>\n", cell_html));
        }
        html.push_str("      </tr>\n    </thead>\n");

        html.push_str("    <tbody>\n");
        for row in table.body() {
            html.push_str("      <tr>\n");
            for cell in &row.cells {
                html.push_str(&format!(
                    "        <td>{}</td>\n",
                    markup::text(cell.plain_text().trim())
                ));
            }
            html.push_str("      </tr>\n");
        }
        html.push_str("    </tbody>\n");
    }

    html.push_str("  </table>\n</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, TableCell, TableRow, TextRun};

    fn bold_cell(text: &str) -> TableCell {
        let mut p = Paragraph::new();
        p.add_run(TextRun::bold(text));
        TableCell::new(vec![p])
    }

    #[test]
    fn test_header_bold_detected_per_cell() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![bold_cell("第三方名称"), TableCell::with_text(" 用途 ")]));
        table.add_row(TableRow::new(vec![bold_cell("微信支付"), TableCell::with_text("支付")]));

        let html = render_table(&table);
        assert!(html.contains("<th><strong>第三方名称</strong></th>"));
        assert!(html.contains("<th>用途</th>"));
        // body bold is dropped
        assert!(html.contains("<td>微信支付</td>"));
        assert!(!html.contains("<strong>微信支付</strong>"));
    }

    #[test]
    fn test_table_layout() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![TableCell::with_text("A")]));
        table.add_row(TableRow::new(vec![TableCell::with_text("1")]));

        assert_eq!(
            render_table(&table),
            "<div class=\"table-wrapper\">\n  <table>\n    <thead>\n      <tr>\n        <th>A</th>\n      </tr>\n    </thead>\n    <tbody>\n      <tr>\n        <td>1</td>\n      </tr>\n    </tbody>\n  </table>\n</div>"
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            render_table(&Table::new()),
            "<div class=\"table-wrapper\">\n  <table>\n  </table>\n</div>"
        );
    }

    #[test]
    fn test_header_only_table_has_empty_body() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![TableCell::with_text("仅表头")]));
        let html = render_table(&table);
        assert!(html.contains("<tbody>\n    </tbody>"));
    }
}
