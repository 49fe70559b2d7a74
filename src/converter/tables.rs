//! Table builder.
//!
//! Rows are collected from every `tr` of the table (rows of nested tables
//! excluded) and laid out on a [`TableMatrix`]: a cell spanning several rows
//! or columns occupies each slot it covers, and later cells skip occupied
//! slots. The first non-empty row becomes the header.

use tracing::debug;

use super::{leading_number, Context, Converter};
use crate::markdown::{clean_cell, separator_row, table_row};
use crate::node::Element;
use crate::tags::Tag;

/// Upper bound for `colspan`.
const MAX_COLSPAN: usize = 1000;

/// Logical row/column layout of a table with spanning cells expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMatrix {
    rows: Vec<Vec<Option<String>>>,
}

impl TableMatrix {
    /// Create an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First unoccupied column of `row` at or after `col`.
    #[must_use]
    pub fn next_free(&self, row: usize, col: usize) -> usize {
        let Some(cells) = self.rows.get(row) else {
            return col;
        };
        let mut col = col;
        while cells.get(col).is_some_and(Option::is_some) {
            col += 1;
        }
        col
    }

    /// Fill a `rowspan` x `colspan` block whose top-left slot is (`row`, `col`).
    pub fn fill(&mut self, row: usize, col: usize, rowspan: usize, colspan: usize, content: &str) {
        for r in row..row + rowspan.max(1) {
            if self.rows.len() <= r {
                self.rows.resize_with(r + 1, Vec::new);
            }
            let cells = &mut self.rows[r];
            let end = col + colspan.max(1);
            if cells.len() < end {
                cells.resize(end, None);
            }
            for slot in &mut cells[col..end] {
                *slot = Some(content.to_string());
            }
        }
    }

    /// Rows holding at least one cell, gaps filled with empty strings.
    #[must_use]
    pub fn filled_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .filter(|cells| cells.iter().any(Option::is_some))
            .map(|cells| cells.iter().map(|c| c.clone().unwrap_or_default()).collect())
            .collect()
    }
}

impl Converter<'_> {
    /// Render a `table` element as a pipe table.
    ///
    /// At most `max_table_rows` rows follow the header; the rest are dropped.
    pub(super) fn render_table(&self, table: &Element) -> String {
        let mut rows = Vec::new();
        collect_rows(table, &mut rows);

        let limit = self.options.max_table_rows.saturating_add(1);
        let mut matrix = TableMatrix::new();
        let mut rows_with_cells = 0;

        for (row_idx, row) in rows.iter().enumerate() {
            if rows_with_cells >= limit {
                debug!(dropped = rows.len() - row_idx, "table rows beyond limit dropped");
                break;
            }

            let remaining = rows.len() - row_idx;
            let mut col = 0;
            let mut has_cells = false;

            for cell in row.element_children().filter(|c| c.tag == Tag::TableCell) {
                has_cells = true;
                col = matrix.next_free(row_idx, col);

                let rowspan = span(cell, "rowspan", remaining);
                let colspan = span(cell, "colspan", MAX_COLSPAN);
                let content = clean_cell(&self.render_children(cell, Context::TableCell));

                matrix.fill(row_idx, col, rowspan, colspan, &content);
                col += colspan;
            }

            if has_cells {
                rows_with_cells += 1;
            }
        }

        let mut filled = matrix.filled_rows();
        filled.truncate(limit);
        if filled.is_empty() {
            return String::new();
        }

        let width = filled.iter().map(Vec::len).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(filled.len() + 1);
        for (idx, mut cells) in filled.into_iter().enumerate() {
            cells.resize(width, String::new());
            lines.push(table_row(&cells));
            if idx == 0 {
                lines.push(separator_row(width));
            }
        }

        format!("\n\n{}\n\n", lines.join("\n"))
    }
}

/// Collect `tr` elements in document order, not descending into nested tables.
fn collect_rows<'a>(el: &'a Element, rows: &mut Vec<&'a Element>) {
    for child in el.element_children() {
        match child.tag {
            Tag::TableRow => rows.push(child),
            Tag::Table => {}
            _ => collect_rows(child, rows),
        }
    }
}

/// Span attribute value in `1..=max`; missing, zero or malformed values are 1.
fn span(cell: &Element, name: &str, max: usize) -> usize {
    cell.attr(name)
        .and_then(leading_number)
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n > 0)
        .map_or(1, |n| n.min(max.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::options::Options;

    fn table_with(html: &str, options: &Options) -> String {
        let doc = dom::parse(html);
        let body = dom::body_tree(&doc);
        Converter::new(options, None).render_children(&body, Context::Default)
    }

    fn table(html: &str) -> String {
        table_with(html, &Options::default())
    }

    #[test]
    fn test_simple_table() {
        let out = table("<table><tr><th>Name</th><th>Age</th></tr><tr><td>Ann</td><td>31</td></tr></table>");
        assert_eq!(out, "\n\n| Name | Age |\n| --- | --- |\n| Ann | 31 |\n\n");
    }

    #[test]
    fn test_rowspan_shifts_following_row() {
        let out = table(
            r#"<table>
                <tr><td rowspan="2">Span</td><td>A</td></tr>
                <tr><td>B</td></tr>
            </table>"#,
        );
        assert_eq!(out, "\n\n| Span | A |\n| --- | --- |\n| Span | B |\n\n");
    }

    #[test]
    fn test_colspan_repeats_content() {
        let out = table(
            r#"<table><tr><th colspan="2">Wide</th></tr><tr><td>a</td><td>b</td></tr></table>"#,
        );
        assert_eq!(out, "\n\n| Wide | Wide |\n| --- | --- |\n| a | b |\n\n");
    }

    #[test]
    fn test_malformed_spans_default_to_one() {
        let out = table(
            r#"<table><tr><td rowspan="abc" colspan="0">x</td><td rowspan="-2">y</td></tr><tr><td>z</td></tr></table>"#,
        );
        assert_eq!(out, "\n\n| x | y |\n| --- | --- |\n| z |  |\n\n");
    }

    #[test]
    fn test_rowspan_clamped_to_table() {
        let out = table(r#"<table><tr><td rowspan="50">only</td></tr></table>"#);
        assert_eq!(out, "\n\n| only |\n| --- |\n\n");
    }

    #[test]
    fn test_row_limit() {
        let rows: String = (0..15).map(|i| format!("<tr><td>r{i}</td></tr>")).collect();
        let out = table(&format!("<table>{rows}</table>"));
        assert!(out.contains("| r10 |"));
        assert!(!out.contains("| r11 |"));

        let options = Options {
            max_table_rows: 2,
            ..Options::default()
        };
        let out = table_with(&format!("<table>{rows}</table>"), &options);
        assert_eq!(out, "\n\n| r0 |\n| --- |\n| r1 |\n| r2 |\n\n");
    }

    #[test]
    fn test_cells_use_table_cell_context() {
        let out = table(
            r#"<table><tr><td><p>Para</p><b>bold</b> x|y <a href="https://e.com">a|b</a></td></tr></table>"#,
        );
        assert_eq!(
            out,
            "\n\n| <br>Para<br><b>bold</b> x\\|y [a|b](https://e.com) |\n| --- |\n\n"
        );
    }

    #[test]
    fn test_thead_tbody_and_nested_tables() {
        let out = table(
            r#"<table>
                <thead><tr><th>H</th></tr></thead>
                <tbody><tr><td>outer <table><tr><td>inner</td></tr></table></td></tr></tbody>
            </table>"#,
        );
        assert_eq!(out, "\n\n| H |\n| --- |\n| outer inner |\n\n");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(table("<table><tr></tr></table>"), "");
        assert_eq!(table("<table></table>"), "");
    }

    #[test]
    fn test_matrix_next_free_and_fill() {
        let mut m = TableMatrix::new();
        m.fill(0, 0, 2, 1, "a");
        assert_eq!(m.next_free(1, 0), 1);
        assert_eq!(m.next_free(2, 0), 0);
        m.fill(1, 1, 1, 2, "b");
        assert_eq!(
            m.filled_rows(),
            vec![
                vec!["a".to_string()],
                vec!["a".to_string(), "b".to_string(), "b".to_string()],
            ]
        );
    }
}
