//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Visible cell width: ANSI codes stripped, capped at 60.
    fn visible_width(cell: &str) -> usize {
        UnicodeWidthStr::width(strip_ansi(cell).as_str()).min(60)
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.min_width.max(UnicodeWidthStr::width(c.header.as_str())))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = Self::visible_width(cell);
                if w > widths[i] {
                    widths[i] = w;
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&col.header);
            let pad = widths[i].saturating_sub(UnicodeWidthStr::width(col.header.as_str()));
            out.push_str(&" ".repeat(pad + 1));
        }
        out.push('\n');

        // Rows: pad on visible width so colored cells stay aligned
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(cell);
                let pad = widths[i].saturating_sub(Self::visible_width(cell));
                out.push_str(&" ".repeat(pad + 1));
            }
            out.push('\n');
        }

        out
    }
}
