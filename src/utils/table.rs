//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_left, pad_right, truncate_to_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }

    fn cell(&self, value: &str) -> String {
        let v = truncate_to_width(value, self.width);
        match self.align {
            Align::Left => pad_right(&v, self.width),
            Align::Right => pad_left(&v, self.width),
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

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&col.cell(&col.header));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&col.cell(value));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
