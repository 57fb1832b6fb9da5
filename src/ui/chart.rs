//! Terminal rendering of a laid-out [`BarChart`].
//!
//! Geometry is interpreted in character cells: one unit is one column
//! horizontally and one row vertically.

use crate::models::chart::{BarChart, LabelAnchor};
use crate::utils::formatting::{hours_short, truncate_to_width};
use unicode_width::UnicodeWidthChar;

const BAR: char = '█';
// second half of a double-width character
const CONTINUATION: char = '\0';

struct Canvas {
    cells: Vec<Vec<char>>,
    width: usize,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
            width,
        }
    }

    fn fill(&mut self, x0: usize, x1: usize, y0: usize, y1: usize) {
        for row in self.cells.iter_mut().take(y1).skip(y0) {
            for cell in row.iter_mut().take(x1.min(self.width)).skip(x0) {
                *cell = BAR;
            }
        }
    }

    /// Write `text` centered on the anchor column, clipped to `max_width`.
    fn text(&mut self, at: &LabelAnchor, text: &str, max_width: usize) {
        let center = at.x;
        let row = at.y.floor();
        if row < 0.0 || row as usize >= self.cells.len() {
            return;
        }
        let row = row as usize;

        let text = truncate_to_width(text, max_width);
        let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
        let mut col = (center - width as f64 / 2.0).round().max(0.0) as usize;

        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col + w > self.width {
                break;
            }
            self.cells[row][col] = c;
            if w == 2 {
                self.cells[row][col + 1] = CONTINUATION;
            }
            col += w;
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            let line: String = row.iter().filter(|c| **c != CONTINUATION).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Draw `chart` as rows of text. An empty chart renders as an empty string;
/// callers show their own empty-state message.
pub fn render_bar_chart(chart: &BarChart) -> String {
    if chart.is_empty() {
        return String::new();
    }

    let width = chart.canvas_width.ceil().max(0.0) as usize;
    let height = chart.canvas_height.ceil().max(0.0) as usize;
    let mut canvas = Canvas::new(width, height);

    for g in &chart.bars {
        let x0 = g.bar.x.round().max(0.0) as usize;
        let x1 = (g.bar.x + g.bar.width).round().max(0.0) as usize;
        let y1 = (g.bar.y + g.bar.height).round().max(0.0) as usize;
        let y0 = g.bar.y.round().max(0.0) as usize;
        canvas.fill(x0, x1, y0, y1.min(height));
    }

    // labels last so they stay readable; one column of gap between slots
    let slot = chart
        .bars
        .get(1)
        .map(|b| b.bar.x - chart.bars[0].bar.x)
        .unwrap_or(chart.canvas_width)
        .max(2.0) as usize;
    let label_width = slot - 1;

    for g in &chart.bars {
        canvas.text(&g.value_label, &hours_short(g.value), label_width);
        canvas.text(&g.category_label, &g.label, label_width);
    }

    canvas.render()
}
