use serde::{Deserialize, Serialize};

/// Layout constants for a bar chart.
///
/// Units are whatever the renderer draws in; the defaults are terminal
/// character cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDimensions {
    pub height: f64,
    pub bar_width: f64,
    pub bar_margin: f64,
    /// Space reserved above and below the tallest bar, in total.
    pub vertical_margin: f64,
    pub bottom_margin: f64,
    pub value_label_gap: f64,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            height: 16.0,
            bar_width: 5.0,
            bar_margin: 2.0,
            vertical_margin: 4.0,
            bottom_margin: 2.0,
            value_label_gap: 1.0,
        }
    }
}

impl ChartDimensions {
    /// Height of the tallest bar.
    pub fn drawable_height(&self) -> f64 {
        (self.height - self.vertical_margin).max(0.0)
    }

    pub fn slot_width(&self) -> f64 {
        self.bar_width + self.bar_margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub label: String,
    pub value: f64,
    pub bar: BarRect,
    pub value_label: LabelAnchor,
    pub category_label: LabelAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub bars: Vec<ChartGeometry>,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
