use crate::models::chart::{BarChart, BarRect, ChartDimensions, ChartGeometry, LabelAnchor};
use crate::models::report::HoursByLabel;

/// Anything that can be drawn as a single labelled bar.
pub trait ChartDatum {
    fn label(&self) -> &str;
    fn value(&self) -> f64;
}

impl ChartDatum for HoursByLabel {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> f64 {
        self.hours
    }
}

impl<S: AsRef<str>> ChartDatum for (S, f64) {
    fn label(&self) -> &str {
        self.0.as_ref()
    }

    fn value(&self) -> f64 {
        self.1
    }
}

/// Map values onto bars; the largest value fills `dims.drawable_height()`.
///
/// Input order is kept left to right. Negative values are drawn as empty bars
/// and an all-zero series yields zero-height bars.
pub fn layout_bars<D: ChartDatum>(data: &[D], dims: &ChartDimensions) -> BarChart {
    let max_value = data.iter().map(|d| d.value()).fold(0.0_f64, f64::max);
    let drawable = dims.drawable_height();

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let value = d.value();
            let height = if max_value > 0.0 {
                value.max(0.0) / max_value * drawable
            } else {
                0.0
            };
            let x = i as f64 * dims.slot_width();
            let y = dims.height - height - dims.bottom_margin;
            let center = x + dims.bar_width / 2.0;

            ChartGeometry {
                label: d.label().to_string(),
                value,
                bar: BarRect {
                    x,
                    y,
                    width: dims.bar_width,
                    height,
                },
                value_label: LabelAnchor {
                    x: center,
                    y: y - dims.value_label_gap,
                },
                category_label: LabelAnchor {
                    x: center,
                    y: dims.height - dims.bottom_margin / 2.0,
                },
            }
        })
        .collect();

    BarChart {
        canvas_width: data.len() as f64 * dims.slot_width(),
        canvas_height: dims.height,
        bars,
    }
}
