use timereport::core::chart::layout_bars;
use timereport::models::chart::ChartDimensions;
use timereport::models::report::HoursByLabel;
use timereport::ui::chart::render_bar_chart;

fn sample() -> Vec<(&'static str, f64)> {
    vec![("a", 8.0), ("b", 4.0), ("c", 0.0)]
}

#[test]
fn test_default_dimensions() {
    let dims = ChartDimensions::default();
    assert_eq!(dims.drawable_height(), 12.0);
    assert_eq!(dims.slot_width(), 7.0);
}

#[test]
fn test_layout_scales_to_largest_value() {
    let chart = layout_bars(&sample(), &ChartDimensions::default());

    let heights: Vec<f64> = chart.bars.iter().map(|b| b.bar.height).collect();
    assert_eq!(heights, vec![12.0, 6.0, 0.0]);

    let ys: Vec<f64> = chart.bars.iter().map(|b| b.bar.y).collect();
    assert_eq!(ys, vec![2.0, 8.0, 14.0]);

    let xs: Vec<f64> = chart.bars.iter().map(|b| b.bar.x).collect();
    assert_eq!(xs, vec![0.0, 7.0, 14.0]);

    assert_eq!(chart.canvas_width, 21.0);
    assert_eq!(chart.canvas_height, 16.0);
}

#[test]
fn test_label_anchors() {
    let chart = layout_bars(&sample(), &ChartDimensions::default());

    let a = &chart.bars[0];
    assert_eq!((a.value_label.x, a.value_label.y), (2.5, 1.0));
    assert_eq!(a.label, "a");
    assert_eq!(a.value, 8.0);

    for g in &chart.bars {
        assert_eq!(g.category_label.y, 15.0);
        assert_eq!(g.category_label.x, g.bar.x + 2.5);
    }
}

#[test]
fn test_all_zero_values_draw_flat_bars() {
    let data = vec![("x", 0.0), ("y", 0.0)];
    let chart = layout_bars(&data, &ChartDimensions::default());

    assert_eq!(chart.bars.len(), 2);
    for g in &chart.bars {
        assert_eq!(g.bar.height, 0.0);
        assert!(g.bar.height.is_finite());
        assert_eq!(g.bar.y, 14.0);
    }
}

#[test]
fn test_negative_values_are_drawn_empty() {
    let data = vec![("up", 2.0), ("down", -1.0)];
    let chart = layout_bars(&data, &ChartDimensions::default());

    assert_eq!(chart.bars[0].bar.height, 12.0);
    assert_eq!(chart.bars[1].bar.height, 0.0);
    assert_eq!(chart.bars[1].value, -1.0);
}

#[test]
fn test_empty_input_gives_empty_chart() {
    let data: Vec<HoursByLabel> = Vec::new();
    let chart = layout_bars(&data, &ChartDimensions::default());

    assert!(chart.is_empty());
    assert_eq!(chart.canvas_width, 0.0);
    assert_eq!(render_bar_chart(&chart), "");
}

#[test]
fn test_layout_accepts_report_breakdowns() {
    let data = vec![HoursByLabel::new("Ada", 6.0), HoursByLabel::new("Bob", 3.0)];
    let chart = layout_bars(&data, &ChartDimensions::default());

    assert_eq!(chart.bars[0].label, "Ada");
    assert_eq!(chart.bars[1].bar.height, 6.0);
}

#[test]
fn test_custom_dimensions() {
    let dims = ChartDimensions {
        height: 300.0,
        bar_width: 40.0,
        bar_margin: 10.0,
        vertical_margin: 60.0,
        bottom_margin: 30.0,
        value_label_gap: 5.0,
    };
    let chart = layout_bars(&[("only", 3.0)], &dims);
    let g = &chart.bars[0];

    assert_eq!(g.bar.height, 240.0);
    assert_eq!(g.bar.y, 30.0);
    assert_eq!(g.value_label.y, 25.0);
    assert_eq!(g.category_label.y, 285.0);
    assert_eq!(chart.canvas_width, 50.0);
}

#[test]
fn test_render_draws_bars_and_labels() {
    let chart = layout_bars(&sample(), &ChartDimensions::default());
    let out = render_bar_chart(&chart);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 16);
    // value label sits one row above the tallest bar
    assert_eq!(lines[1].trim(), "8");
    assert_eq!(lines[2], "█████");
    assert!(lines[8].starts_with("█████  █████"));
    let labels: Vec<&str> = lines[15].split_whitespace().collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
}

#[test]
fn test_render_truncates_long_labels() {
    let data = vec![("Warehouse North", 1.0), ("Dock", 1.0)];
    let chart = layout_bars(&data, &ChartDimensions::default());
    let out = render_bar_chart(&chart);
    let labels = out.lines().last().unwrap_or_default();

    assert!(!labels.contains("Warehouse North"));
    assert!(labels.contains("Wareho"));
    assert!(labels.contains("Dock"));
}
