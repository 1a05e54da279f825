//! End-to-end scenarios through the public chart facade.

use std::sync::Arc;

use timeline_plot::gesture::InteractionMode;
use timeline_plot::render::{Color, RenderCommand};
use timeline_plot::series::{Series, SeriesData, SeriesDataError};
use timeline_plot::style::{Metrics, Theme};
use timeline_plot::viewport::{self, ViewportState};
use timeline_plot::{Chart, TextMeasure};

fn measure() -> TextMeasure {
    Arc::new(|text: &str| text.len() as f32 * 7.0)
}

fn three_day_data() -> SeriesData {
    SeriesData::new(
        vec![0, 86_400_000, 172_800_000],
        vec![Series::new("joined", Color::from_hex(0x3D_C2_3F), vec![10, 50, 20])],
    )
    .unwrap()
}

fn full_window_chart(width: f32, height: f32) -> Chart {
    let metrics = Metrics::default();
    let mut chart = Chart::new(Theme::default(), metrics, measure());
    chart.set_series_data(three_day_data());
    chart.on_layout(width, height);
    // Grow the default rightmost window to cover the whole strip: grab the
    // left handle and drag it to the far left.
    let state = chart.viewport_state().unwrap();
    chart.on_gesture_start(state.selection_start_x, height - 10.0);
    assert_eq!(chart.interaction_mode(), InteractionMode::DragLeftHandle);
    let target = metrics.hold_line_half();
    assert!(chart.on_gesture_move(state.selection_start_x - target, 0.0));
    chart.on_gesture_end();
    chart
}

#[test]
fn full_window_selects_whole_series() {
    let metrics = Metrics::default();
    let chart = full_window_chart(300.0, 400.0);
    let state = chart.viewport_state().unwrap();
    let range = viewport::visible_range(&state, 300.0, &metrics, 3);
    assert_eq!((range.start, range.end), (0, 3));

    let y_max = viewport::autoscale_max_for_range(&three_day_data(), &range);
    assert!((y_max - 50.0).abs() < 1e-6, "full range needs no interpolation");
}

#[test]
fn render_twice_yields_identical_plans() {
    let chart = full_window_chart(300.0, 400.0);
    assert_eq!(chart.render_frame(), chart.render_frame());
}

#[test]
fn dropped_drag_leaves_plan_unchanged() {
    let mut chart = full_window_chart(300.0, 400.0);
    let before = chart.render_frame();
    let state = chart.viewport_state().unwrap();

    // Left handle is already as far left as it goes; pushing further must
    // leave the state untouched.
    chart.on_gesture_start(state.selection_start_x, 390.0);
    assert!(!chart.on_gesture_move(25.0, 0.0));
    chart.on_gesture_end();

    assert_eq!(chart.viewport_state().unwrap(), state);
    assert_eq!(chart.render_frame(), before);
}

#[test]
fn left_handle_stops_at_minimum_window() {
    let metrics = Metrics::default();
    let mut chart = Chart::new(Theme::default(), metrics, measure());
    chart.set_series_data(three_day_data());
    chart.on_layout(320.0, 480.0);

    let state = chart.viewport_state().unwrap();
    chart.on_gesture_start(state.selection_start_x, 470.0);
    assert_eq!(chart.interaction_mode(), InteractionMode::DragLeftHandle);
    // The default window is already minimal; shrinking further is dropped.
    assert!(!chart.on_gesture_move(-5.0, 0.0));
    assert_eq!(chart.viewport_state().unwrap(), state);
}

#[test]
fn mismatched_series_length_is_rejected() {
    let result = SeriesData::new(
        vec![0, 1, 2, 3],
        vec![Series::new("joined", Color::BLACK, vec![1, 2, 3])],
    );
    assert!(matches!(
        result,
        Err(SeriesDataError::MismatchedSeriesLength { expected: 4, got: 3, .. })
    ));
}

#[test]
fn grid_row_labels_follow_magnitude_rule() {
    let chart = full_window_chart(300.0, 400.0);
    let frame = chart.render_frame();
    let labels: Vec<&str> = frame
        .commands()
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    // Y labels come first: "0" on the bottom row, then 50 / 6 = 8 per row.
    assert_eq!(labels[0], "0");
    assert_eq!(labels[1], "8");
    assert_eq!(labels[2], "16");
}

#[test]
fn pan_scrolls_the_visible_range() {
    let metrics = Metrics::default();
    let mut chart = Chart::new(Theme::default(), metrics, measure());
    let values: Vec<u64> = (0..300).map(|i| (i % 50) as u64).collect();
    let timestamps: Vec<i64> = (0..300).map(|i| i * 86_400_000).collect();
    chart.set_series_data(
        SeriesData::new(timestamps, vec![Series::new("joined", Color::BLACK, values)]).unwrap(),
    );
    chart.on_layout(400.0, 500.0);

    let before = chart.viewport_state().unwrap();
    let before_range = viewport::visible_range(&before, 400.0, &metrics, 300);

    // Drag inside the main plot; negative dx scrolls toward older samples.
    chart.on_gesture_start(200.0, 100.0);
    assert_eq!(chart.interaction_mode(), InteractionMode::PanMainPlot);
    assert!(chart.on_gesture_move(-60.0, 0.0));
    chart.on_gesture_end();

    let after = chart.viewport_state().unwrap();
    let after_range = viewport::visible_range(&after, 400.0, &metrics, 300);
    assert!((after.span() - before.span()).abs() < 1e-3, "pan keeps the zoom level");
    assert!(after_range.start < before_range.start, "window moved toward older samples");
}

#[test]
fn degenerate_selection_renders_grid_only() {
    let metrics = Metrics::default();
    let state = ViewportState::new(10.0, 10.0 - metrics.hold_line_width);
    let range = viewport::visible_range(&state, 300.0, &metrics, 100);
    assert!(range.is_empty());
    assert_eq!(viewport::autoscale_max_for_range(&three_day_data(), &range), 0.0);
}
