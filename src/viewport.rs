//! Viewport mapping between series indices and screen pixels.
//!
//! The selection window on the overview strip defines which slice of the
//! series is visible in the main plot. This module derives the visible index
//! range and per-sample pixel width from the window, and computes the
//! autoscaled Y maximum with boundary interpolation so the visible curve
//! always fits the plot height.

use crate::series::SeriesData;
use crate::style::Metrics;

/// Selection window on the overview strip, in mini-map pixel space.
///
/// Both coordinates are handle centers. A valid state keeps
/// `hold_line_half <= selection_start_x`, `selection_end_x <= width −
/// hold_line_half`, and an outer window (handle outer edge to outer edge,
/// `span + hold_line_width`) of at least `min_window_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// X coordinate of the left window handle.
    pub selection_start_x: f32,
    /// X coordinate of the right window handle.
    pub selection_end_x: f32,
}

impl ViewportState {
    /// Create a state from explicit handle coordinates.
    pub fn new(selection_start_x: f32, selection_end_x: f32) -> Self {
        Self {
            selection_start_x,
            selection_end_x,
        }
    }

    /// Default window: the rightmost `min_window_width` of the strip.
    pub fn rightmost(width: f32, metrics: &Metrics) -> Self {
        let half = metrics.hold_line_half();
        Self {
            selection_start_x: width - metrics.min_window_width + half,
            selection_end_x: width - half,
        }
    }

    /// Distance between the two handles.
    pub fn span(&self) -> f32 {
        self.selection_end_x - self.selection_start_x
    }

    /// Check the window invariants against a canvas width.
    pub fn is_valid(&self, width: f32, metrics: &Metrics) -> bool {
        let half = metrics.hold_line_half();
        self.selection_start_x >= half
            && self.selection_end_x <= width - half
            && self.span() >= metrics.min_window_width - metrics.hold_line_width
    }
}

/// Resolved visible slice of the series for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRange {
    /// First visible sample index.
    pub start: usize,
    /// One past the last visible sample index (`start <= end <= N`).
    pub end: usize,
    /// Horizontal pixel distance between adjacent samples in the main plot.
    pub pixels_per_sample: f32,
    /// Main-plot pixel offset of the canvas left edge into the series.
    pub scroll_start: f32,
    /// Fractional sample index at the canvas left edge.
    pub left_edge: f64,
    /// Fractional sample index at the canvas right edge.
    pub right_edge: f64,
}

impl VisibleRange {
    /// An empty range; callers render only grid and background.
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            pixels_per_sample: 0.0,
            scroll_start: 0.0,
            left_edge: 0.0,
            right_edge: 0.0,
        }
    }

    /// Whether no samples are visible.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Screen X of a sample index under the current scroll offset.
    pub fn x_for_index(&self, index: usize) -> f32 {
        index as f32 * self.pixels_per_sample - self.scroll_start
    }
}

/// Pixel distance between adjacent samples implied by the selection window.
pub fn pixels_per_sample(state: &ViewportState, width: f32, metrics: &Metrics, n: usize) -> f32 {
    if n == 0 || width <= 0.0 {
        return 0.0;
    }
    let samples_in_window = (state.span() + metrics.hold_line_width) / (width / n as f32);
    if samples_in_window <= 0.0 {
        return 0.0;
    }
    width / samples_in_window
}

/// Ratio of series intervals to visible main-plot pixel columns.
///
/// Converts mini-map pixel distances into main-plot pixel distances; the pan
/// gesture divides its delta by this to move the window at matching speed.
pub fn zoom_coefficient(state: &ViewportState, width: f32, metrics: &Metrics, n: usize) -> f32 {
    let per_sample = pixels_per_sample(state, width, metrics, n);
    if per_sample <= 0.0 || width <= 0.0 || n < 2 {
        return 0.0;
    }
    let visible_columns = width / per_sample;
    (n - 1) as f32 / visible_columns
}

/// Resolve the visible index range for the current selection window.
///
/// Guarantees `0 <= start < end <= n` for non-empty output; a collapsed span
/// yields [`VisibleRange::empty`] and the caller must skip polyline and
/// autoscale work.
pub fn visible_range(state: &ViewportState, width: f32, metrics: &Metrics, n: usize) -> VisibleRange {
    let per_sample = pixels_per_sample(state, width, metrics, n);
    if per_sample <= 0.0 || n < 2 {
        return VisibleRange::empty();
    }
    let zoom = zoom_coefficient(state, width, metrics, n);
    let half = metrics.hold_line_half();
    let scroll_start = (state.selection_start_x - half) * zoom;
    let scroll_end = (state.selection_end_x + half) * zoom;

    let start_term = (scroll_start as f64 / per_sample as f64).ceil() as isize;
    let start = start_term.saturating_sub(1).max(0) as usize;
    let end_term = (scroll_end as f64 / per_sample as f64).ceil() as isize + 1;
    let end = (end_term.max(0) as usize).min(n);
    if end <= start {
        return VisibleRange::empty();
    }

    let last = (n - 1) as f64;
    let left_edge = (scroll_start as f64 / per_sample as f64).clamp(0.0, last);
    let right_edge = (scroll_end as f64 / per_sample as f64).clamp(0.0, last);
    VisibleRange {
        start,
        end,
        pixels_per_sample: per_sample,
        scroll_start,
        left_edge,
        right_edge,
    }
}

/// Value of a series at a fractional index, by linear interpolation.
///
/// Positions outside `[0, N−1]` clamp to the nearest sample, so the edge
/// value converges to the raw sample as the fraction approaches 0 or 1 and
/// no extrapolation happens past either end.
pub fn sample_at(values: &[u64], position: f64) -> f64 {
    let Some(last) = values.len().checked_sub(1) else {
        return 0.0;
    };
    let clamped = position.clamp(0.0, last as f64);
    let index = clamped.floor() as usize;
    let next = (index + 1).min(last);
    let fraction = clamped - index as f64;
    let y1 = values[index] as f64;
    let y2 = values[next] as f64;
    y1 + (y2 - y1) * fraction
}

/// Autoscaled Y maximum over the visible slice of every series.
///
/// Takes the maximum of all raw samples strictly inside `(start, end)` and
/// the two boundary values interpolated at the fractional viewport edges.
/// The lower bound of the plot is fixed at zero, so only the maximum is
/// computed.
pub fn autoscale_max(
    data: &SeriesData,
    start: usize,
    end: usize,
    left_edge: f64,
    right_edge: f64,
) -> f64 {
    let mut max = 0.0_f64;
    for series in data.series() {
        let values = series.values();
        max = max.max(sample_at(values, left_edge));
        max = max.max(sample_at(values, right_edge));
        for index in (start + 1)..end.min(values.len()) {
            max = max.max(values[index] as f64);
        }
    }
    max
}

/// Autoscaled Y maximum for a resolved [`VisibleRange`].
pub fn autoscale_max_for_range(data: &SeriesData, range: &VisibleRange) -> f64 {
    if range.is_empty() {
        return 0.0;
    }
    autoscale_max(data, range.start, range.end, range.left_edge, range.right_edge)
}

/// Project a data value onto the plot, top-down pixel space.
///
/// A `y_max` of zero is a flat zero line at the plot bottom rather than a
/// division by zero.
pub fn project_to_pixels(value: f64, plot_height: f32, y_max: f64) -> f32 {
    if y_max <= 0.0 {
        return plot_height;
    }
    plot_height - (value * (plot_height as f64 / y_max)) as f32
}
