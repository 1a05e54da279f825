//! Theme colors and layout metrics.

use crate::render::Color;

/// Visual theme for a chart.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Grid line color.
    pub grid: Color,
    /// Axis label text color.
    pub label: Color,
    /// Selection handle and window border color.
    pub selection: Color,
    /// Dimmed overlay color outside the selected window.
    pub overlay: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grid: Color::new(0.83, 0.83, 0.83, 1.0),
            label: Color::new(0.5, 0.5, 0.5, 1.0),
            selection: Color::new(0.0, 0.0, 1.0, 0.2),
            overlay: Color::new(0.0, 0.0, 1.0, 0.08),
        }
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Layout metrics in logical pixels.
///
/// Defaults mirror a phone-density layout: a 60px overview strip, 60px
/// minimum selection window, and 6 grid rows.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    /// Height of the overview strip at the bottom of the canvas.
    pub minimap_height: f32,
    /// Smallest allowed selection window width.
    pub min_window_width: f32,
    /// Width of a selection handle; the hit zone extends this far on each
    /// side of the handle center.
    pub hold_line_width: f32,
    /// Vertical margin above and below polylines.
    pub line_margin: f32,
    /// Stroke width of main-plot polylines.
    pub plot_stroke: f32,
    /// Stroke width of overview-strip polylines.
    pub minimap_stroke: f32,
    /// Number of horizontal grid rows in the main plot.
    pub grid_rows: usize,
    /// Axis label font size.
    pub text_size: f32,
    /// Padding around axis label text.
    pub text_padding: f32,
    /// Minimum horizontal gap between consecutive date labels.
    pub label_padding: f32,
    /// Multiplier applied to horizontal gesture distances.
    pub scroll_speed: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            minimap_height: 60.0,
            min_window_width: 60.0,
            hold_line_width: 4.0,
            line_margin: 4.0,
            plot_stroke: 2.0,
            minimap_stroke: 0.8,
            grid_rows: 6,
            text_size: 12.0,
            text_padding: 10.0,
            label_padding: 8.0,
            scroll_speed: 1.0,
        }
    }
}

impl Metrics {
    /// Half of the handle width.
    pub fn hold_line_half(&self) -> f32 {
        self.hold_line_width / 2.0
    }

    /// Height of the main plot for a given canvas height.
    ///
    /// The remainder below it holds the date-label band and the overview
    /// strip.
    pub fn plot_height(&self, canvas_height: f32) -> f32 {
        canvas_height - (self.minimap_height + self.text_size + self.text_padding * 2.0)
    }
}
