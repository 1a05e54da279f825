//! Backend-agnostic draw primitives and per-frame planning.
//!
//! The planner turns the current viewport and cached overview projection
//! into an ordered list of line and text commands. The host owns the drawing
//! surface and replays the list with its own graphics API.

use crate::geom::{CanvasSize, ScreenPoint};
use crate::label::{self, TextMeasure};
use crate::minimap::MiniMapSeries;
use crate::series::SeriesData;
use crate::style::{Metrics, Theme};
use crate::viewport::{self, ViewportState, VisibleRange};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new(r, g, b, 1.0)
    }

    /// Copy of this color with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// One draw primitive for the host to paint.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Stroke a polyline through the given points.
    Line {
        /// Polyline points in screen space.
        points: Vec<ScreenPoint>,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        stroke_width: f32,
    },
    /// Draw a text run.
    Text {
        /// Baseline position in screen space.
        position: ScreenPoint,
        /// Text content.
        content: String,
        /// Text color.
        color: Color,
    },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands in draw order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

fn segment(a: ScreenPoint, b: ScreenPoint, color: Color, stroke_width: f32) -> RenderCommand {
    RenderCommand::Line {
        points: vec![a, b],
        color,
        stroke_width,
    }
}

/// Horizontal grid rows across the main plot.
fn plan_grid(list: &mut RenderList, width: f32, plot_height: f32, metrics: &Metrics, theme: &Theme) {
    let row_height = plot_height / metrics.grid_rows as f32;
    for row in 0..metrics.grid_rows {
        let y = (row + 1) as f32 * row_height;
        list.push(segment(
            ScreenPoint::new(0.0, y),
            ScreenPoint::new(width, y),
            theme.grid,
            1.0,
        ));
    }
}

/// Abbreviated Y value at each grid row, bottom row labeled "0".
fn plan_y_labels(list: &mut RenderList, plot_height: f32, y_max: f64, metrics: &Metrics, theme: &Theme) {
    let row_height = plot_height / metrics.grid_rows as f32;
    let per_row = y_max as u64 / metrics.grid_rows as u64;
    for row in 0..metrics.grid_rows {
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(
                metrics.text_padding,
                plot_height - row as f32 * row_height - metrics.text_padding,
            ),
            content: label::format_value(row as u64 * per_row),
            color: theme.label,
        });
    }
}

/// One polyline per series over the visible index range.
fn plan_series(
    list: &mut RenderList,
    data: &SeriesData,
    range: &VisibleRange,
    plot_height: f32,
    y_max: f64,
    metrics: &Metrics,
) {
    for series in data.series() {
        let values = series.values();
        let points: Vec<ScreenPoint> = (range.start..range.end)
            .map(|index| {
                ScreenPoint::new(
                    range.x_for_index(index),
                    viewport::project_to_pixels(values[index] as f64, plot_height, y_max),
                )
            })
            .collect();
        list.push(RenderCommand::Line {
            points,
            color: series.color(),
            stroke_width: metrics.plot_stroke,
        });
    }
}

/// Decimated date labels centered under their sample columns.
fn plan_date_labels(
    list: &mut RenderList,
    data: &SeriesData,
    range: &VisibleRange,
    plot_height: f32,
    max_label_width: f32,
    measure: &TextMeasure,
    metrics: &Metrics,
    theme: &Theme,
) {
    if range.is_empty() {
        return;
    }
    let stride = label::label_stride(max_label_width, metrics.label_padding, range.pixels_per_sample);
    let baseline = plot_height + metrics.text_size + metrics.text_padding;
    let mut index = range.start - range.start % stride;
    while index < range.end {
        let content = label::format_date(data.timestamps()[index]);
        let center = range.x_for_index(index);
        let x = center - measure(&content) / 2.0;
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(x, baseline),
            content,
            color: theme.label,
        });
        index += stride;
    }
}

/// Overview polylines, selection handles, window border, and dim overlays.
fn plan_minimap(
    list: &mut RenderList,
    minimap: &[MiniMapSeries],
    state: &ViewportState,
    size: CanvasSize,
    metrics: &Metrics,
    theme: &Theme,
) {
    for series in minimap {
        list.push(RenderCommand::Line {
            points: series.points.clone(),
            color: series.color,
            stroke_width: metrics.minimap_stroke,
        });
    }

    let strip_top = size.height - metrics.minimap_height;
    let half = metrics.hold_line_half();

    // Handle markers.
    for x in [state.selection_start_x, state.selection_end_x] {
        list.push(segment(
            ScreenPoint::new(x, strip_top),
            ScreenPoint::new(x, size.height),
            theme.selection,
            metrics.hold_line_width,
        ));
    }

    // Top and bottom border of the selected window.
    let border_width = 2.0;
    let bottom_y = size.height - border_width / 2.0;
    let top_y = bottom_y - metrics.minimap_height + border_width;
    let start_x = state.selection_start_x + half;
    let end_x = state.selection_end_x - half;
    for y in [top_y, bottom_y] {
        list.push(segment(
            ScreenPoint::new(start_x, y),
            ScreenPoint::new(end_x, y),
            theme.selection,
            border_width,
        ));
    }

    // Dimmed regions outside the window, drawn as strip-height strokes.
    let overlay_y = size.height - metrics.minimap_height / 2.0;
    let left_limit = state.selection_start_x - half;
    if left_limit > 0.0 {
        list.push(segment(
            ScreenPoint::new(0.0, overlay_y),
            ScreenPoint::new(left_limit, overlay_y),
            theme.overlay,
            metrics.minimap_height,
        ));
    }
    let right_limit = state.selection_end_x + half;
    if right_limit < size.width {
        list.push(segment(
            ScreenPoint::new(size.width, overlay_y),
            ScreenPoint::new(right_limit, overlay_y),
            theme.overlay,
            metrics.minimap_height,
        ));
    }
}

/// Assemble the full frame for the current state.
///
/// Draw order matches the paint order of the widget: grid, main polylines
/// and Y labels, date labels, overview strip with its ornaments. An empty
/// visible range emits only grid and overview output.
#[allow(clippy::too_many_arguments)]
pub(crate) fn plan_frame(
    data: &SeriesData,
    state: &ViewportState,
    size: CanvasSize,
    minimap: &[MiniMapSeries],
    max_label_width: f32,
    measure: &TextMeasure,
    metrics: &Metrics,
    theme: &Theme,
) -> RenderList {
    let mut list = RenderList::new();
    let plot_height = metrics.plot_height(size.height);
    plan_grid(&mut list, size.width, plot_height, metrics, theme);

    let range = viewport::visible_range(state, size.width, metrics, data.len());
    if !range.is_empty() {
        let y_max = viewport::autoscale_max_for_range(data, &range);
        plan_series(&mut list, data, &range, plot_height, y_max, metrics);
        plan_y_labels(&mut list, plot_height, y_max, metrics, theme);
    }
    plan_date_labels(
        &mut list,
        data,
        &range,
        plot_height,
        max_label_width,
        measure,
        metrics,
        theme,
    );
    plan_minimap(&mut list, minimap, state, size, metrics, theme);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;
    use std::sync::Arc;

    fn measure() -> TextMeasure {
        Arc::new(|text: &str| text.len() as f32 * 7.0)
    }

    fn data() -> SeriesData {
        SeriesData::new(
            vec![0, 86_400_000, 172_800_000],
            vec![Series::new("joined", Color::BLACK, vec![10, 50, 20])],
        )
        .unwrap()
    }

    fn full_window(width: f32, metrics: &Metrics) -> ViewportState {
        let half = metrics.hold_line_half();
        ViewportState::new(half, width - half)
    }

    #[test]
    fn frame_contains_grid_series_and_labels() {
        let metrics = Metrics::default();
        let theme = Theme::default();
        let size = CanvasSize::new(300.0, 400.0);
        let state = full_window(size.width, &metrics);
        let minimap = crate::minimap::project(&data(), size, &metrics);
        let list = plan_frame(
            &data(),
            &state,
            size,
            &minimap,
            42.0,
            &measure(),
            &metrics,
            &theme,
        );

        let lines = list
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::Line { .. }))
            .count();
        let texts = list
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::Text { .. }))
            .count();
        // 6 grid rows, 1 main polyline, 1 overview polyline, 2 handles,
        // 2 borders; the full window has no dim overlays.
        assert_eq!(lines, 12);
        // 6 Y labels plus at least one date label.
        assert!(texts > 6);
    }

    #[test]
    fn bottom_row_label_is_zero() {
        let metrics = Metrics::default();
        let mut list = RenderList::new();
        plan_y_labels(&mut list, 240.0, 50.0, &metrics, &Theme::default());
        let RenderCommand::Text { content, .. } = &list.commands()[0] else {
            panic!("expected text");
        };
        assert_eq!(content, "0");
        let RenderCommand::Text { content, .. } = &list.commands()[1] else {
            panic!("expected text");
        };
        // 50 / 6 rows truncates to 8 per row.
        assert_eq!(content, "8");
    }

    #[test]
    fn date_labels_never_overlap() {
        let metrics = Metrics::default();
        let theme = Theme::default();
        let measure = measure();
        let values: Vec<u64> = (0..200).map(|i| (i * 13 % 97) as u64).collect();
        let timestamps: Vec<i64> = (0..200).map(|i| i * 86_400_000).collect();
        let data = SeriesData::new(timestamps, vec![Series::new("joined", Color::BLACK, values)]).unwrap();
        let size = CanvasSize::new(320.0, 480.0);
        let state = full_window(size.width, &metrics);
        let range = viewport::visible_range(&state, size.width, &metrics, data.len());
        let max_width = crate::label::max_label_width(data.timestamps(), &measure);

        let mut list = RenderList::new();
        plan_date_labels(
            &mut list,
            &data,
            &range,
            metrics.plot_height(size.height),
            max_width,
            &measure,
            &metrics,
            &theme,
        );

        let mut previous_center: Option<(f32, f32)> = None;
        for command in list.commands() {
            let RenderCommand::Text { position, content, .. } = command else {
                continue;
            };
            let width = measure(content);
            let center = position.x + width / 2.0;
            if let Some((last_center, last_width)) = previous_center {
                let required = last_width.max(width) + metrics.label_padding;
                assert!(
                    center - last_center >= required - 1e-3,
                    "labels too close: {last_center} then {center}"
                );
            }
            previous_center = Some((center, width));
        }
    }

    #[test]
    fn empty_range_emits_grid_only_for_plot_area() {
        let metrics = Metrics::default();
        let theme = Theme::default();
        let size = CanvasSize::new(300.0, 400.0);
        // Collapsed window: no visible samples.
        let state = ViewportState::new(10.0, 10.0 - metrics.hold_line_width);
        let list = plan_frame(
            &data(),
            &state,
            size,
            &[],
            42.0,
            &measure(),
            &metrics,
            &theme,
        );
        let texts = list
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::Text { .. }))
            .count();
        assert_eq!(texts, 0, "no labels for an empty range");
    }
}
