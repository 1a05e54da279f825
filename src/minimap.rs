//! Overview-strip projection.
//!
//! The strip always shows the entire series at a fixed scale, independent of
//! the selection window. Its polylines depend only on the data and canvas
//! size, so they are projected once and cached until either changes.

use crate::geom::{CanvasSize, ScreenPoint};
use crate::render::Color;
use crate::series::SeriesData;
use crate::style::Metrics;

/// One projected overview polyline.
#[derive(Debug, Clone)]
pub struct MiniMapSeries {
    /// Series color.
    pub color: Color,
    /// Polyline points across the full strip width.
    pub points: Vec<ScreenPoint>,
}

/// Project every series onto the overview strip.
///
/// Samples are spaced uniformly at `width / (N−1)` and scaled vertically so
/// the global maximum across all series maps to the strip height minus the
/// top and bottom margins. A global maximum of zero produces flat baselines.
pub fn project(data: &SeriesData, size: CanvasSize, metrics: &Metrics) -> Vec<MiniMapSeries> {
    let n = data.len();
    if n < 2 || !size.is_valid() {
        return Vec::new();
    }
    let spacing = size.width / (n - 1) as f32;
    let baseline = size.height - metrics.line_margin;
    let global_max = data.global_max();
    let scale = if global_max > 0 {
        (metrics.minimap_height - metrics.line_margin * 2.0) / global_max as f32
    } else {
        0.0
    };

    data.series()
        .iter()
        .map(|series| {
            let points = series
                .values()
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    ScreenPoint::new(index as f32 * spacing, baseline - *value as f32 * scale)
                })
                .collect();
            MiniMapSeries {
                color: series.color(),
                points,
            }
        })
        .collect()
}
