//! Axis label text: magnitude abbreviation, date formatting, and the
//! decimation stride that keeps date labels from overlapping.

use std::sync::Arc;

use chrono::DateTime;

/// Host-supplied text measurement callback, in pixels.
///
/// Font metrics are a host concern; the core only ever asks for widths.
pub type TextMeasure = Arc<dyn Fn(&str) -> f32 + Send + Sync>;

/// Abbreviate a count for Y-axis labels: thousands to "K", millions to "M".
///
/// One decimal is kept when it is significant ("1.5K"), dropped otherwise
/// ("2K").
pub fn format_value(value: u64) -> String {
    if value >= 1_000_000 {
        format_scaled(value, 1_000_000, "M")
    } else if value >= 1_000 {
        format_scaled(value, 1_000, "K")
    } else {
        value.to_string()
    }
}

fn format_scaled(value: u64, unit: u64, suffix: &str) -> String {
    let whole = value / unit;
    let tenth = (value % unit) * 10 / unit;
    if tenth == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{tenth}{suffix}")
    }
}

/// Format an epoch-millisecond timestamp as a short date, e.g. "Apr 7".
pub fn format_date(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(moment) => moment.format("%b %-d").to_string(),
        None => String::new(),
    }
}

/// Widest date label across the whole axis.
///
/// Label text depends only on the timestamps, so this is measured once per
/// data or layout change and cached by the caller.
pub fn max_label_width(timestamps: &[i64], measure: &TextMeasure) -> f32 {
    timestamps
        .iter()
        .map(|ms| measure(&format_date(*ms)))
        .fold(0.0, f32::max)
}

/// Stride between labeled samples so consecutive labels never overlap.
///
/// Chosen so that `stride × pixels_per_sample` is at least one label width
/// plus padding; recomputed every frame because zooming changes the pixel
/// density.
pub fn label_stride(max_label_width: f32, padding: f32, pixels_per_sample: f32) -> usize {
    if pixels_per_sample <= 0.0 {
        return 1;
    }
    let stride = ((max_label_width + padding) / pixels_per_sample).ceil() as usize;
    stride.max(1)
}
