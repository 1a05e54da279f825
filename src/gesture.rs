//! Gesture classification and drag handling.
//!
//! A gesture is classified once at pointer-down by hit-testing the down
//! point, and the chosen mode is held until pointer-up. Each move delta is
//! applied under the mode's clamp; an update that would violate the window
//! invariants is dropped whole rather than clamped to the boundary, which
//! keeps the handles from jittering at the limits.

use tracing::trace;

use crate::style::Metrics;
use crate::viewport::{ViewportState, zoom_coefficient};

/// Active interaction mode for the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No gesture in progress.
    #[default]
    None,
    /// Dragging inside the main plot pans the selection window.
    PanMainPlot,
    /// Dragging the interior of the selection window moves it.
    DragSelectionWindow,
    /// Dragging the left handle resizes the window from the left.
    DragLeftHandle,
    /// Dragging the right handle resizes the window from the right.
    DragRightHandle,
}

/// Classify a pointer-down coordinate into an interaction mode.
///
/// Anything above the overview strip pans the main plot. Within the strip,
/// the left handle zone wins over the right, which wins over the window
/// interior. The handle hit zone extends one handle width to each side of
/// the handle center.
pub fn hit_test(x: f32, y: f32, plot_height: f32, state: &ViewportState, metrics: &Metrics) -> InteractionMode {
    if y <= plot_height {
        return InteractionMode::PanMainPlot;
    }
    let tolerance = metrics.hold_line_width;
    let left = state.selection_start_x;
    let right = state.selection_end_x;
    if x >= left - tolerance && x <= left + tolerance {
        InteractionMode::DragLeftHandle
    } else if x >= right - tolerance && x <= right + tolerance {
        InteractionMode::DragRightHandle
    } else if x > left && x < right {
        InteractionMode::DragSelectionWindow
    } else {
        InteractionMode::None
    }
}

/// Apply a horizontal drag distance under the active mode.
///
/// `dx` follows the scroll-distance convention: positive when the pointer
/// moved left. Returns the updated state, or `None` when the mode is idle or
/// the update would violate a window invariant (the event is dropped and no
/// redraw is needed).
pub fn apply_drag(
    state: &ViewportState,
    mode: InteractionMode,
    dx: f32,
    width: f32,
    metrics: &Metrics,
    n: usize,
) -> Option<ViewportState> {
    let distance = dx * metrics.scroll_speed;
    let half = metrics.hold_line_half();
    let min_span = metrics.min_window_width - half;

    let next = match mode {
        InteractionMode::None => return None,
        InteractionMode::PanMainPlot => {
            let zoom = zoom_coefficient(state, width, metrics, n);
            if zoom <= 0.0 {
                return None;
            }
            let shift = distance / zoom;
            let next = ViewportState::new(state.selection_start_x + shift, state.selection_end_x + shift);
            (next.selection_start_x >= half && next.selection_end_x <= width - half).then_some(next)
        }
        InteractionMode::DragSelectionWindow => {
            let next = ViewportState::new(state.selection_start_x - distance, state.selection_end_x - distance);
            (next.selection_start_x >= half && next.selection_end_x <= width - half).then_some(next)
        }
        InteractionMode::DragLeftHandle => {
            let left = state.selection_start_x - distance;
            (left >= half && left <= state.selection_end_x - min_span)
                .then(|| ViewportState::new(left, state.selection_end_x))
        }
        InteractionMode::DragRightHandle => {
            let right = state.selection_end_x - distance;
            (right <= width - half && right >= state.selection_start_x + min_span)
                .then(|| ViewportState::new(state.selection_start_x, right))
        }
    }?;

    trace!(
        ?mode,
        dx = dx as f64,
        start = next.selection_start_x as f64,
        end = next.selection_end_x as f64,
        "gesture update accepted"
    );
    Some(next)
}
