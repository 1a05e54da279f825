//! Host-facing chart facade.
//!
//! [`Chart`] owns the interaction state and render caches, and exposes the
//! synchronous entry points a host shell drives: layout, gesture deltas, data
//! replacement, and per-frame planning. Everything runs on the host's UI
//! thread; there is no internal concurrency.

use tracing::debug;

use crate::geom::CanvasSize;
use crate::gesture::{self, InteractionMode};
use crate::label::{self, TextMeasure};
use crate::minimap::{self, MiniMapSeries};
use crate::render::{self, RenderList};
use crate::series::SeriesData;
use crate::style::{Metrics, Theme};
use crate::viewport::ViewportState;

/// Interactive timeline chart engine.
///
/// Mutated only through the gesture and layout entry points; `render_frame`
/// is pure with respect to the current state, so repeated calls without an
/// intervening mutation produce identical command lists.
pub struct Chart {
    theme: Theme,
    metrics: Metrics,
    measure: TextMeasure,
    data: Option<SeriesData>,
    size: Option<CanvasSize>,
    state: Option<ViewportState>,
    mode: InteractionMode,
    minimap: Vec<MiniMapSeries>,
    max_label_width: f32,
}

impl Chart {
    /// Create a chart with the given look and a host text-measurement
    /// callback.
    pub fn new(theme: Theme, metrics: Metrics, measure: TextMeasure) -> Self {
        Self {
            theme,
            metrics,
            measure,
            data: None,
            size: None,
            state: None,
            mode: InteractionMode::None,
            minimap: Vec::new(),
            max_label_width: 0.0,
        }
    }

    /// Handle a layout or resize event.
    ///
    /// Resets the selection window to the rightmost default and rebuilds the
    /// size-dependent caches.
    pub fn on_layout(&mut self, width: f32, height: f32) {
        let size = CanvasSize::new(width, height);
        if !size.is_valid() {
            self.size = None;
            self.state = None;
            self.minimap.clear();
            return;
        }
        self.size = Some(size);
        self.state = Some(ViewportState::rightmost(width, &self.metrics));
        self.rebuild_caches();
        debug!(width = width as f64, height = height as f64, "chart laid out");
    }

    /// Replace the displayed data.
    ///
    /// `SeriesData` carries its invariants from construction, so the swap is
    /// atomic: caches are invalidated and rebuilt before the next paint.
    pub fn set_series_data(&mut self, data: SeriesData) {
        debug!(samples = data.len(), series = data.series().len(), "series data replaced");
        self.data = Some(data);
        self.rebuild_caches();
    }

    /// Classify a pointer-down coordinate and begin a gesture.
    pub fn on_gesture_start(&mut self, x: f32, y: f32) {
        let (Some(size), Some(state)) = (self.size, &self.state) else {
            return;
        };
        let plot_height = self.metrics.plot_height(size.height);
        self.mode = gesture::hit_test(x, y, plot_height, state, &self.metrics);
    }

    /// Apply a gesture move delta.
    ///
    /// `dx` is the horizontal scroll distance (positive when the pointer
    /// moved left). Returns true when the state changed and a redraw is
    /// needed; out-of-bounds updates are dropped and return false.
    pub fn on_gesture_move(&mut self, dx: f32, _dy: f32) -> bool {
        let (Some(size), Some(state), Some(data)) = (self.size, &self.state, &self.data) else {
            return false;
        };
        match gesture::apply_drag(state, self.mode, dx, size.width, &self.metrics, data.len()) {
            Some(next) => {
                self.state = Some(next);
                true
            }
            None => false,
        }
    }

    /// End the current gesture.
    pub fn on_gesture_end(&mut self) {
        self.mode = InteractionMode::None;
    }

    /// Plan the draw commands for the current state.
    ///
    /// Without layout and data there is nothing to draw and the list is
    /// empty.
    pub fn render_frame(&self) -> RenderList {
        let (Some(size), Some(state), Some(data)) = (self.size, &self.state, &self.data) else {
            return RenderList::new();
        };
        render::plan_frame(
            data,
            state,
            size,
            &self.minimap,
            self.max_label_width,
            &self.measure,
            &self.metrics,
            &self.theme,
        )
    }

    /// Access the current selection window, if laid out.
    pub fn viewport_state(&self) -> Option<ViewportState> {
        self.state
    }

    /// Access the active interaction mode.
    pub fn interaction_mode(&self) -> InteractionMode {
        self.mode
    }

    fn rebuild_caches(&mut self) {
        let (Some(size), Some(data)) = (self.size, &self.data) else {
            self.minimap.clear();
            self.max_label_width = 0.0;
            return;
        };
        self.minimap = minimap::project(data, size, &self.metrics);
        self.max_label_width = label::max_label_width(data.timestamps(), &self.measure);
    }
}

impl std::fmt::Debug for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chart")
            .field("size", &self.size)
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("series", &self.data.as_ref().map(|data| data.series().len()))
            .finish_non_exhaustive()
    }
}
