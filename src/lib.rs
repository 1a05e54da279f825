//! timeline_plot is the viewport and autoscaling engine behind an
//! interactive multi-series timeline chart with a synchronized overview
//! strip. The host GUI delivers layout and gesture events and paints the
//! returned draw-command lists; everything in between (index-range
//! selection, boundary-interpolated Y autoscaling, date-label decimation,
//! overview projection) lives here.

#![forbid(unsafe_code)]

pub mod chart;
pub mod geom;
pub mod gesture;
pub mod label;
pub mod minimap;
pub mod render;
pub mod series;
pub mod style;
pub mod viewport;

pub use chart::Chart;
pub use geom::{CanvasSize, ScreenPoint};
pub use gesture::InteractionMode;
pub use label::TextMeasure;
pub use minimap::MiniMapSeries;
pub use render::{Color, RenderCommand, RenderList};
pub use series::{Series, SeriesData, SeriesDataError};
pub use style::{Metrics, Theme};
pub use viewport::{ViewportState, VisibleRange};
