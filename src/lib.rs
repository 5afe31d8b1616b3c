//! chart-overlays: annotation synchronization engine for candlestick charts.
//!
//! This crate keeps zone rectangles, merged marker layers, and trend-segment
//! line series consistent against a live, mutating host chart. The host owns
//! candle rendering, axes, and the render loop; this crate owns overlay
//! lifecycle, coordinate clipping, and marker-set reconciliation, reached
//! through the narrow [`host::ChartHost`] contract.

pub mod annotations;
pub mod core;
pub mod error;
pub mod host;
pub mod overlay;
pub mod render;
pub mod telemetry;

pub use crate::core::{CandleWindow, CoordinateBridge, CoordinateSource, TimeRange};
pub use error::{OverlayError, OverlayResult};
pub use host::{ChartHost, ChartMarker, MarkerSetId, PrimitiveId, RecordingHost, SeriesId};
pub use overlay::{MarkerAggregator, StrokeSeriesManager, ZoneOverlayManager, ZonePrimitive};
