use serde::{Deserialize, Serialize};

use crate::core::{CoordinateSource, TimeRange};
use crate::error::OverlayResult;
use crate::render::{Color, DrawSurface, PriceAxisLabel};

/// Opaque handle to a host-side series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesId(u64);

impl SeriesId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque handle to an attached primitive.
///
/// Exactly one handle exists per attached primitive; the attaching manager
/// is the exclusive owner and must drop the handle immediately after
/// detachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveId(u64);

impl PrimitiveId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque handle to the marker set currently occupying a series' marker slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerSetId(u64);

impl MarkerSetId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerSide {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
}

/// Point-in-time annotation handed to the host's marker renderer.
///
/// `time` is host display time. The host renders markers in list order and
/// does not guarantee a stable sort for equal times, so producers must
/// deliver their intended tie-break order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMarker {
    pub time: f64,
    pub side: MarkerSide,
    pub color: Color,
    pub shape: MarkerShape,
    pub text: String,
}

/// Vertex of an auxiliary line series, in display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub time: f64,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesOptions {
    pub color: Color,
    pub line_width: f64,
}

impl Default for LineSeriesOptions {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.2, 0.4, 0.9),
            line_width: 2.0,
        }
    }
}

/// Drawable object attached to a host series.
///
/// The host's render loop re-invokes `draw` on every frame, so a stale
/// coordinate snapshot self-corrects one frame later. Primitives must never
/// request a redraw from inside `draw`, attach, or update paths: the host
/// observes attached primitives itself, and a re-entrant redraw request can
/// re-enter the same cycle without terminating.
pub trait OverlayPrimitive {
    /// Writes this frame's draw commands into `surface`.
    ///
    /// Unresolvable coordinates skip the affected segment; `draw` itself
    /// never fails the render pass.
    fn draw(&self, surface: &mut DrawSurface, coords: &dyn CoordinateSource);

    /// Price-axis labels this primitive contributes, resolved against the
    /// live price scale.
    fn price_axis_labels(&self, coords: &dyn CoordinateSource) -> Vec<PriceAxisLabel>;
}

/// The complete chart surface this engine consumes.
///
/// Anything beyond these operations is host-private; overlay code must not
/// grow dependencies on other host features.
pub trait ChartHost {
    /// Creates an auxiliary line series holding `points`.
    fn add_line_series(
        &mut self,
        options: LineSeriesOptions,
        points: &[LinePoint],
    ) -> OverlayResult<SeriesId>;

    /// Removes a series created by [`ChartHost::add_line_series`].
    fn remove_series(&mut self, series: SeriesId) -> OverlayResult<()>;

    /// Attaches a primitive to `series`, transferring ownership to the host.
    fn attach_primitive(
        &mut self,
        series: SeriesId,
        primitive: Box<dyn OverlayPrimitive>,
    ) -> OverlayResult<PrimitiveId>;

    /// Detaches a previously attached primitive.
    fn detach_primitive(&mut self, primitive: PrimitiveId) -> OverlayResult<()>;

    /// Replaces the single marker set associated with `series`.
    ///
    /// The slot holds at most one set; an empty `markers` list clears it.
    /// Returns the handle of the newly installed set.
    fn replace_markers(
        &mut self,
        series: SeriesId,
        markers: Vec<ChartMarker>,
    ) -> OverlayResult<MarkerSetId>;

    /// Pixel y for a price on the series' price scale, when resolvable.
    fn price_to_coordinate(&self, series: SeriesId, price: f64) -> Option<f64>;

    /// Pixel x for a display time on the time scale, when resolvable.
    fn time_to_coordinate(&self, time: f64) -> Option<f64>;

    /// Currently visible time interval, `None` before first layout.
    fn visible_time_range(&self) -> Option<TimeRange>;
}
