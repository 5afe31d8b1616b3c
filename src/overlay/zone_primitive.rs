use serde::{Deserialize, Serialize};

use crate::annotations::{ZoneAnnotation, ZoneKind};
use crate::core::CoordinateSource;
use crate::error::OverlayResult;
use crate::host::OverlayPrimitive;
use crate::render::{Color, DrawSurface, PriceAxisLabel};

/// Visual tuning for one zone kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneStyle {
    pub fill: Color,
    pub border: Color,
    pub border_width: f64,
}

impl ZoneStyle {
    /// Default palette per zone kind.
    #[must_use]
    pub fn for_kind(kind: ZoneKind) -> Self {
        match kind {
            ZoneKind::SupportResistance => Self {
                fill: Color::rgb(0.25, 0.47, 0.85).with_alpha(0.12),
                border: Color::rgb(0.25, 0.47, 0.85),
                border_width: 1.0,
            },
            ZoneKind::Center => Self {
                fill: Color::rgb(0.93, 0.60, 0.13).with_alpha(0.10),
                border: Color::rgb(0.93, 0.60, 0.13),
                border_width: 1.0,
            },
        }
    }

    pub fn validate(self) -> OverlayResult<Self> {
        self.fill.validate()?;
        self.border.validate()?;
        if !self.border_width.is_finite() || self.border_width <= 0.0 {
            return Err(crate::error::OverlayError::InvalidData(
                "zone border width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Drawable horizontal price band.
///
/// Construction is pure data capture; the host's render loop drives every
/// draw. `update_data` only swaps the stored annotation and deliberately
/// does not request a redraw: the host re-invokes `draw` each frame anyway,
/// and redraw requests from inside update paths can re-enter the render
/// cycle without terminating.
pub struct ZonePrimitive {
    zone: ZoneAnnotation,
    style: ZoneStyle,
    /// Last loaded candle time; the governing right bound for open-ended
    /// zones.
    clip_time: Option<f64>,
}

impl ZonePrimitive {
    #[must_use]
    pub fn new(zone: ZoneAnnotation, style: ZoneStyle, clip_time: Option<f64>) -> Self {
        Self {
            zone,
            style,
            clip_time,
        }
    }

    /// Replaces the stored annotation. No host interaction happens here.
    pub fn update_data(&mut self, zone: ZoneAnnotation) {
        self.zone = zone;
    }

    #[must_use]
    pub fn zone(&self) -> ZoneAnnotation {
        self.zone
    }

    /// Right edge every zone is clamped to: the last loaded candle's x when
    /// resolvable, otherwise the visible range's right edge, otherwise the
    /// surface width. Keeps a panning timeline from stretching a zone into
    /// implicit infinity.
    fn right_clamp(&self, surface: &DrawSurface, coords: &dyn CoordinateSource) -> f64 {
        let mut clamp = surface.width();
        if let Some(x) = coords
            .visible_time_range()
            .and_then(|range| coords.time_to_x(range.to))
        {
            clamp = clamp.min(x);
        }
        if let Some(x) = self.clip_time.and_then(|clip| coords.time_to_x(clip)) {
            clamp = clamp.min(x);
        }
        clamp
    }

    fn resolve_horizontal_bounds(
        &self,
        surface: &DrawSurface,
        coords: &dyn CoordinateSource,
    ) -> (f64, f64) {
        let left_x = self
            .zone
            .start_time
            .and_then(|time| coords.time_to_x(time))
            .unwrap_or(0.0);

        let clamp = self.right_clamp(surface, coords);
        let effective_end = match (self.zone.end_time, self.clip_time) {
            (Some(end), Some(clip)) => Some(end.min(clip)),
            (Some(end), None) => Some(end),
            (None, _) => None,
        };
        let right_x = effective_end
            .and_then(|time| coords.time_to_x(time))
            .map_or(clamp, |x| x.min(clamp));

        (left_x, right_x.max(left_x))
    }
}

impl OverlayPrimitive for ZonePrimitive {
    fn draw(&self, surface: &mut DrawSurface, coords: &dyn CoordinateSource) {
        let (left_x, right_x) = self.resolve_horizontal_bounds(surface, coords);
        let top_y = coords.price_to_y(self.zone.upper_price);
        let bottom_y = coords.price_to_y(self.zone.lower_price);

        if let (Some(top), Some(bottom)) = (top_y, bottom_y) {
            surface.fill_rect(left_x, top, right_x, bottom, self.style.fill);
        }

        // Boundary lines degrade independently: one unresolvable bound
        // drops only its own line.
        for y in [top_y, bottom_y].into_iter().flatten() {
            surface.stroke_line(
                left_x,
                y,
                right_x,
                y,
                self.style.border_width,
                self.style.border,
            );
        }
    }

    fn price_axis_labels(&self, coords: &dyn CoordinateSource) -> Vec<PriceAxisLabel> {
        [self.zone.upper_price, self.zone.lower_price]
            .into_iter()
            .map(|price| PriceAxisLabel {
                text: format!("{price:.2}"),
                y: coords.price_to_y(price).unwrap_or(0.0),
                color: self.style.border,
            })
            .collect()
    }
}
