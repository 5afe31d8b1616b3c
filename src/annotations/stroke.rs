use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrokeDirection {
    Up,
    Down,
    Flat,
}

/// Straight line between two confirmed turning points in the chan-theory
/// overlay, in host display time.
///
/// Segments carry no stable external id; identity for diffing purposes is
/// the `(start_time, end_time, direction)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSegment {
    pub start_time: f64,
    pub start_price: f64,
    pub end_time: f64,
    pub end_price: f64,
    /// Set by the detector; only valid segments are materialized as series.
    pub valid: bool,
}

impl TrendSegment {
    /// Builds a segment from feed-native millisecond epochs, applying the
    /// display-time conversion both endpoints need before reaching the host.
    #[must_use]
    pub fn from_epoch_ms(
        start_ms: i64,
        start_price: f64,
        end_ms: i64,
        end_price: f64,
        valid: bool,
    ) -> Self {
        Self {
            start_time: crate::core::display_time::ms_to_display_time(start_ms) as f64,
            start_price,
            end_time: crate::core::display_time::ms_to_display_time(end_ms) as f64,
            end_price,
            valid,
        }
    }

    #[must_use]
    pub fn direction(self) -> StrokeDirection {
        if self.end_price > self.start_price {
            StrokeDirection::Up
        } else if self.end_price < self.start_price {
            StrokeDirection::Down
        } else {
            StrokeDirection::Flat
        }
    }

    /// Stable identity key for a segment without an external id.
    #[must_use]
    pub fn identity(self) -> (OrderedFloat<f64>, OrderedFloat<f64>, StrokeDirection) {
        (
            OrderedFloat(self.start_time),
            OrderedFloat(self.end_time),
            self.direction(),
        )
    }

    /// True when both endpoints hold finite, drawable values in time order.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.valid
            && self.start_time.is_finite()
            && self.end_time.is_finite()
            && self.start_price.is_finite()
            && self.end_price.is_finite()
            && self.start_time <= self.end_time
    }
}
