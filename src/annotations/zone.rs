use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Kind of horizontal price band an overlay feed produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Support/resistance band detected over a time interval.
    SupportResistance,
    /// Consolidation center from the chan-theory overlay.
    Center,
}

/// Horizontal price band bounded by an optional time interval.
///
/// Zones arrive from external detector feeds and replace prior zones of the
/// same kind wholesale on every update; there is no incremental merge.
/// Times are host display time (already second-granular and shifted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneAnnotation {
    pub kind: ZoneKind,
    pub upper_price: f64,
    pub lower_price: f64,
    pub mid_price: f64,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
}

impl ZoneAnnotation {
    /// Builds a validated zone.
    ///
    /// Invariants:
    /// - all prices are finite, `upper_price >= lower_price`
    /// - `mid_price` lies within `[lower_price, upper_price]`
    /// - when both times are present, `start_time <= end_time`
    pub fn new(
        kind: ZoneKind,
        upper_price: f64,
        lower_price: f64,
        mid_price: f64,
        start_time: Option<f64>,
        end_time: Option<f64>,
    ) -> OverlayResult<Self> {
        if !upper_price.is_finite() || !lower_price.is_finite() || !mid_price.is_finite() {
            return Err(OverlayError::InvalidData(
                "zone prices must be finite".to_owned(),
            ));
        }
        if upper_price < lower_price {
            return Err(OverlayError::InvalidData(
                "zone upper price must be >= lower price".to_owned(),
            ));
        }
        if mid_price < lower_price || mid_price > upper_price {
            return Err(OverlayError::InvalidData(
                "zone mid price must be within [lower, upper]".to_owned(),
            ));
        }
        for time in [start_time, end_time].into_iter().flatten() {
            if !time.is_finite() {
                return Err(OverlayError::InvalidData(
                    "zone times must be finite".to_owned(),
                ));
            }
        }
        if let (Some(start), Some(end)) = (start_time, end_time) {
            if start > end {
                return Err(OverlayError::InvalidData(
                    "zone start time must be <= end time".to_owned(),
                ));
            }
        }

        Ok(Self {
            kind,
            upper_price,
            lower_price,
            mid_price,
            start_time,
            end_time,
        })
    }

    /// Band built from feed-native millisecond epoch bounds; applies the
    /// display-time conversion the host requires of every non-candle
    /// timestamp.
    pub fn banded_from_epoch_ms(
        kind: ZoneKind,
        upper_price: f64,
        lower_price: f64,
        start_ms: Option<i64>,
        end_ms: Option<i64>,
    ) -> OverlayResult<Self> {
        let to_display =
            |ms: Option<i64>| ms.map(|ms| crate::core::display_time::ms_to_display_time(ms) as f64);
        Self::banded(
            kind,
            upper_price,
            lower_price,
            to_display(start_ms),
            to_display(end_ms),
        )
    }

    /// Band with the midpoint derived from the bounds.
    pub fn banded(
        kind: ZoneKind,
        upper_price: f64,
        lower_price: f64,
        start_time: Option<f64>,
        end_time: Option<f64>,
    ) -> OverlayResult<Self> {
        Self::new(
            kind,
            upper_price,
            lower_price,
            (upper_price + lower_price) / 2.0,
            start_time,
            end_time,
        )
    }
}
