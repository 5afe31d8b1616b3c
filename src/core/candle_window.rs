use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Canonical OHLC candle in host display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcBar {
    /// Builds a validated OHLC bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> OverlayResult<Self> {
        if !time.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(OverlayError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(OverlayError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(OverlayError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated OHLC bar.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> OverlayResult<Self> {
        Self::new(
            crate::core::display_time::datetime_to_display_time(time) as f64,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> OverlayResult<f64> {
    value.to_f64().ok_or_else(|| {
        OverlayError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Ordered sequence of loaded candles.
///
/// The window defines the valid coordinate domain for every overlay: the
/// first bar's time is the eligibility floor for markers, and the last bar's
/// time is the upper clipping bound for open-ended zones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandleWindow {
    bars: Vec<OhlcBar>,
}

impl CandleWindow {
    /// Builds a window from bars sorted ascending by time.
    ///
    /// Rejects non-monotonic input; duplicate timestamps are not allowed
    /// either, since they would make coordinate lookups ambiguous.
    pub fn new(bars: Vec<OhlcBar>) -> OverlayResult<Self> {
        for pair in bars.windows(2) {
            if pair[1].time <= pair[0].time {
                return Err(OverlayError::InvalidData(
                    "candle times must be strictly increasing".to_owned(),
                ));
            }
        }
        Ok(Self { bars })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn bars(&self) -> &[OhlcBar] {
        &self.bars
    }

    /// Time of the earliest loaded candle, the marker eligibility floor.
    #[must_use]
    pub fn first_time(&self) -> Option<f64> {
        self.bars.first().map(|bar| bar.time)
    }

    /// Time of the latest loaded candle, the clipping bound for open-ended
    /// annotations.
    #[must_use]
    pub fn last_time(&self) -> Option<f64> {
        self.bars.last().map(|bar| bar.time)
    }
}
