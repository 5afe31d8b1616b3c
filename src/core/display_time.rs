//! Display-time conversion for annotation timestamps.
//!
//! The host chart has no timezone concept; candle times arrive from upstream
//! already expressed in whole seconds shifted forward by eight hours. Every
//! non-candle timestamp that originates as a millisecond epoch must go
//! through the same conversion or overlays land a constant eight hours off
//! their candles.

use chrono::{DateTime, Utc};

/// Fixed forward shift applied to every display timestamp, in seconds.
pub const DISPLAY_TIME_OFFSET_SECS: i64 = 8 * 60 * 60;

/// Converts a raw millisecond epoch to the host chart's display time.
///
/// Truncates to whole seconds first, then applies the fixed offset:
/// `floor(ms / 1000) + 28_800`.
#[must_use]
pub fn ms_to_display_time(epoch_ms: i64) -> i64 {
    epoch_ms.div_euclid(1000) + DISPLAY_TIME_OFFSET_SECS
}

/// Converts a typed UTC timestamp to the host chart's display time.
#[must_use]
pub fn datetime_to_display_time(time: DateTime<Utc>) -> i64 {
    ms_to_display_time(time.timestamp_millis())
}
