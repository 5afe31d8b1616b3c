use serde::{Deserialize, Serialize};

use crate::host::{ChartHost, SeriesId};

/// Inclusive time interval in host display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: f64,
    pub to: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from: from.min(to),
            to: from.max(to),
        }
    }

    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.from && time <= self.to
    }

    #[must_use]
    pub fn clamp(self, time: f64) -> f64 {
        time.clamp(self.from, self.to)
    }
}

/// Domain-to-pixel queries resolved against live chart state.
///
/// Every method returns `None` when the host cannot resolve a coordinate
/// (value outside the current axis domain, or chart not yet laid out).
/// Callers must treat `None` as "do not draw this edge", never as an error.
pub trait CoordinateSource {
    fn price_to_y(&self, price: f64) -> Option<f64>;
    fn time_to_x(&self, time: f64) -> Option<f64>;
    fn visible_time_range(&self) -> Option<TimeRange>;
}

/// Read-through adapter over a live host's scales.
///
/// Holds no cached state: the host's scales move continuously under
/// pan/zoom/resize, so every call re-queries the chart.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateBridge<'a, H: ChartHost + ?Sized> {
    host: &'a H,
    series: SeriesId,
}

impl<'a, H: ChartHost + ?Sized> CoordinateBridge<'a, H> {
    #[must_use]
    pub fn new(host: &'a H, series: SeriesId) -> Self {
        Self { host, series }
    }
}

impl<H: ChartHost + ?Sized> CoordinateSource for CoordinateBridge<'_, H> {
    fn price_to_y(&self, price: f64) -> Option<f64> {
        self.host.price_to_coordinate(self.series, price)
    }

    fn time_to_x(&self, time: f64) -> Option<f64> {
        self.host.time_to_coordinate(time)
    }

    fn visible_time_range(&self) -> Option<TimeRange> {
        self.host.visible_time_range()
    }
}
