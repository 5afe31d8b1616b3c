use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotations::{
    BreakoutDirection, BreakoutEvent, FractalKind, FractalPoint, SignalSide, TradeSignal,
};
use crate::core::{CandleWindow, display_time::ms_to_display_time};
use crate::error::OverlayResult;
use crate::host::{ChartHost, ChartMarker, MarkerSetId, MarkerShape, MarkerSide, SeriesId};
use crate::render::Color;

/// Per-source visibility toggles supplied by the page layer.
///
/// A toggled-off source contributes nothing to the merge, exactly as if its
/// collection were empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceToggles {
    pub signals: bool,
    pub breakouts: bool,
    pub fractals: bool,
}

impl Default for SourceToggles {
    fn default() -> Self {
        Self {
            signals: true,
            breakouts: true,
            fractals: true,
        }
    }
}

/// Marker colors per source and polarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPalette {
    pub buy: Color,
    pub sell: Color,
    pub breakout_up: Color,
    pub breakout_down: Color,
    pub fractal_top: Color,
    pub fractal_bottom: Color,
}

impl Default for MarkerPalette {
    fn default() -> Self {
        Self {
            buy: Color::rgb(0.15, 0.68, 0.38),
            sell: Color::rgb(0.91, 0.30, 0.24),
            breakout_up: Color::rgb(0.95, 0.61, 0.07),
            breakout_down: Color::rgb(0.56, 0.27, 0.68),
            fractal_top: Color::rgb(0.83, 0.18, 0.18),
            fractal_bottom: Color::rgb(0.18, 0.55, 0.34),
        }
    }
}

/// Merges the three independent marker feeds into the series' single
/// marker slot.
///
/// The host associates at most one marker set per series, so independent
/// sources cannot coexist as separate host objects; every sync rebuilds the
/// full list and replaces the slot wholesale. The replacement runs even for
/// an empty merge so stale markers always clear.
pub struct MarkerAggregator {
    series: SeriesId,
    palette: MarkerPalette,
    current_set: Option<MarkerSetId>,
}

impl MarkerAggregator {
    #[must_use]
    pub fn new(series: SeriesId) -> Self {
        Self {
            series,
            palette: MarkerPalette::default(),
            current_set: None,
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: MarkerPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Handle of the marker set currently installed on the host.
    #[must_use]
    pub fn current_set(&self) -> Option<MarkerSetId> {
        self.current_set
    }

    /// Builds the merged, display-shifted, window-filtered marker list.
    ///
    /// Sources keep the fixed order signals -> breakouts -> fractals; for
    /// equal timestamps the host renders in list order, so source order is
    /// the tie-break. Entries whose shifted time precedes the first loaded
    /// candle are dropped silently.
    #[must_use]
    pub fn merge(
        &self,
        signals: &[TradeSignal],
        breakouts: &[BreakoutEvent],
        fractals: &[FractalPoint],
        window: &CandleWindow,
        toggles: SourceToggles,
    ) -> Vec<ChartMarker> {
        let Some(first_time) = window.first_time() else {
            return Vec::new();
        };

        let mut merged = Vec::new();
        if toggles.signals {
            merged.extend(
                signals
                    .iter()
                    .filter_map(|signal| self.signal_marker(signal, first_time)),
            );
        }
        if toggles.breakouts {
            merged.extend(
                breakouts
                    .iter()
                    .filter_map(|event| self.breakout_marker(*event, first_time)),
            );
        }
        if toggles.fractals {
            merged.extend(
                fractals
                    .iter()
                    .filter_map(|point| self.fractal_marker(*point, first_time)),
            );
        }
        merged
    }

    /// Merges and republishes the marker slot, retaining the new handle.
    pub fn sync(
        &mut self,
        host: &mut dyn ChartHost,
        signals: &[TradeSignal],
        breakouts: &[BreakoutEvent],
        fractals: &[FractalPoint],
        window: &CandleWindow,
        toggles: SourceToggles,
    ) -> OverlayResult<()> {
        let merged = self.merge(signals, breakouts, fractals, window, toggles);
        debug!(
            merged = merged.len(),
            signals = signals.len(),
            breakouts = breakouts.len(),
            fractals = fractals.len(),
            "replacing marker set"
        );
        let id = host.replace_markers(self.series, merged)?;
        self.current_set = Some(id);
        Ok(())
    }

    fn display_time(raw_ms: i64, first_time: f64) -> Option<f64> {
        let shifted = ms_to_display_time(raw_ms) as f64;
        (shifted >= first_time).then_some(shifted)
    }

    fn signal_marker(&self, signal: &TradeSignal, first_time: f64) -> Option<ChartMarker> {
        let time = Self::display_time(signal.time_ms, first_time)?;
        let (side, shape, color) = match signal.side {
            SignalSide::Buy => (MarkerSide::Below, MarkerShape::ArrowUp, self.palette.buy),
            SignalSide::Sell => (MarkerSide::Above, MarkerShape::ArrowDown, self.palette.sell),
        };
        Some(ChartMarker {
            time,
            side,
            color,
            shape,
            text: format!("{} {:.1}", signal.kind, signal.strength),
        })
    }

    fn breakout_marker(&self, event: BreakoutEvent, first_time: f64) -> Option<ChartMarker> {
        let time = Self::display_time(event.time_ms, first_time)?;
        let (side, shape, color) = match event.direction {
            BreakoutDirection::Up => (
                MarkerSide::Below,
                MarkerShape::ArrowUp,
                self.palette.breakout_up,
            ),
            BreakoutDirection::Down => (
                MarkerSide::Above,
                MarkerShape::ArrowDown,
                self.palette.breakout_down,
            ),
        };
        Some(ChartMarker {
            time,
            side,
            color,
            shape,
            text: format!("{} {:.0}%", event.direction.label(), event.confidence),
        })
    }

    fn fractal_marker(&self, point: FractalPoint, first_time: f64) -> Option<ChartMarker> {
        if !point.confirmed {
            return None;
        }
        let time = Self::display_time(point.time_ms, first_time)?;
        let (side, shape, color, text) = match point.kind {
            FractalKind::Top => (
                MarkerSide::Above,
                MarkerShape::ArrowDown,
                self.palette.fractal_top,
                "顶",
            ),
            FractalKind::Bottom => (
                MarkerSide::Below,
                MarkerShape::ArrowUp,
                self.palette.fractal_bottom,
                "底",
            ),
        };
        Some(ChartMarker {
            time,
            side,
            color,
            shape,
            text: text.to_owned(),
        })
    }
}
