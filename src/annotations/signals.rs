//! Marker source records, as delivered by the upstream detection feeds.
//!
//! All timestamps here are raw millisecond epochs; the aggregator converts
//! them to display time during the merge.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalSide {
    Buy,
    Sell,
}

/// Trading signal emitted by the signal engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignal {
    pub time_ms: i64,
    pub side: SignalSide,
    /// Signal type label, e.g. "MACD" or "RSI".
    pub kind: String,
    pub strength: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakoutDirection {
    Up,
    Down,
}

impl BreakoutDirection {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

/// Breakout event emitted by the range-breakout detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakoutEvent {
    pub time_ms: i64,
    pub direction: BreakoutDirection,
    /// Confidence in percent, 0..=100.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalKind {
    Top,
    Bottom,
}

/// Fractal turning point from the chan-theory overlay.
///
/// Only confirmed fractals are displayable; unconfirmed ones are still
/// delivered by the feed and must be skipped during the merge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalPoint {
    pub time_ms: i64,
    pub kind: FractalKind,
    pub confirmed: bool,
}
