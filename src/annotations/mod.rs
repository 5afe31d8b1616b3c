pub mod signals;
pub mod stroke;
pub mod zone;

pub use signals::{BreakoutDirection, BreakoutEvent, FractalKind, FractalPoint, SignalSide, TradeSignal};
pub use stroke::{StrokeDirection, TrendSegment};
pub use zone::{ZoneAnnotation, ZoneKind};
