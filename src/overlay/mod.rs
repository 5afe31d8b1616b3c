pub mod marker_aggregator;
pub mod stroke_series;
pub mod zone_primitive;
pub mod zones;

pub use marker_aggregator::{MarkerAggregator, MarkerPalette, SourceToggles};
pub use stroke_series::StrokeSeriesManager;
pub use zone_primitive::{ZonePrimitive, ZoneStyle};
pub use zones::ZoneOverlayManager;
