pub mod candle_window;
pub mod coordinates;
pub mod display_time;

pub use candle_window::{CandleWindow, OhlcBar};
pub use coordinates::{CoordinateBridge, CoordinateSource, TimeRange};
pub use display_time::{DISPLAY_TIME_OFFSET_SECS, datetime_to_display_time, ms_to_display_time};
