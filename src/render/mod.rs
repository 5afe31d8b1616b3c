mod surface;

pub use surface::{Color, DrawSurface, LineStroke, PriceAxisLabel, RectFill};
