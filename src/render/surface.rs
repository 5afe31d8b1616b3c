use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with a replacement alpha, for translucent zone fills.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> OverlayResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(OverlayError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Filled axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectFill {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub color: Color,
}

/// Stroked line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStroke {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

/// Label descriptor anchored to the price axis.
///
/// `y` is resolved on demand from the live price scale; the axis renderer
/// owns horizontal placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAxisLabel {
    pub text: String,
    pub y: f64,
    pub color: Color,
}

/// Scene buffer one overlay draw pass writes into.
///
/// The host's backend replays the collected commands; primitives never talk
/// to a concrete rendering API directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSurface {
    width: f64,
    height: f64,
    pub rects: Vec<RectFill>,
    pub lines: Vec<LineStroke>,
}

impl DrawSurface {
    pub fn new(width: f64, height: f64) -> OverlayResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(OverlayError::InvalidData(format!(
                "surface size must be finite and > 0, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            rects: Vec::new(),
            lines: Vec::new(),
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn fill_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: Color) {
        self.rects.push(RectFill {
            left,
            top,
            right,
            bottom,
            color,
        });
    }

    pub fn stroke_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: Color,
    ) {
        self.lines.push(LineStroke {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        });
    }

    pub fn validate(&self) -> OverlayResult<()> {
        for rect in &self.rects {
            if !rect.left.is_finite()
                || !rect.top.is_finite()
                || !rect.right.is_finite()
                || !rect.bottom.is_finite()
            {
                return Err(OverlayError::InvalidData(
                    "rect coordinates must be finite".to_owned(),
                ));
            }
            rect.color.validate()?;
        }
        for line in &self.lines {
            if !line.x1.is_finite()
                || !line.y1.is_finite()
                || !line.x2.is_finite()
                || !line.y2.is_finite()
            {
                return Err(OverlayError::InvalidData(
                    "line coordinates must be finite".to_owned(),
                ));
            }
            if !line.stroke_width.is_finite() || line.stroke_width <= 0.0 {
                return Err(OverlayError::InvalidData(
                    "line stroke width must be finite and > 0".to_owned(),
                ));
            }
            line.color.validate()?;
        }
        Ok(())
    }
}
