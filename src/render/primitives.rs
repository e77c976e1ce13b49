use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Canvas fill color: 8-bit RGB channels plus a normalized alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidData(format!(
                "color alpha must be finite and in [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// `rgba(r, g, b, a)` as a canvas `fillStyle` expects it.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Filled (and optionally stroked) SVG path, e.g. one donut segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub data: String,
    /// CSS fill as authored; may be a `url(#...)` gradient reference.
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(data: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            fill: fill.into(),
            stroke: None,
            stroke_width: 1.0,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>, stroke_width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.data.starts_with('M') {
            return Err(ChartError::InvalidData(
                "path data must start with a move command".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// One line of canvas text, vertically centered on `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub font_family: String,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    /// Centered text in [`DEFAULT_FONT_FAMILY`].
    #[must_use]
    pub fn centered(text: impl Into<String>, at: Point, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x: at.x,
            y: at.y,
            font_size_px,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            color,
            h_align: TextHAlign::Center,
        }
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// CSS font shorthand, e.g. `40px Inter`.
    #[must_use]
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.font_size_px, self.font_family)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text must not be empty".to_owned(),
            ));
        }
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "text `{}` has a non-finite anchor",
                self.text
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "text `{}` needs a positive font size",
                self.text
            )));
        }
        if self.font_family.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        self.color.validate()
    }
}
