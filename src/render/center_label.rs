use crate::core::{BoundingBox, Point};
use crate::render::{Color, TextPrimitive};

/// Caption/value pair drawn in the hole of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterLabel {
    pub caption: String,
    pub value: String,
    pub caption_color: Color,
    pub value_color: Color,
}

impl CenterLabel {
    #[must_use]
    pub fn new(caption: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            value: value.into(),
            caption_color: Color::rgba8(230, 230, 230, 0.7),
            value_color: Color::opaque(18, 211, 157),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, caption_color: Color, value_color: Color) -> Self {
        self.caption_color = caption_color;
        self.value_color = value_color;
        self
    }

    /// Lays out both lines around the center of `chart_area`.
    ///
    /// Font sizes scale with the full chart height: the caption uses
    /// `height / 12`, the value `height / 8`.
    #[must_use]
    pub fn primitives(&self, chart_area: BoundingBox, chart_height: f64) -> [TextPrimitive; 2] {
        let caption_size = chart_height / 12.0;
        let value_size = chart_height / 8.0;
        let center = chart_area.center();
        [
            TextPrimitive::centered(
                self.caption.clone(),
                Point::new(center.x, center.y - value_size / 2.0),
                caption_size,
                self.caption_color,
            ),
            TextPrimitive::centered(
                self.value.clone(),
                Point::new(center.x, center.y + caption_size / 2.0),
                value_size,
                self.value_color,
            ),
        ]
    }
}
