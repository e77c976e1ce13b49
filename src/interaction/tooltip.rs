use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{BoundingBox, Point};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerEvent;

/// Tooltip placement and text-metric tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub class_name: String,
    /// Displacement from the pointer, in pixels.
    pub offset: Point,
    /// Minimum gap kept between the tooltip and the container's right/bottom edge.
    pub margin_px: f64,
    pub transition_ms: u32,
    pub max_width_px: f64,
    pub padding_x_px: f64,
    pub padding_y_px: f64,
    pub font_size_px: f64,
    /// Average glyph advance as a share of the font size.
    pub char_width_ratio: f64,
    pub line_height_ratio: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            class_name: "chart-tooltip".to_owned(),
            offset: Point::new(10.0, 10.0),
            margin_px: 10.0,
            transition_ms: 200,
            max_width_px: 200.0,
            padding_x_px: 12.0,
            padding_y_px: 8.0,
            font_size_px: 12.0,
            char_width_ratio: 0.6,
            line_height_ratio: 1.4,
        }
    }
}

impl TooltipConfig {
    pub fn validate(&self) -> ChartResult<()> {
        if self.class_name.is_empty() {
            return Err(ChartError::InvalidConfig(
                "tooltip class name must not be empty".to_owned(),
            ));
        }
        if !self.offset.x.is_finite() || !self.offset.y.is_finite() {
            return Err(ChartError::InvalidConfig(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        for (name, value) in [
            ("margin_px", self.margin_px),
            ("padding_x_px", self.padding_x_px),
            ("padding_y_px", self.padding_y_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "tooltip `{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("max_width_px", self.max_width_px),
            ("font_size_px", self.font_size_px),
            ("char_width_ratio", self.char_width_ratio),
            ("line_height_ratio", self.line_height_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "tooltip `{name}` must be finite and > 0"
                )));
            }
        }
        if self.max_width_px <= 2.0 * self.padding_x_px {
            return Err(ChartError::InvalidConfig(
                "tooltip max width must exceed horizontal padding".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse tooltip config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Estimated rendered size of `content`, wrapping at `max_width_px`.
    #[must_use]
    pub fn estimate_size(&self, content: &str) -> TooltipSize {
        let char_width = self.font_size_px * self.char_width_ratio;
        let inner_max = self.max_width_px - 2.0 * self.padding_x_px;

        let mut widest: f64 = 0.0;
        let mut rows = 0usize;
        for line in content.split('\n') {
            let natural = line.chars().count() as f64 * char_width;
            widest = widest.max(natural.min(inner_max));
            rows += ((natural / inner_max).ceil() as usize).max(1);
        }

        TooltipSize {
            width: widest + 2.0 * self.padding_x_px,
            height: rows as f64 * self.font_size_px * self.line_height_ratio
                + 2.0 * self.padding_y_px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

/// Tooltip node owned by its container; reused across show/hide cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipNode {
    class_name: String,
    visible: bool,
    content: String,
    position: Point,
    measured: Option<TooltipSize>,
}

impl TooltipNode {
    fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_owned(),
            visible: false,
            content: String::new(),
            position: Point::default(),
            measured: None,
        }
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Container-local top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// CSS transform placing the node at [`Self::position`].
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.position.x, self.position.y)
    }

    #[must_use]
    pub fn opacity(&self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }
}

/// Chart container hosting at most one tooltip node.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContainer {
    bounds: BoundingBox,
    tooltip: Option<TooltipNode>,
}

impl TooltipContainer {
    #[must_use]
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: BoundingBox) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipNode> {
        self.tooltip.as_ref()
    }

    /// Overrides text-metric estimation with a size measured by the host.
    ///
    /// The measurement belongs to the current content and is discarded when
    /// the content changes. Returns `false` when no tooltip node exists yet.
    pub fn set_measured_tooltip_size(&mut self, size: TooltipSize) -> bool {
        match self.tooltip.as_mut() {
            Some(node) => {
                node.measured = Some(size);
                true
            }
            None => false,
        }
    }

    fn ensure_tooltip(&mut self, class_name: &str) -> &mut TooltipNode {
        self.tooltip
            .get_or_insert_with(|| TooltipNode::new(class_name))
    }
}

/// Show/hide/update handle bound to one container's tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    config: TooltipConfig,
}

/// Attaches a tooltip to `container`, creating its node on first use.
///
/// A missing container yields `None`; an invalid config falls back to
/// defaults.
pub fn create_tooltip(
    container: Option<&mut TooltipContainer>,
    config: TooltipConfig,
) -> Option<Tooltip> {
    let container = container?;
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            warn!(error = %err, "invalid tooltip config, using defaults");
            TooltipConfig::default()
        }
    };
    container.ensure_tooltip(&config.class_name);
    Some(Tooltip { config })
}

impl Tooltip {
    #[must_use]
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn show(&self, container: &mut TooltipContainer, event: &PointerEvent, content: &str) {
        self.update(container, event, content);
        container.ensure_tooltip(&self.config.class_name).visible = true;
    }

    /// Hides the node without destroying it.
    pub fn hide(&self, container: &mut TooltipContainer) {
        if let Some(node) = container.tooltip.as_mut() {
            node.visible = false;
        }
    }

    /// Replaces content and repositions without touching visibility.
    pub fn update(&self, container: &mut TooltipContainer, event: &PointerEvent, content: &str) {
        let bounds = container.bounds;
        let node = container.ensure_tooltip(&self.config.class_name);
        if node.content != content {
            node.content.clear();
            node.content.push_str(content);
            node.measured = None;
        }

        let size = node
            .measured
            .unwrap_or_else(|| self.config.estimate_size(&node.content));
        let local = bounds.to_local(event.client_x, event.client_y);
        let x = local.x + self.config.offset.x;
        let y = local.y + self.config.offset.y;
        let max_x = bounds.width - size.width - self.config.margin_px;
        let max_y = bounds.height - size.height - self.config.margin_px;

        node.position = Point::new(x.min(max_x).max(0.0), y.min(max_y).max(0.0));
        trace!(
            x = node.position.x,
            y = node.position.y,
            "tooltip position updated"
        );
    }
}
