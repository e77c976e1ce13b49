use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{BoundingBox, Point};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DRAG_GESTURE_LISTENERS, Element, InteractionMode, ListenerGuard, ListenerRegistry,
    PointerEvent, WheelEvent,
};

pub const TRANSFORM_ATTRIBUTE: &str = "transform";

/// Scale bounds and per-step zoom increment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomPanConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Additive scale change per wheel notch or zoom command.
    pub zoom_speed: f64,
}

impl Default for ZoomPanConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            zoom_speed: 0.1,
        }
    }
}

impl ZoomPanConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "zoom min_scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(ChartError::InvalidConfig(
                "zoom max_scale must be finite and >= min_scale".to_owned(),
            ));
        }
        if !self.zoom_speed.is_finite() || self.zoom_speed <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "zoom zoom_speed must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse zoom/pan config json: {e}"))
        })?;
        config.validate()
    }

    #[must_use]
    pub fn clamp_scale(self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Current transform of one chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPanState {
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    /// Pointer position minus origin at drag start; `Some` only while dragging.
    pub drag_anchor: Option<Point>,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
            drag_anchor: None,
        }
    }
}

impl ZoomPanState {
    /// SVG transform combining pan and zoom; always a full replacement value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.origin_x, self.origin_y, self.scale
        )
    }
}

/// Why a drag gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureEnd {
    PointerUp,
    PointerCancel,
    WindowBlur,
    PointerLeftWindow,
}

/// Zoomable chart surface: client bounds, the render group receiving the
/// transform, and the document the drag listeners attach to.
#[derive(Debug, Clone)]
pub struct Surface {
    bounds: BoundingBox,
    group: Element,
    document: ListenerRegistry,
}

impl Surface {
    #[must_use]
    pub fn new(bounds: BoundingBox, group: Element, document: ListenerRegistry) -> Self {
        Self {
            bounds,
            group,
            document,
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
    pub fn group(&self) -> &Element {
        &self.group
    }

    #[must_use]
    pub fn document(&self) -> &ListenerRegistry {
        &self.document
    }

    #[must_use]
    pub fn transform(&self) -> Option<&str> {
        self.group.attribute(TRANSFORM_ATTRIBUTE)
    }
}

/// Zoom/pan controller for one surface.
#[derive(Debug)]
pub struct ZoomPan {
    config: ZoomPanConfig,
    state: ZoomPanState,
    gesture: Option<ListenerGuard>,
}

/// Attaches zoom/pan to `surface` and writes the initial transform.
///
/// The initial scale is `1` clamped into the configured bounds. A missing
/// surface yields `Ok(None)`.
pub fn add_zoom_pan(
    surface: Option<&mut Surface>,
    config: ZoomPanConfig,
) -> ChartResult<Option<ZoomPan>> {
    let config = config.validate()?;
    let Some(surface) = surface else {
        return Ok(None);
    };
    let zoom_pan = ZoomPan {
        config,
        state: ZoomPanState {
            scale: config.clamp_scale(1.0),
            ..ZoomPanState::default()
        },
        gesture: None,
    };
    zoom_pan.apply(surface);
    Ok(Some(zoom_pan))
}

impl ZoomPan {
    #[must_use]
    pub fn config(&self) -> ZoomPanConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> ZoomPanState {
        self.state
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.state.drag_anchor.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    /// Zooms one notch toward the pointer, keeping the point under the cursor
    /// fixed. Allowed while dragging.
    pub fn wheel(&mut self, surface: &mut Surface, event: &WheelEvent) {
        let cursor = surface.bounds.to_local(event.client_x, event.client_y);
        let old_scale = self.state.scale;
        let new_scale = self
            .config
            .clamp_scale(old_scale + event.zoom_direction() * self.config.zoom_speed);

        let ratio = new_scale / old_scale;
        let origin_x = cursor.x - ratio * (cursor.x - self.state.origin_x);
        let origin_y = cursor.y - ratio * (cursor.y - self.state.origin_y);

        // keep an in-flight drag continuous with the shifted origin
        if let Some(anchor) = self.state.drag_anchor.as_mut() {
            anchor.x += self.state.origin_x - origin_x;
            anchor.y += self.state.origin_y - origin_y;
        }

        self.state.scale = new_scale;
        self.state.origin_x = origin_x;
        self.state.origin_y = origin_y;
        trace!(scale = new_scale, origin_x, origin_y, "wheel zoom");
        self.apply(surface);
    }

    /// Enters `Dragging` and acquires the document move/up listeners.
    ///
    /// A pointer-down during an unfinished drag replaces the previous gesture.
    pub fn pointer_down(&mut self, surface: &mut Surface, event: &PointerEvent) {
        // at most one gesture's listeners are registered at a time
        self.gesture = None;
        self.state.drag_anchor = Some(Point::new(
            event.client_x - self.state.origin_x,
            event.client_y - self.state.origin_y,
        ));
        self.gesture = Some(surface.document.acquire(&DRAG_GESTURE_LISTENERS));
        debug!(
            client_x = event.client_x,
            client_y = event.client_y,
            "drag started"
        );
    }

    /// Follows the pointer while dragging. Returns `false` in `Idle`.
    pub fn pointer_move(&mut self, surface: &mut Surface, event: &PointerEvent) -> bool {
        let Some(anchor) = self.state.drag_anchor else {
            return false;
        };
        self.state.origin_x = event.client_x - anchor.x;
        self.state.origin_y = event.client_y - anchor.y;
        self.apply(surface);
        true
    }

    pub fn pointer_up(&mut self, surface: &mut Surface) {
        self.end_gesture(surface, GestureEnd::PointerUp);
    }

    pub fn pointer_cancel(&mut self, surface: &mut Surface) {
        self.end_gesture(surface, GestureEnd::PointerCancel);
    }

    pub fn window_blur(&mut self, surface: &mut Surface) {
        self.end_gesture(surface, GestureEnd::WindowBlur);
    }

    pub fn pointer_left_window(&mut self, surface: &mut Surface) {
        self.end_gesture(surface, GestureEnd::PointerLeftWindow);
    }

    /// Returns to `Idle` and releases the gesture's document listeners.
    /// Ending with no drag in progress is a no-op.
    pub fn end_gesture(&mut self, surface: &mut Surface, reason: GestureEnd) {
        if self.state.drag_anchor.take().is_none() {
            return;
        }
        self.gesture = None;
        debug!(
            ?reason,
            active_listeners = surface.document.active_count(),
            "drag ended"
        );
    }

    /// Returns to the initial view: origin at zero, scale `1` within bounds.
    pub fn reset(&mut self, surface: &mut Surface) {
        self.state.scale = self.config.clamp_scale(1.0);
        self.state.origin_x = 0.0;
        self.state.origin_y = 0.0;
        self.apply(surface);
    }

    pub fn zoom_in(&mut self, surface: &mut Surface) {
        self.step_zoom(surface, 1.0);
    }

    pub fn zoom_out(&mut self, surface: &mut Surface) {
        self.step_zoom(surface, -1.0);
    }

    fn step_zoom(&mut self, surface: &mut Surface, direction: f64) {
        self.state.scale = self
            .config
            .clamp_scale(self.state.scale + direction * self.config.zoom_speed);
        trace!(scale = self.state.scale, "step zoom");
        self.apply(surface);
    }

    fn apply(&self, surface: &mut Surface) {
        surface
            .group
            .set_attribute(TRANSFORM_ATTRIBUTE, self.state.transform());
    }
}
